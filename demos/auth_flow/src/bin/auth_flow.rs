/// Interactive email login
///
/// Sends a one-time code to the address typed on stdin, then verifies the
/// code typed next and prints the resulting session.
///
/// Run with: cargo run --bin auth_flow
use mobbin_client::prelude::*;
use std::io::{self, Write};

fn prompt(label: &str) -> Result<String, AppError> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    info!("Mobbin auth flow");
    let email = prompt("Enter your email: ")?;

    let client = Client::new(Config::new())?;

    info!("Sending one-time code to {}...", email);
    if let Err(e) = client.send_email(&email).await {
        error!("Error sending email: {}", e);
        return Err(e);
    }
    info!("Email sent! Check your inbox.");

    let code = prompt("Enter the 6-digit code: ")?;
    info!("Verifying code...");

    match client.verify_code(&email, &code).await {
        Ok(_) => {
            if let Some(session) = client.get_session().await {
                let preview: String = session.access_token.chars().take(10).collect();
                info!("Login successful!");
                info!("Access Token: {}...", preview);
                if let Some(user) = session.user {
                    info!("User: {}", user.email);
                }
            }
        }
        Err(e) => error!("Error verifying code: {}", e),
    }

    client.close();
    Ok(())
}
