/// Lists web apps as a table
///
/// Authenticates with `MOBBIN_ACCESS_TOKEN` if set, otherwise with the
/// browser cookie in `MOBBIN_COOKIE`.
///
/// Run with: cargo run --bin web_apps
use mobbin_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let access_token = std::env::var("MOBBIN_ACCESS_TOKEN").ok();
    let cookie = std::env::var("MOBBIN_COOKIE").ok();

    let client = Client::with_credentials(Config::new(), access_token.as_deref(), cookie.as_deref())?;
    if client.get_session().await.is_none() {
        warn!("No credentials found, requests will use the anon key only");
    }

    info!("Fetching web apps...");
    let apps = client.get_web_apps_table(Some(10)).await?;
    println!("{apps}");

    for app in apps.iter() {
        info!("{} ({}): {}", app.app_name, app.app_category, app.app_tagline);
    }

    client.close();
    Ok(())
}
