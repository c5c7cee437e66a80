/// Lists the workspaces and collections of the user owning `MOBBIN_ACCESS_TOKEN`
///
/// Run with: cargo run --bin collections
use mobbin_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    setup_logger();

    let Ok(token) = std::env::var("MOBBIN_ACCESS_TOKEN") else {
        error!("MOBBIN_ACCESS_TOKEN is not set");
        return Ok(());
    };

    let client = Client::with_access_token(Config::new(), &token)?;

    for workspace in client.get_workspaces().await? {
        info!("Workspace {} ({}) [{}]", workspace.name, workspace.id, workspace.workspace_type);
        for collection in &workspace.collections {
            info!("  - {}", collection.name);
        }
    }

    let collections = client.get_collections().await?;
    info!("{} collections in the first workspace", collections.len());

    client.close();
    Ok(())
}
