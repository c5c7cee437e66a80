use crate::error::AppError;
use crate::presentation::collection::{Collection, Workspace};
use async_trait::async_trait;

/// Interface for the workspace and collection service
#[async_trait]
pub trait CollectionService: Send + Sync {
    /// Gets the workspaces of the current user with their collections
    ///
    /// Returns an empty list without calling the service when there is no session.
    async fn get_workspaces(&self) -> Result<Vec<Workspace>, AppError>;

    /// Gets the collections of the first workspace
    ///
    /// Returns an empty list without calling the service when there is no session.
    async fn get_collections(&self) -> Result<Vec<Collection>, AppError>;

    /// Creates a collection in a workspace
    ///
    /// # Arguments
    /// * `name` - Collection name
    /// * `description` - Collection description
    /// * `workspace_id` - Owning workspace
    ///
    /// # Errors
    /// [`AppError::NotAuthenticated`] when no session or no user identity is held
    async fn create_collection(
        &self,
        name: &str,
        description: &str,
        workspace_id: &str,
    ) -> Result<(), AppError>;
}
