/// App listing models and table rendering
pub mod app;
/// Workspace and collection models
pub mod collection;
