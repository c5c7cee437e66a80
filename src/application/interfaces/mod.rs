/// App listing service interface
pub mod apps;
/// Workspace and collection service interface
pub mod collections;
