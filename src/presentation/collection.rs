/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user collection of saved apps and screens
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    /// Collection identifier
    pub id: String,
    /// Collection name
    pub name: String,
    /// Free-text description
    #[serde(default)]
    pub description: Option<String>,
    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<String>,
    /// Creation time
    #[serde(default)]
    pub created_at: Option<String>,
    /// Collection type
    #[serde(default, rename = "type")]
    pub collection_type: Option<String>,
}

/// A workspace owning collections
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    /// Workspace identifier
    pub id: String,
    /// Workspace name
    pub name: String,
    /// Workspace type (e.g. `personal`, `team`)
    #[serde(rename = "type")]
    pub workspace_type: String,
    /// Collections embedded by the `select` query
    #[serde(default)]
    pub collections: Vec<Collection>,
}

/// Extracts the collections of the first workspace from a raw workspaces body
///
/// Decoding happens in two stages: the body is first read as loose JSON, then
/// only the `collections` array of the first workspace is converted into
/// typed records. An empty workspace list, or a first workspace without a
/// `collections` field, yields no collections.
///
/// # Errors
/// * [`AppError::Deserialization`] if the body is not an array, or its first
///   element is not an object
/// * [`AppError::Json`] if a collection entry does not match [`Collection`]
pub fn first_workspace_collections(data: Value) -> Result<Vec<Collection>, AppError> {
    let Value::Array(workspaces) = data else {
        return Err(AppError::Deserialization(
            "expected an array of workspaces".to_string(),
        ));
    };

    let Some(first) = workspaces.into_iter().next() else {
        return Ok(Vec::new());
    };

    let Value::Object(mut workspace) = first else {
        return Err(AppError::Deserialization(
            "expected workspace to be an object".to_string(),
        ));
    };

    match workspace.remove("collections") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(collections) => Ok(serde_json::from_value(collections)?),
    }
}
