use mobbin_client::error::AppError;
use mobbin_client::presentation::collection::{Workspace, first_workspace_collections};
use serde_json::json;

#[test]
fn takes_collections_of_first_workspace_only() {
    let data = json!([
        { "id": "ws1", "name": "One", "type": "team",
          "collections": [ { "id": "c1", "name": "First", "description": "d" } ] },
        { "id": "ws2", "name": "Two", "type": "team",
          "collections": [ { "id": "c2", "name": "Second" } ] }
    ]);

    let collections = first_workspace_collections(data).unwrap();
    assert_eq!(collections.len(), 1);
    assert_eq!(collections[0].id, "c1");
    assert_eq!(collections[0].description.as_deref(), Some("d"));
}

#[test]
fn empty_workspace_list_yields_no_collections() {
    assert!(first_workspace_collections(json!([])).unwrap().is_empty());
}

#[test]
fn missing_or_null_collections_yield_none() {
    let missing = json!([{ "id": "ws1", "name": "One", "type": "team" }]);
    assert!(first_workspace_collections(missing).unwrap().is_empty());

    let null = json!([{ "id": "ws1", "name": "One", "type": "team", "collections": null }]);
    assert!(first_workspace_collections(null).unwrap().is_empty());
}

#[test]
fn non_array_body_is_deserialization_error() {
    let err = first_workspace_collections(json!({ "message": "nope" })).unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));

    let err = first_workspace_collections(json!(["ws1"])).unwrap_err();
    assert!(matches!(err, AppError::Deserialization(_)));
}

#[test]
fn malformed_collection_is_json_error() {
    let data = json!([{ "id": "ws1", "collections": [ { "name": "no id" } ] }]);
    let err = first_workspace_collections(data).unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[test]
fn workspace_without_collections_field_decodes() {
    let workspace: Workspace =
        serde_json::from_value(json!({ "id": "ws1", "name": "One", "type": "personal" }))
            .unwrap();
    assert!(workspace.collections.is_empty());
    assert_eq!(workspace.workspace_type, "personal");
}
