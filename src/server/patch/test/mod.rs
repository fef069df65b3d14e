use serde_json::{json, Value};

use crate::{
    model::point_of_interest::JsonPatchOperationDto,
    server::model::point_of_interest::PointOfInterestForUpdate,
};


fn op(op: &str, path: &str, value: Option<Value>) -> JsonPatchOperationDto {
    JsonPatchOperationDto {
        op: op.to_string(),
        path: path.to_string(),
        value,
        from: None,
    }
}

fn replace(path: &str, value: Value) -> JsonPatchOperationDto {
    op("replace", path, Some(value))
}

fn central_park_view() -> PointOfInterestForUpdate {
    PointOfInterestForUpdate {
        name: Some("Central Park".to_string()),
        description: Some("The most visited urban park in the United States.".to_string()),
    }
}

fn document(value: Value) -> Vec<JsonPatchOperationDto> {
    serde_json::from_value(value).unwrap()
}

#[test]
fn document_deserializes_from_wire_format() {
    let doc = document(json!([
        { "op": "replace", "path": "/name", "value": "Updated - Central Park" },
        { "op": "replace", "path": "/description" }
    ]));

    assert_eq!(doc.len(), 2);
    assert_eq!(doc[0].value, Some(json!("Updated - Central Park")));
    assert!(doc[1].value.is_none());
}
