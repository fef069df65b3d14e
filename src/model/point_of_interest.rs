use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestDto {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
}

/// `name` is optional on the wire so that a missing or `null` name is reported as a
/// validation error rather than a body parsing failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestForCreationDto {
    #[serde(default)]
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointOfInterestForUpdateDto {
    #[serde(default)]
    pub name: Option<String>,
    pub description: Option<String>,
}

/// One operation of a JSON Patch document (RFC 6902).
///
/// ```json
/// [{ "op": "replace", "path": "/name", "value": "Updated - Central Park" }]
/// ```
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct JsonPatchOperationDto {
    pub op: String,
    pub path: String,
    #[serde(default)]
    #[schema(value_type = Object)]
    pub value: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
}
