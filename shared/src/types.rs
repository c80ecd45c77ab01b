use serde::{Deserialize, Serialize};

/// Lifecycle event CloudFormation delivers to a custom resource Lambda.
///
/// Correlation fields (`StackId`, `RequestId`, `LogicalResourceId`) are echoed
/// back in the response body; `ResponseURL` is the presigned endpoint the
/// response is PUT to.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomResourceEvent {
    pub request_type: RequestType,
    #[serde(rename = "ResponseURL")]
    pub response_url: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    /// Absent on Create; present on Update/Delete.
    #[serde(default)]
    pub physical_resource_id: Option<String>,
    #[serde(default)]
    pub resource_properties: ResourceProperties,
}

/// The lifecycle operation CloudFormation is performing on the resource.
///
/// Anything outside Create/Update/Delete lands on `Other`, which the handler
/// treats as a no-op that still reports SUCCESS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum RequestType {
    Create,
    Update,
    Delete,
    #[serde(other)]
    Other,
}

/// Template-supplied properties. Both fields are optional at the type level
/// so a missing key surfaces as a FAILED response instead of a
/// deserialization error; unknown keys such as `ServiceToken` are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceProperties {
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
}

/// One key-value tag, wire shape `{"Key": ..., "Value": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}
