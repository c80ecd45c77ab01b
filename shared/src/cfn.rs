//! CloudFormation custom resource response protocol.
//!
//! CloudFormation blocks stack progress until the handler PUTs a response
//! body to the event's presigned `ResponseURL`. Exactly one response is
//! expected per invocation.

use crate::error::TaggingError;
use crate::types::CustomResourceEvent;
use async_trait::async_trait;
use serde::Serialize;
use std::time::Duration;

const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Success,
    Failed,
}

/// Response body PUT back to CloudFormation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CfnResponse {
    pub status: ResponseStatus,
    pub reason: String,
    pub physical_resource_id: String,
    pub stack_id: String,
    pub request_id: String,
    pub logical_resource_id: String,
    pub no_echo: bool,
    pub data: serde_json::Map<String, serde_json::Value>,
}

impl CfnResponse {
    /// Build the response for an event, echoing its correlation fields.
    ///
    /// When the event carries no physical resource id (Create), the log
    /// stream name stands in for it, and the reason always points the
    /// operator at the log stream.
    pub fn for_event(event: &CustomResourceEvent, status: ResponseStatus, log_stream: &str) -> Self {
        Self {
            status,
            reason: format!("See the details in CloudWatch Log Stream: {log_stream}"),
            physical_resource_id: event
                .physical_resource_id
                .clone()
                .unwrap_or_else(|| log_stream.to_string()),
            stack_id: event.stack_id.clone(),
            request_id: event.request_id.clone(),
            logical_resource_id: event.logical_resource_id.clone(),
            no_echo: false,
            data: serde_json::Map::new(),
        }
    }
}

/// Seam over the callback channel, mockable in handler tests.
#[async_trait]
pub trait ResponseSender {
    async fn send(&self, response_url: &str, response: &CfnResponse) -> Result<(), TaggingError>;
}

/// Production sender: a PUT against the presigned S3 URL. The URL's
/// signature covers an empty content-type, so the header is set explicitly.
pub struct HttpResponseSender {
    client: reqwest::Client,
}

impl HttpResponseSender {
    pub fn new() -> Result<Self, TaggingError> {
        let client = reqwest::Client::builder()
            .timeout(RESPONSE_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ResponseSender for HttpResponseSender {
    async fn send(&self, response_url: &str, response: &CfnResponse) -> Result<(), TaggingError> {
        let body = serde_json::to_vec(response)?;

        tracing::debug!(status = ?response.status, "delivering response to CloudFormation");
        let result = self
            .client
            .put(response_url)
            .header(reqwest::header::CONTENT_TYPE, "")
            .body(body)
            .send()
            .await?;

        if !result.status().is_success() {
            return Err(TaggingError::CallbackStatus(result.status().as_u16()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event() -> CustomResourceEvent {
        serde_json::from_value(json!({
            "RequestType": "Create",
            "ResponseURL": "https://example.com/cb",
            "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/demo/7ea0",
            "RequestId": "req-1",
            "LogicalResourceId": "RoleTagging",
        }))
        .unwrap()
    }

    #[test]
    fn test_response_body_wire_shape() {
        let response = CfnResponse::for_event(
            &event(),
            ResponseStatus::Success,
            "2024/01/01/[$LATEST]abcdef",
        );
        let body = serde_json::to_value(&response).unwrap();

        assert_eq!(
            body,
            json!({
                "Status": "SUCCESS",
                "Reason": "See the details in CloudWatch Log Stream: 2024/01/01/[$LATEST]abcdef",
                "PhysicalResourceId": "2024/01/01/[$LATEST]abcdef",
                "StackId": "arn:aws:cloudformation:us-east-1:123456789012:stack/demo/7ea0",
                "RequestId": "req-1",
                "LogicalResourceId": "RoleTagging",
                "NoEcho": false,
                "Data": {}
            })
        );
    }

    #[test]
    fn test_failed_status_serializes_as_failed() {
        let response = CfnResponse::for_event(&event(), ResponseStatus::Failed, "stream");
        let body = serde_json::to_value(&response).unwrap();
        assert_eq!(body["Status"], "FAILED");
    }

    #[test]
    fn test_existing_physical_resource_id_is_preserved() {
        let mut event = event();
        event.physical_resource_id = Some("role-tagging-resource".to_string());

        let response = CfnResponse::for_event(&event, ResponseStatus::Success, "stream");
        assert_eq!(response.physical_resource_id, "role-tagging-resource");
    }
}
