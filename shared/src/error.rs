use thiserror::Error;

/// Everything that can go wrong between receiving a lifecycle event and
/// delivering its response. The handler converts any of these into a FAILED
/// response; none of them surface as an invocation error.
#[derive(Debug, Error)]
pub enum TaggingError {
    /// The template left out a key the tagging call needs.
    #[error("event is missing required property `{0}`")]
    MissingProperty(&'static str),

    /// A tag could not be converted into the SDK representation.
    #[error("invalid tag: {0}")]
    InvalidTag(String),

    /// The IAM TagRole call itself failed.
    #[error("TagRole call failed: {0}")]
    TagRole(String),

    /// The response body could not be encoded.
    #[error("failed to encode CloudFormation response: {0}")]
    Encode(#[from] serde_json::Error),

    /// The PUT to the presigned response URL failed.
    #[error("failed to deliver CloudFormation response: {0}")]
    Callback(#[from] reqwest::Error),

    /// The response endpoint answered with a non-2xx status.
    #[error("CloudFormation response endpoint returned status {0}")]
    CallbackStatus(u16),
}
