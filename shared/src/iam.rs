use crate::error::TaggingError;
use crate::types::Tag;
use async_trait::async_trait;
use aws_sdk_iam::error::DisplayErrorContext;
use aws_sdk_iam::Client as IamClient;

/// Seam over the role-tagging service so the handler can be exercised with a
/// recording client in tests.
#[async_trait]
pub trait RoleTagger {
    async fn tag_role(&self, role_name: &str, tags: &[Tag]) -> Result<(), TaggingError>;
}

/// Production tagger backed by the IAM SDK client. The client is constructed
/// once at startup and reused across invocations.
pub struct IamRoleTagger {
    client: IamClient,
}

impl IamRoleTagger {
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RoleTagger for IamRoleTagger {
    async fn tag_role(&self, role_name: &str, tags: &[Tag]) -> Result<(), TaggingError> {
        let tags = tags
            .iter()
            .map(|tag| {
                aws_sdk_iam::types::Tag::builder()
                    .key(&tag.key)
                    .value(&tag.value)
                    .build()
                    .map_err(|e| TaggingError::InvalidTag(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // One TagRole call per invocation; no batching, no retries.
        let output = self
            .client
            .tag_role()
            .role_name(role_name)
            .set_tags(Some(tags))
            .send()
            .await
            .map_err(|e| TaggingError::TagRole(format!("{}", DisplayErrorContext(&e))))?;

        tracing::info!(role_name, response = ?output, "TagRole succeeded");
        Ok(())
    }
}
