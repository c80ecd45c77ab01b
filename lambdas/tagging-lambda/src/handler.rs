use lambda_runtime::{Error, LambdaEvent};
use tagging_shared::{
    CfnResponse, CustomResourceEvent, RequestType, ResponseSender, ResponseStatus, RoleTagger,
    TaggingError,
};

/// Lifecycle event handler for the role-tagging custom resource.
///
/// Applies the event's tags to the named role, then reports SUCCESS or FAILED
/// back to CloudFormation. Exactly one response is sent per invocation, and
/// no error ever surfaces as an invocation error.
pub(crate) async fn function_handler<T, S>(
    event: LambdaEvent<CustomResourceEvent>,
    tagger: &T,
    sender: &S,
) -> Result<(), Error>
where
    T: RoleTagger,
    S: ResponseSender,
{
    let (event, context) = event.into_parts();
    tracing::info!(
        request_type = ?event.request_type,
        logical_resource_id = %event.logical_resource_id,
        "custom resource event received"
    );

    let status = match apply_tags(&event, tagger).await {
        Ok(()) => ResponseStatus::Success,
        Err(e) => {
            tracing::error!("tagging failed: {e}");
            ResponseStatus::Failed
        }
    };

    let response = CfnResponse::for_event(&event, status, &context.env_config.log_stream);
    if let Err(e) = sender.send(&event.response_url, &response).await {
        // CloudFormation will time the resource out; nothing more to do here.
        tracing::error!("failed to deliver response to CloudFormation: {e}");
    }

    Ok(())
}

async fn apply_tags<T: RoleTagger>(
    event: &CustomResourceEvent,
    tagger: &T,
) -> Result<(), TaggingError> {
    match event.request_type {
        RequestType::Create | RequestType::Update => tag_from_properties(event, tagger).await,
        // Delete re-applies the same tags instead of removing them; tag
        // cleanup is left to the deletion of the role itself.
        RequestType::Delete => tag_from_properties(event, tagger).await,
        RequestType::Other => {
            tracing::warn!(request_type = ?event.request_type, "unrecognized request type, nothing to do");
            Ok(())
        }
    }
}

async fn tag_from_properties<T: RoleTagger>(
    event: &CustomResourceEvent,
    tagger: &T,
) -> Result<(), TaggingError> {
    let properties = &event.resource_properties;
    let role_name = properties
        .role_name
        .as_deref()
        .ok_or(TaggingError::MissingProperty("RoleName"))?;
    let tags = properties
        .tags
        .as_deref()
        .ok_or(TaggingError::MissingProperty("Tags"))?;

    tagger.tag_role(role_name, tags).await
}
