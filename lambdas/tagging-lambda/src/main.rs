use aws_sdk_iam::Client as IamClient;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use tagging_shared::{CustomResourceEvent, HttpResponseSender, IamRoleTagger};

mod handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    // Initialize the IAM client and the response channel once at startup;
    // both are reused across invocations.
    let config = aws_config::load_from_env().await;
    let tagger = IamRoleTagger::new(IamClient::new(&config));
    let sender = HttpResponseSender::new()?;

    let tagger = &tagger;
    let sender = &sender;
    run(service_fn(move |event: LambdaEvent<CustomResourceEvent>| {
        async move { handler::function_handler(event, tagger, sender).await }
    }))
    .await
}
