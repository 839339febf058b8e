use {
    tracing::info,
    lambda_runtime::{Error, LambdaEvent, run, service_fn},
    aws_config::BehaviorVersion,
    visitor_counter_core::{CounterHandler, InvocationEvent},
    visitor_counter::{
        CounterConfig,
        DynamoDbStore,
        config::DEFAULT_CONFIG_FILE,
        invocation::invoke,
        logs::init_logging,
    },
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_logging();

    let config = CounterConfig::load_or_default(DEFAULT_CONFIG_FILE).await?;
    info!(
        table = %config.table_name,
        key = %config.key,
        from_file = config.config_path.is_some(),
        "starting visitor counter"
    );

    // clients are built once per container and shared by every invocation it serves
    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let store = DynamoDbStore::from_config(aws_sdk_dynamodb::Client::new(&sdk_config), &config);
    let handler = CounterHandler::new(store, config.record());
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<InvocationEvent>| invoke(handler, event))).await
}
