use create_movie::{ApiGatewayProxyResponse, InvocationEnvelope, RecordCreationHandler};
use infrastructure::{DynamoDbClient, DynamoMovieRepository};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use shared::{
    telemetry::{create_lambda_span, LambdaTraceContext},
    tracing::init_tracing,
    Config, StructuredLogger,
};
use tracing::{warn, Instrument};

/// Lambda 呼び出しごとのエントリポイント
async fn function_handler(
    event: LambdaEvent<InvocationEnvelope>,
    handler: &RecordCreationHandler<DynamoMovieRepository>,
) -> Result<ApiGatewayProxyResponse, Error> {
    let (payload, context) = event.into_parts();

    let trace_context = LambdaTraceContext::from_lambda_context(&context);
    let span = create_lambda_span("create-movie", &trace_context);

    Ok(handler.handle(payload).instrument(span).await)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    if let Err(e) = init_tracing() {
        eprintln!("トレーシング初期化エラー: {e}");
        // トレーシング初期化に失敗してもアプリケーションは継続
    }

    let config = Config::from_env();
    if config.table_name.is_none() {
        warn!("TABLE_NAME is not set; every invocation will fail");
    }

    let db_client = DynamoDbClient::new(&config).await;
    let handler = RecordCreationHandler::new(
        DynamoMovieRepository::new(db_client),
        config,
        StructuredLogger::stdout(),
    );
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<InvocationEnvelope>| async move {
        function_handler(event, handler).await
    }))
    .await
}
