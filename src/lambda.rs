#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use mab_csv::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use mab_csv::{handle_request, ApiGatewayRequest, ApiGatewayResponse, LambdaConfig};

#[cfg(feature = "lambda")]
async fn function_handler(
    event: LambdaEvent<ApiGatewayRequest>,
    config: &LambdaConfig,
) -> Result<ApiGatewayResponse, Error> {
    tracing::info!(
        request_id = %event.context.request_id,
        method = event.payload.method().unwrap_or("-"),
        "Handling conversion request"
    );

    Ok(handle_request(&event.payload, config))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // 冷啟動時讀取一次環境變數
    let config = LambdaConfig::from_env()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    let config = &config;

    run(service_fn(move |event| async move {
        function_handler(event, config).await
    }))
    .await
}
