//! Lambda runtime entry point shared by every binary.

use std::future::Future;

use filedrop_core::HandlerError;
use lambda_http::{service_fn, Body, Error, Request, Response};

use crate::config::Config;
use crate::event::{ApiEvent, ApiResponse};
use crate::state::AppState;
use crate::telemetry;

/// Runs `handler` for every event delivered to this Lambda.
///
/// Cold start installs tracing, loads [`Config`] and builds [`AppState`];
/// a missing required variable aborts here. A handler returning `Err` is
/// reported to the runtime as an invocation error.
pub async fn run_handler<F, Fut>(handler: F) -> Result<(), Error>
where
    F: Fn(AppState, ApiEvent) -> Fut,
    Fut: Future<Output = Result<ApiResponse, HandlerError>> + Send,
{
    telemetry::init();

    let config = Config::from_env().inspect_err(|e| {
        tracing::error!(error = %e, "Invalid configuration");
    })?;
    let state = AppState::from_config(&config).await;
    tracing::info!(table = %config.table_name, bucket = %config.bucket_name, "Cold start complete");

    lambda_http::run(service_fn(|request: Request| {
        let event = ApiEvent::from_request(&request);
        let response = handler(state.clone(), event);
        async move { respond(response.await) }
    }))
    .await
}

fn respond(result: Result<ApiResponse, HandlerError>) -> Result<Response<Body>, Error> {
    let response = result?;
    Ok(response.into_lambda()?)
}
