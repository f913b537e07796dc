//! Registers a new record from a JSON body.

use filedrop::lambda::run_handler;
use filedrop::{handlers, HandlerError};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    run_handler(|state, event| async move {
        Ok::<_, HandlerError>(handlers::create_record(&state, event).await)
    })
    .await
}
