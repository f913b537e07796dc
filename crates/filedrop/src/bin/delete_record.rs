//! Deletes a record by ID.

use filedrop::lambda::run_handler;
use filedrop::{handlers, HandlerError};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    run_handler(|state, event| async move {
        Ok::<_, HandlerError>(handlers::delete_record(&state, event).await)
    })
    .await
}
