//! Uploads a multipart file to the bucket and registers it.

use filedrop::lambda::run_handler;
use filedrop::{handlers, HandlerError};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    run_handler(|state, event| async move {
        Ok::<_, HandlerError>(handlers::upload_file(&state, event).await)
    })
    .await
}
