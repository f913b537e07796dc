//! Reads one record by ID, or lists every record.

use filedrop::handlers;
use filedrop::lambda::run_handler;

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    run_handler(|state, event| async move { handlers::read_records(&state, event).await }).await
}
