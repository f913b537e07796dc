//! Lambda shell for filedrop.
//!
//! Each binary under `src/bin` wires one handler from [`handlers`] into the
//! Lambda runtime through [`lambda::run_handler`]. Storage backends live in
//! [`storage`]; the in-memory ones back the tests.

pub mod config;
pub mod event;
pub mod handlers;
pub mod lambda;
pub mod state;
pub mod storage;
pub mod telemetry;

pub use config::Config;
pub use event::{ApiEvent, ApiResponse};
pub use filedrop_core::HandlerError;
pub use state::AppState;
