//! HTTP surface
//!
//! - `POST /api/questions`: generate and validate a batch
//! - `POST /api/check`: check one user answer
//! - `GET /health`: liveness

mod dto;
mod error;
mod routes;
mod server;
mod state;

pub use dto::{CheckQuestion, CheckRequest, GenerateRequest, GenerateResponse, HealthResponse};
pub use error::{ApiError, ErrorBody};
pub use routes::router;
pub use server::serve;
pub use state::AppState;
