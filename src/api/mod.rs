//! HTTP API module for the salary breakdown components.
//!
//! Exposes the salary form and the breakdown tables over REST so the
//! collector and presenter can be driven without a browser.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{RawInput, SalaryFormRequest};
pub use response::{ApiError, BreakdownResponse, FormResponse, SubmitResponse};
pub use state::AppState;
