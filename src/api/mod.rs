//! HTTP API module for the roster report engine.
//!
//! This module provides the REST API endpoint for building monthly roster
//! reports from calendar events.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{EventRequest, RosterRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
