//! # HTTP Request Handlers
//!
//! Both handlers are stateless and infallible; each builds its JSON body
//! fresh per request.
//!
//! ## Available Handlers
//!
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Index** (`index`) - Greeting message at the root path

mod health_check;
mod index;

pub use health_check::*;
pub use index::*;
