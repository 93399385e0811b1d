//! # Utility Modules
//!
//! - **Constants** (`constant`) - Response literals and startup defaults

pub mod constant;
