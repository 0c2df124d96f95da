//! Request/response processing layers applied by the router.

pub mod error_details;
