//! REST backend infrastructure module
//!
//! Talks to the dashboard's JSON endpoints using reqwest.

mod csrf;
mod rest;
pub mod routes;

pub use csrf::csrf_token_from_html;
pub use rest::RestBackend;
