pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod providers;
pub mod routes;
pub mod state;
pub mod toolserver;

pub use axum;
pub use serde;
pub use serde_json;
