pub mod catchers;
pub mod config;
pub mod error;
pub mod queries;
pub mod routes;
pub mod seed;
pub mod server;
pub mod store;
pub use shared::{models::*, error::*, tally::*};
