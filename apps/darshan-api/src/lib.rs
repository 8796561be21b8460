pub mod config;
pub mod errors;
pub mod rail;
pub mod routes;
pub mod state;
pub mod trip;
