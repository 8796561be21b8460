//! Pilgrimage trip service: request normalization, prompt templates, the
//! direct-train search with its nearby-station fallback, and the route
//! handlers tying them together.

pub mod handlers;
pub mod prompts;
pub mod query;
pub mod summary;
