//! Travel recommendation service: request normalization, prompt templates,
//! and the route handlers that forward them to Gemini.

pub mod guide;
pub mod handlers;
pub mod prompts;
pub mod query;
