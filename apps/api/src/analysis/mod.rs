// AI analysis of personnel history.
// Implements: prompt building, response parsing, schema normalization, fallbacks,
// and the request pipeline that ties them together.
// All model calls go through llm_client::ModelInvoker.

pub mod defaults;
pub mod fallback;
pub mod handlers;
pub mod normalizer;
pub mod note;
pub mod parser;
pub mod pipeline;
pub mod prompt_builder;
pub mod prompts;
pub mod repository;
pub mod shape;
pub mod snapshot;
pub mod types;
