//! Generation backend: HTTP client, prompts, schemas and the adapter the
//! wizard calls

mod adapter;
mod client;
mod error;
mod prompts;
mod schema;
mod traits;

pub use adapter::GenerationAdapter;
pub use client::GeminiClient;
pub use error::GenerationError;
pub use traits::{GenerationBackend, GenerationRequest};

#[cfg(test)]
pub use traits::MockGenerationBackend;
