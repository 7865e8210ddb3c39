//! Cover letter pipeline: extraction → embeddings → generation.
//! All model calls go through llm_client traits; nothing here speaks HTTP to the backend.

pub mod cover_letter;
pub mod embeddings;
pub mod generator;
pub mod handlers;
pub mod prompts;
