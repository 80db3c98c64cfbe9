// Lead filter link generation.
// Implements: filter taxonomy, entity extraction, URL building, and the facade tying them together.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod builder;
pub mod extractor;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod taxonomy;
