//! Core trait abstractions for the extraction library.
//!
//! These traits define the interfaces that applications implement
//! to plug a text-generation service into the LLM stage.

pub mod generator;
