//! Benchmark3x - landing and sign-in pages for the Benchmark3x signal service.
//!
//! Pages are rendered server-side into self-contained HTML documents with
//! images inlined as base64 `data:` URIs.

pub mod assets;
pub mod cli;
pub mod config;
pub mod server;
