#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Command-line driver for the `steptrace` engines.
//!
//! The binary parses an input file, runs one of the engines, and streams the
//! event trace to stdout (human-readable text or one JSON object per line),
//! followed by the final result. Rendering and animation live elsewhere; a
//! renderer can consume the JSON stream directly.

pub mod cli;
pub mod input;
