#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! `steptrace-model` defines the shared data model for the algorithm engines.
//!
//! The crate is intentionally self-contained so it can be reused by:
//! - the trace-producing engines in `steptrace-engine`
//! - drivers and renderers that consume event streams via `serde` (JSON-safe schema)
//!
//! Events use an explicit `{type, ...}` tagged layout so an external renderer
//! can dispatch on the `type` field without knowing the Rust enum.

mod event;
mod operand;
mod point;

pub use event::{ClosestPairEvent, KaratsubaEvent};
pub use operand::{parse_operand, InvalidOperand};
pub use point::{ClosestPair, Point, PointPair};
