#![forbid(unsafe_code)]
#![deny(unreachable_patterns)]

//! Instrumented divide-and-conquer algorithm engines.
//!
//! Two independent engines share one event-trace protocol:
//! - [`closest_pair`] / [`closest_pair_trace`] — nearest pair of points in the
//!   plane, split on the median x-coordinate.
//! - [`karatsuba`] / [`karatsuba_trace`] — exact multiplication of
//!   arbitrary-precision non-negative integers.
//!
//! Each engine comes in two forms. The plain function computes only the
//! result. The `_trace` form returns a [`Trace`]: a lazy, one-shot stream of
//! [`ClosestPairEvent`]s or [`KaratsubaEvent`]s in exact execution order
//! (pre-order for splits and base cases, post-order for combines and the
//! final result), followed by the same result the plain form produces. The
//! producer computes one event at a time and suspends until the consumer
//! pulls the next one, so dropping the trace early simply stops the
//! recursion — see [`trace`] for the protocol details.
//!
//! Both forms run the identical algorithm; tracing never changes a result.

pub mod closest_pair;
pub mod karatsuba;
pub mod trace;

pub use closest_pair::{closest_pair, closest_pair_trace};
pub use karatsuba::{karatsuba, karatsuba_trace};
pub use steptrace_model::{ClosestPair, ClosestPairEvent, KaratsubaEvent, Point, PointPair};
pub use trace::{Cancelled, EventSink, NullSink, Trace};
