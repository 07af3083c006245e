//! Conversion engine.
//!
//! Split into focused submodules under `src/engine/` while keeping public paths
//! flat (for example `crate::engine::Converter` and `crate::engine::BucketMask`).
//!
//! ## How the parts work together
//!
//! ```text
//! phrase ── clean_phrase (clean.rs)
//!               │   strip punctuation, a.m./p.m. → am/pm, lowercase
//!               v
//!         TriggerInfo::scan (trigger.rs)
//!               │   coarse buckets (digits, month-like)
//!               v
//!         Converter::run (pipeline.rs)
//!               │   rules in fixed priority order, bucket-gated,
//!               │   first set range wins, rule errors are non-matches
//!               v
//!         Variant::postprocess (postprocess.rs)
//!               │   appointment: localize, threshold push, stale roll
//!               │   move-in:     localize, collapse to whole day
//!               v
//!         RunResult (metrics.rs)
//! ```
//!
//! Rule lists are built once per process and shared read-only; a
//! [`Converter`] holds no mutable state and can be used from any thread.
//!
//! ## Debugging
//!
//! Set `RUST_LOG=tourparse=trace` to see every rule attempt, or `debug` for
//! matches, rule errors and timezone fallbacks.

#[path = "engine/clean.rs"]
mod clean;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/pipeline.rs"]
mod pipeline;
#[path = "engine/postprocess.rs"]
mod postprocess;
#[path = "engine/trigger.rs"]
mod trigger;

pub use clean::DEFAULT_CLEAN_PATTERN;
pub use metrics::{RunMetrics, RunResult};
pub use pipeline::{Converter, Variant};
pub use trigger::BucketMask;
