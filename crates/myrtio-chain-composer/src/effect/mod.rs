//! Procedural patterns painted onto a [`Topology`](crate::Topology)
//!
//! Effects write colors into the topology buffer; flushing is left to the
//! caller (the [`RunnerEngine`](crate::RunnerEngine) flushes once per tick),
//! except for [`ColorCycle`] which is a complete one-shot frame.

mod color_cycle;
mod runner;

pub use color_cycle::{ColorCycle, RGB_PALETTE};
pub use runner::{MIN_LENGTH, MIN_TAIL, Runner, damper};
