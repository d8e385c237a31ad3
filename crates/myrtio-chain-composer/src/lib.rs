#![no_std]

//! Chain Composer - P9813 chains merged into one animation surface
//!
//! Architecture layers:
//! - `driver` - Hardware abstraction ([`LedDriver`] trait + the [`P9813`] encoder)
//! - `topology` - Logical-to-physical address map ([`Strip`], [`merge`], [`Topology`])
//! - `effect` - Procedural patterns ([`Runner`] waves, [`ColorCycle`])
//! - `engine` - Runner scheduler driving a topology frame by frame
//! - `config` - Engine timing and limits
//!
//! Everything above the driver is generic over `LedDriver`, so the same
//! topology and animation code runs against real pins or a host buffer.

extern crate alloc;

pub mod color;
pub mod config;
pub mod driver;
pub mod effect;
pub mod engine;
pub mod random;
pub mod topology;

// Color exports
pub use color::Rgb;

// Driver exports
pub use driver::{DriverError, LedDriver, P9813};

// Topology exports
pub use topology::{Strip, SwapScenario, Topology, TopologyError, count_real, merge, merge_all};

// Effect exports
pub use effect::{ColorCycle, Runner};

// Engine exports
pub use config::EngineConfig;
pub use engine::RunnerEngine;

pub use random::RandomSource;
