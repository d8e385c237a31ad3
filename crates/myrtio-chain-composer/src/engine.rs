//! Runner Engine - wave scheduler
//!
//! The RunnerEngine is the frame loop that:
//! - Advances every active runner one position
//! - Retires runners that left the topology
//! - Spawns a new runner each time one clears the start of the topology
//! - Flushes the topology once per frame
//!
//! [`step`](RunnerEngine::step) renders a frame without waiting, so tests
//! drive the engine synchronously. [`tick`](RunnerEngine::tick) and
//! [`tick_async`](RunnerEngine::tick_async) add the frame pacing.

use alloc::vec::Vec;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::debug;

use crate::config::EngineConfig;
use crate::driver::LedDriver;
use crate::effect::Runner;
use crate::random::RandomSource;
use crate::topology::Topology;

/// Runner Engine
///
/// Generic over the driver behind the topology and over the random source
/// used to parameterize new waves.
pub struct RunnerEngine<D, R> {
    /// Surface the runners are painted on
    topology: Topology<D>,
    /// Randomness for spawned runners
    rng: R,
    /// Active runners, oldest first
    runners: Vec<Runner>,
    config: EngineConfig,
}

impl<D: LedDriver, R: RandomSource> RunnerEngine<D, R> {
    /// Create an engine with one runner about to enter the topology
    pub fn new(topology: Topology<D>, rng: R, config: EngineConfig) -> Self {
        let mut engine = Self {
            topology,
            rng,
            runners: Vec::new(),
            config,
        };
        engine.spawn();
        engine
    }

    pub fn topology(&self) -> &Topology<D> {
        &self.topology
    }

    pub fn runners(&self) -> &[Runner] {
        &self.runners
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Tear the engine down into its topology and random source
    pub fn into_parts(self) -> (Topology<D>, R) {
        (self.topology, self.rng)
    }

    fn spawn(&mut self) {
        if let Some(max) = self.config.max_runners
            && self.runners.len() >= max
        {
            debug!(
                "engine: spawn skipped, {} runners active",
                self.runners.len()
            );
            return;
        }
        let runner = Runner::random(&mut self.rng);
        debug!(
            "engine: spawn runner length={} tail={} color=({}, {}, {})",
            runner.length(),
            runner.tail(),
            runner.color().r,
            runner.color().g,
            runner.color().b
        );
        self.runners.push(runner);
    }

    /// Render and transmit one frame
    pub fn step(&mut self) -> Result<(), D::Error> {
        let topology = &mut self.topology;
        let mut cleared_start = false;

        self.runners.retain_mut(|runner| {
            let active = runner.progress_one(topology);
            cleared_start |= runner.end() == 0;
            if !active {
                debug!("engine: runner retired at shift {}", runner.shift());
            }
            active
        });

        if cleared_start || self.runners.is_empty() {
            self.spawn();
        }

        self.topology.flush()
    }

    /// Render one frame and wait for the frame interval
    pub fn tick<T: DelayNs>(&mut self, delay: &mut T) -> Result<(), D::Error> {
        self.step()?;
        delay.delay_ms(self.config.frame_interval_ms());
        Ok(())
    }

    /// Async variant of [`tick`](Self::tick)
    pub async fn tick_async<T: embedded_hal_async::delay::DelayNs>(
        &mut self,
        delay: &mut T,
    ) -> Result<(), D::Error> {
        self.step()?;
        delay.delay_ms(self.config.frame_interval_ms()).await;
        Ok(())
    }

    /// Run the engine loop until the driver fails
    pub fn run<T: DelayNs>(&mut self, delay: &mut T) -> Result<Infallible, D::Error> {
        loop {
            self.tick(delay)?;
        }
    }

    /// Async variant of [`run`](Self::run)
    pub async fn run_async<T: embedded_hal_async::delay::DelayNs>(
        &mut self,
        delay: &mut T,
    ) -> Result<Infallible, D::Error> {
        loop {
            self.tick_async(delay).await?;
        }
    }
}
