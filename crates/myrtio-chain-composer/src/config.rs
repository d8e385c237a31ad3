use embassy_time::Duration;

/// Default pause between frames
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(50);

/// Runner scheduler configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Wait after each flushed frame
    pub frame_interval: Duration,
    /// Optional upper bound of simultaneously active runners
    ///
    /// `None` spawns a runner every time one clears the start. With a bound
    /// set, spawns beyond it are skipped, which thins the waves out until
    /// the active set drains.
    pub max_runners: Option<usize>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_INTERVAL)
    }
}

impl EngineConfig {
    /// Unbounded scheduler with the given frame interval
    pub const fn new(frame_interval: Duration) -> Self {
        Self {
            frame_interval,
            max_runners: None,
        }
    }

    /// Bound the active runner set, never below 1
    #[must_use]
    pub const fn with_max_runners(mut self, max_runners: usize) -> Self {
        self.max_runners = Some(if max_runners == 0 { 1 } else { max_runners });
        self
    }

    /// Frame interval in whole milliseconds, saturated to `u32`
    #[allow(clippy::cast_possible_truncation)]
    pub const fn frame_interval_ms(&self) -> u32 {
        let millis = self.frame_interval.as_millis();
        if millis > u32::MAX as u64 {
            u32::MAX
        } else {
            millis as u32
        }
    }
}
