//! Logical-to-physical address map
//!
//! A topology flattens one or more physical buses into a single row of
//! logical positions. Each position is either a real LED (with an optional
//! channel swap) or a fake placeholder that keeps animations continuous
//! across gaps between chains.

mod error;
mod strip;

use alloc::vec;
use alloc::vec::Vec;

use embedded_hal::digital::OutputPin;
use log::{debug, trace};

pub use error::TopologyError;
pub use strip::{Strip, SwapScenario, count_real, merge, merge_all};

use crate::color::{Rgb, hsl_to_rgb};
use crate::driver::{LedDriver, P9813};

/// Merged address map plus the driver that backs it
pub struct Topology<D> {
    strips: Vec<Strip>,
    real_count: usize,
    driver: D,
}

impl<D: LedDriver> Topology<D> {
    /// Build a topology on top of an existing driver
    ///
    /// The map is validated (unique, in-range physical indices and a driver
    /// sized to the real strip count) and the chain is blanked.
    pub fn new(strips: Vec<Strip>, driver: D) -> Result<Self, TopologyError<D::Error>> {
        let real_count = validate::<D::Error>(&strips)?;
        if driver.len() != real_count {
            return Err(TopologyError::DriverSizeMismatch {
                expected: real_count,
                actual: driver.len(),
            });
        }

        let mut topology = Self {
            strips,
            real_count,
            driver,
        };
        topology.all_off().map_err(TopologyError::Driver)?;
        debug!(
            "topology: {} positions, {} physical LEDs",
            topology.size(),
            real_count
        );
        Ok(topology)
    }

    /// Total logical positions, real and fake
    pub fn size(&self) -> usize {
        self.strips.len()
    }

    /// Number of physical LEDs behind the map
    pub fn count_real(&self) -> usize {
        self.real_count
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Release the driver
    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Buffer a color at a logical position
    ///
    /// Fake positions swallow the write. Real positions get their channel
    /// swap applied before the color reaches the driver.
    ///
    /// # Panics
    /// Panics if `logical_index >= self.size()`.
    pub fn set_color(&mut self, logical_index: usize, color: Rgb) {
        let size = self.strips.len();
        let Some(strip) = self.strips.get(logical_index) else {
            panic!(
                "logical index {} out of range for topology of {}",
                logical_index, size
            );
        };
        if let Strip::Real { index, swap } = *strip {
            self.driver.set_color(index, swap.apply(color));
        }
    }

    /// Buffer a color from separate channels
    ///
    /// # Panics
    /// Panics if `logical_index >= self.size()`.
    pub fn set_color_rgb(&mut self, logical_index: usize, r: u8, g: u8, b: u8) {
        self.set_color(logical_index, Rgb { r, g, b });
    }

    /// Buffer a color given in HSL space
    ///
    /// # Panics
    /// Panics if `logical_index >= self.size()`.
    pub fn set_color_hsb(
        &mut self,
        logical_index: usize,
        hue: f32,
        saturation: f32,
        brightness: f32,
    ) {
        self.set_color(logical_index, hsl_to_rgb(hue, saturation, brightness));
    }

    /// Transmit the buffered frame
    pub fn flush(&mut self) -> Result<(), D::Error> {
        trace!("topology: flush {} LEDs", self.real_count);
        self.driver.flush()
    }

    /// Blank every LED and transmit
    pub fn all_off(&mut self) -> Result<(), D::Error> {
        self.driver.all_off()
    }
}

impl<C, D> Topology<P9813<C, D>>
where
    C: OutputPin,
    D: OutputPin<Error = C::Error>,
{
    /// Build a topology with a fresh P9813 driver sized to the map
    pub fn with_p9813(
        strips: Vec<Strip>,
        clock: C,
        data: D,
    ) -> Result<Self, TopologyError<<P9813<C, D> as LedDriver>::Error>> {
        let driver = P9813::new(count_real(&strips), clock, data);
        Self::new(strips, driver)
    }
}

/// Check that physical indices form a permutation of `0..count_real`
fn validate<E>(strips: &[Strip]) -> Result<usize, TopologyError<E>> {
    let real_count = count_real(strips);
    let mut seen = vec![false; real_count];
    for index in strips.iter().filter_map(Strip::physical_index) {
        let Some(slot) = seen.get_mut(index) else {
            return Err(TopologyError::IndexOutOfRange {
                index,
                real_count,
            });
        };
        if *slot {
            return Err(TopologyError::DuplicateIndex { index });
        }
        *slot = true;
    }
    Ok(real_count)
}
