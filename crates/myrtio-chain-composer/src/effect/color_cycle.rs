//! Solid color cycle
//!
//! Paints the whole topology with one palette color per step.
//! Handy as a wiring self-test: every segment should show the same color,
//! so a miswired or missing swap stands out immediately.

use crate::color::Rgb;
use crate::driver::LedDriver;
use crate::topology::Topology;

/// Red, green, blue
pub const RGB_PALETTE: &[Rgb] = &[
    Rgb { r: 255, g: 0, b: 0 },
    Rgb { r: 0, g: 255, b: 0 },
    Rgb { r: 0, g: 0, b: 255 },
];

#[derive(Debug, Clone)]
pub struct ColorCycle {
    palette: &'static [Rgb],
    next: usize,
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(RGB_PALETTE)
    }
}

impl ColorCycle {
    /// # Panics
    /// Panics if `palette` is empty.
    pub fn new(palette: &'static [Rgb]) -> Self {
        assert!(!palette.is_empty(), "color cycle needs at least one color");
        Self { palette, next: 0 }
    }

    /// Paint the next palette color everywhere and transmit it
    ///
    /// Returns the color that was shown.
    pub fn step<D: LedDriver>(&mut self, topology: &mut Topology<D>) -> Result<Rgb, D::Error> {
        let color = self.palette[self.next];
        self.next = (self.next + 1) % self.palette.len();

        for position in 0..topology.size() {
            topology.set_color(position, color);
        }
        topology.flush()?;
        Ok(color)
    }
}
