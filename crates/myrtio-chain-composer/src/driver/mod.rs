//! LED Driver abstraction layer
//!
//! Provides a trait-based abstraction for LED chain drivers,
//! allowing the topology and animation layers to be hardware-agnostic.

mod p9813;

use core::fmt;

pub use p9813::{FRAME_MARKER, P9813, check_byte, color_frame};

use crate::color::{BLACK, Rgb};

/// Abstract LED driver trait
///
/// A driver owns a color buffer with one entry per physical LED.
/// Writes only touch the buffer; nothing reaches the wire until [`flush`].
///
/// [`flush`]: LedDriver::flush
pub trait LedDriver {
    /// Error raised by the underlying output lines
    type Error;

    /// Number of physical LEDs in the chain
    fn len(&self) -> usize;

    /// Check whether the chain has no LEDs at all
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Overwrite the buffered color at `index`
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    fn set_color(&mut self, index: usize, color: Rgb);

    /// Transmit the whole buffer as one frame
    fn flush(&mut self) -> Result<(), Self::Error>;

    /// Blank the buffer and transmit it
    fn all_off(&mut self) -> Result<(), Self::Error> {
        for index in 0..self.len() {
            self.set_color(index, BLACK);
        }
        self.flush()
    }
}

/// Error type for pin-level driver operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError<E> {
    /// Setting the clock line failed
    Clock(E),
    /// Setting the data line failed
    Data(E),
}

impl<E: fmt::Debug> fmt::Display for DriverError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Clock(e) => write!(f, "Clock line error: {:?}", e),
            DriverError::Data(e) => write!(f, "Data line error: {:?}", e),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for DriverError<E> {}
