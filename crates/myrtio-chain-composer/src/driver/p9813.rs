//! P9813 chainable LED driver
//!
//! Bit-bangs the two-wire P9813 protocol over a pair of GPIO outputs.
//! Colors are buffered per LED and only hit the wire on [`P9813::flush`].
//!
//! Frame layout on the wire:
//! - 4 zero bytes (start of frame)
//! - one 4-byte color frame per LED: check byte, blue, green, red
//! - 4 zero bytes (end of frame)
//!
//! Bits go out MSB first; each bit is latched on a clock rising edge.

use alloc::vec;
use alloc::vec::Vec;

use embedded_hal::digital::{OutputPin, PinState};
use smart_leds::SmartLedsWrite;

use super::{DriverError, LedDriver};
use crate::color::{BLACK, Rgb, hsl_to_rgb};

/// Start and end of frame marker
pub const FRAME_MARKER: [u8; 4] = [0x00; 4];

/// Fixed flag bits of every check byte
const CHECK_FLAG: u8 = 0xC0;

/// Inverted top two bits of a channel, moved to the low bit pair
#[inline]
const fn inverted_top_bits(channel: u8) -> u8 {
    (!channel >> 6) & 0b11
}

/// Compute the check byte of a color frame
///
/// Bits 7-6 are always `11`. Bits 5-4, 3-2 and 1-0 hold the inverted
/// top two bits of red, green and blue.
pub const fn check_byte(color: Rgb) -> u8 {
    CHECK_FLAG
        | inverted_top_bits(color.r) << 4
        | inverted_top_bits(color.g) << 2
        | inverted_top_bits(color.b)
}

/// Encode one LED color into its 4-byte wire frame
pub const fn color_frame(color: Rgb) -> [u8; 4] {
    [check_byte(color), color.b, color.g, color.r]
}

/// P9813 chain driver
///
/// Owns the clock and data lines exclusively. Both lines are expected to
/// idle low when handed over.
pub struct P9813<C, D> {
    clock: C,
    data: D,
    leds: Vec<Rgb>,
}

impl<C, D> P9813<C, D>
where
    C: OutputPin,
    D: OutputPin<Error = C::Error>,
{
    /// Create a driver for a chain of `chain_length` LEDs
    ///
    /// The buffer starts black. Nothing is transmitted until the first flush.
    pub fn new(chain_length: usize, clock: C, data: D) -> Self {
        Self {
            clock,
            data,
            leds: vec![BLACK; chain_length],
        }
    }

    /// Buffered colors in chain order
    pub fn colors(&self) -> &[Rgb] {
        &self.leds
    }

    /// Buffer a color from separate channels
    ///
    /// # Panics
    /// Panics if `index` is outside the chain.
    pub fn set_color_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set_color(index, Rgb { r, g, b });
    }

    /// Buffer a color given in HSL space
    ///
    /// # Panics
    /// Panics if `index` is outside the chain.
    pub fn set_color_hsb(&mut self, index: usize, hue: f32, saturation: f32, brightness: f32) {
        self.set_color(index, hsl_to_rgb(hue, saturation, brightness));
    }

    /// Release the output lines
    pub fn release(self) -> (C, D) {
        (self.clock, self.data)
    }

    fn send_byte(&mut self, byte: u8) -> Result<(), DriverError<C::Error>> {
        for bit in (0..8).rev() {
            let level = PinState::from(byte & (1 << bit) != 0);
            self.data.set_state(level).map_err(DriverError::Data)?;
            self.clock.set_high().map_err(DriverError::Clock)?;
            self.clock.set_low().map_err(DriverError::Clock)?;
        }
        Ok(())
    }

    fn send_bytes(&mut self, bytes: [u8; 4]) -> Result<(), DriverError<C::Error>> {
        for byte in bytes {
            self.send_byte(byte)?;
        }
        Ok(())
    }
}

impl<C, D> LedDriver for P9813<C, D>
where
    C: OutputPin,
    D: OutputPin<Error = C::Error>,
{
    type Error = DriverError<C::Error>;

    fn len(&self) -> usize {
        self.leds.len()
    }

    fn set_color(&mut self, index: usize, color: Rgb) {
        let len = self.leds.len();
        let Some(led) = self.leds.get_mut(index) else {
            panic!("LED index {} out of range for chain of {}", index, len);
        };
        *led = color;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.send_bytes(FRAME_MARKER)?;
        for index in 0..self.leds.len() {
            let frame = color_frame(self.leds[index]);
            self.send_bytes(frame)?;
        }
        self.send_bytes(FRAME_MARKER)
    }
}

impl<C, D> SmartLedsWrite for P9813<C, D>
where
    C: OutputPin,
    D: OutputPin<Error = C::Error>,
{
    type Error = DriverError<C::Error>;
    type Color = Rgb;

    /// Fill the buffer from the start of the chain and flush it
    ///
    /// Surplus colors are dropped; LEDs past the end of the iterator
    /// keep their buffered color.
    fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
    where
        T: IntoIterator<Item = I>,
        I: Into<Self::Color>,
    {
        for (led, color) in self.leds.iter_mut().zip(iterator) {
            *led = color.into();
        }
        self.flush()
    }
}
