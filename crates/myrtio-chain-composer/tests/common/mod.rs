//! Shared fixtures for the integration tests

#![allow(dead_code)]

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use myrtio_chain_composer::{LedDriver, Rgb};
use rand_core::{RngCore, impls};

// -----------------------------------------------------------------------------
// Wire recorder: a recording clock/data pin pair
// -----------------------------------------------------------------------------

#[derive(Default)]
struct Wire {
    data: bool,
    clock: bool,
    bits: Vec<bool>,
    /// Clock driven high while already high, or low while already low
    glitches: usize,
}

/// Decodes everything a driver clocks out
#[derive(Clone, Default)]
pub struct WireRecorder(Rc<RefCell<Wire>>);

pub struct ClockPin(Rc<RefCell<Wire>>);
pub struct DataPin(Rc<RefCell<Wire>>);

impl WireRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pins(&self) -> (ClockPin, DataPin) {
        (ClockPin(self.0.clone()), DataPin(self.0.clone()))
    }

    /// Latched bits grouped MSB first into bytes
    pub fn bytes(&self) -> Vec<u8> {
        let wire = self.0.borrow();
        assert_eq!(wire.bits.len() % 8, 0, "partial byte on the wire");
        wire.bits
            .chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, &bit| byte << 1 | u8::from(bit)))
            .collect()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().bits.clear();
    }

    pub fn clock_is_low(&self) -> bool {
        !self.0.borrow().clock
    }

    pub fn glitches(&self) -> usize {
        self.0.borrow().glitches
    }
}

impl ErrorType for ClockPin {
    type Error = Infallible;
}

impl OutputPin for ClockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        let mut wire = self.0.borrow_mut();
        if !wire.clock {
            wire.glitches += 1;
        }
        wire.clock = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let mut wire = self.0.borrow_mut();
        if wire.clock {
            wire.glitches += 1;
        }
        wire.clock = true;
        let bit = wire.data;
        wire.bits.push(bit);
        Ok(())
    }
}

impl ErrorType for DataPin {
    type Error = Infallible;
}

impl OutputPin for DataPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().data = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.borrow_mut().data = true;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Buffer-only driver
// -----------------------------------------------------------------------------

/// Driver that keeps colors in memory and counts flushes
pub struct BufferDriver {
    pub leds: Vec<Rgb>,
    pub flushes: usize,
}

impl BufferDriver {
    pub fn new(len: usize) -> Self {
        Self::filled(len, Rgb::new(0, 0, 0))
    }

    pub fn filled(len: usize, color: Rgb) -> Self {
        Self {
            leds: vec![color; len],
            flushes: 0,
        }
    }
}

impl LedDriver for BufferDriver {
    type Error = Infallible;

    fn len(&self) -> usize {
        self.leds.len()
    }

    fn set_color(&mut self, index: usize, color: Rgb) {
        self.leds[index] = color;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }
}

/// Driver whose flush fails once `healthy_flushes` frames went out
pub struct FailingDriver {
    pub leds: Vec<Rgb>,
    pub flushes: usize,
    healthy_flushes: usize,
}

impl FailingDriver {
    pub fn new(len: usize, healthy_flushes: usize) -> Self {
        Self {
            leds: vec![Rgb::new(0, 0, 0); len],
            flushes: 0,
            healthy_flushes,
        }
    }
}

impl LedDriver for FailingDriver {
    type Error = &'static str;

    fn len(&self) -> usize {
        self.leds.len()
    }

    fn set_color(&mut self, index: usize, color: Rgb) {
        self.leds[index] = color;
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        if self.flushes >= self.healthy_flushes {
            return Err("line stuck");
        }
        self.flushes += 1;
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Scripted randomness
// -----------------------------------------------------------------------------

/// Replays a fixed list of words forever
pub struct ScriptedRng {
    words: Vec<u32>,
    next: usize,
}

impl ScriptedRng {
    pub fn new(words: &[u32]) -> Self {
        assert!(!words.is_empty());
        Self {
            words: words.to_vec(),
            next: 0,
        }
    }

    /// Words for one runner: its length fraction, then red, green, blue
    pub fn runner(fraction: f32, color: Rgb) -> Self {
        Self::new(&[
            fraction_word(fraction),
            byte_word(color.r),
            byte_word(color.g),
            byte_word(color.b),
        ])
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let word = self.words[self.next];
        self.next = (self.next + 1) % self.words.len();
        word
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

/// Word that a `RandomSource` turns into `fraction`
pub fn fraction_word(fraction: f32) -> u32 {
    ((fraction * (1u32 << 24) as f32) as u32) << 8
}

/// Word that a `RandomSource` turns into `byte`
pub fn byte_word(byte: u8) -> u32 {
    u32::from(byte) << 24
}

// -----------------------------------------------------------------------------
// Delay recorder
// -----------------------------------------------------------------------------

#[derive(Default)]
pub struct RecordingDelay {
    pub waited_ns: Vec<u64>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.waited_ns.push(u64::from(ns));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.waited_ns.push(u64::from(ms) * 1_000_000);
    }
}

/// Async counterpart of [`RecordingDelay`], completes immediately
#[derive(Default)]
pub struct AsyncRecordingDelay {
    pub waited_ns: Vec<u64>,
}

impl embedded_hal_async::delay::DelayNs for AsyncRecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.waited_ns.push(u64::from(ns));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.waited_ns.push(u64::from(ms) * 1_000_000);
    }
}
