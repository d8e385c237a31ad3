//! Traveling light wave
//!
//! A runner is a lit head of `length` LEDs that fades from full brightness
//! at the leading edge, followed by `tail` positions it paints black to wipe
//! its own afterglow. It enters at logical position 0, moves one position per
//! step and retires once the whole tail has left the topology.

use crate::color::{BLACK, Rgb, dim};
use crate::driver::LedDriver;
use crate::random::RandomSource;
use crate::topology::Topology;

/// Shortest lit head and shortest clearing tail
pub const MIN_LENGTH: usize = 3;
pub const MIN_TAIL: usize = 3;

/// Smallest nonzero fraction a [`RandomSource`] yields
const MIN_FRACTION: f32 = 1.0 / (1u32 << 24) as f32;

/// Brightness factor for offset `i` behind the leading edge
///
/// Equals `exp(1 - i / length) / e`: exactly 1 at the leading edge and
/// strictly decreasing toward `1 / e` along the head.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn damper(i: usize, length: usize) -> f32 {
    libm::expf(-(i as f32) / (length as f32))
}

/// Keep a signed position only if it lands on the topology
#[inline]
fn on_topology(position: isize, size: usize) -> Option<usize> {
    usize::try_from(position).ok().filter(|&position| position < size)
}

/// One traveling wave
#[derive(Debug, Clone, PartialEq)]
pub struct Runner {
    length: usize,
    tail: usize,
    shift: isize,
    color: Rgb,
}

impl Runner {
    /// Create a runner that has not entered the topology yet
    ///
    /// # Panics
    /// Panics if `length` or `tail` is below 3.
    pub fn new(length: usize, tail: usize, color: Rgb) -> Self {
        assert!(length >= MIN_LENGTH, "runner length {} below {}", length, MIN_LENGTH);
        assert!(tail >= MIN_TAIL, "runner tail {} below {}", tail, MIN_TAIL);
        Self {
            length,
            tail,
            shift: -1,
            color,
        }
    }

    /// Create a runner with random length and color
    ///
    /// Length is `ceil(-log2(f)) + 2` for a uniform fraction `f`, so short
    /// waves dominate. The tail grows with `floor(log2(length))`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let fraction = rng.fraction().max(MIN_FRACTION);
        let steps = libm::ceilf(-libm::log2f(fraction)).max(1.0) as usize;
        let length = steps + 2;
        let tail = length.ilog2() as usize + 3;
        let color = Rgb {
            r: rng.byte(),
            g: rng.byte(),
            b: rng.byte(),
        };
        Self::new(length, tail, color)
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn tail(&self) -> usize {
        self.tail
    }

    /// Position of the leading edge, -1 before the first step
    pub fn shift(&self) -> isize {
        self.shift
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Position just behind the clearing tail
    ///
    /// Zero means the tail has just cleared logical position 0.
    #[allow(clippy::cast_possible_wrap)]
    pub fn end(&self) -> isize {
        self.shift - self.length as isize - self.tail as isize
    }

    /// Advance one position and paint the head and tail
    ///
    /// Returns `false` once the runner has fully left the topology; it must
    /// not be stepped again after that.
    #[allow(clippy::cast_possible_wrap)]
    pub fn progress_one<D: LedDriver>(&mut self, topology: &mut Topology<D>) -> bool {
        self.shift += 1;
        let size = topology.size();

        for i in 0..self.length {
            if let Some(position) = on_topology(self.shift - i as isize, size) {
                topology.set_color(position, dim(self.color, damper(i, self.length)));
            }
        }

        let tail_start = self.shift - self.length as isize;
        for i in 0..self.tail {
            if let Some(position) = on_topology(tail_start - i as isize, size) {
                topology.set_color(position, BLACK);
            }
        }

        self.end() < size as isize
    }
}
