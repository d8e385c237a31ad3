//! Random source used by procedural effects
//!
//! Effects take the generator explicitly, so a seeded or scripted source
//! makes every spawned wave reproducible.

use rand_core::RngCore;

/// Scale from 24 random bits to a fraction in `[0, 1)`
const FRACTION_SCALE: f32 = 1.0 / (1u32 << 24) as f32;

pub trait RandomSource {
    /// Uniform fraction in `[0, 1)`
    fn fraction(&mut self) -> f32;

    /// Uniform byte
    fn byte(&mut self) -> u8;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[allow(clippy::cast_precision_loss)]
    fn fraction(&mut self) -> f32 {
        (self.next_u32() >> 8) as f32 * FRACTION_SCALE
    }

    #[allow(clippy::cast_possible_truncation)]
    fn byte(&mut self) -> u8 {
        (self.next_u32() >> 24) as u8
    }
}
