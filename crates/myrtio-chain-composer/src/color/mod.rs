mod hsl;

use smart_leds::RGB8;

pub use hsl::hsl_to_rgb;

pub type Rgb = RGB8;

/// All channels off
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale every channel by `factor`, truncating toward zero
///
/// `factor` is expected in `[0, 1]`.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn dim(color: Rgb, factor: f32) -> Rgb {
    let scale = |channel: u8| libm::floorf(f32::from(channel) * factor) as u8;
    Rgb {
        r: scale(color.r),
        g: scale(color.g),
        b: scale(color.b),
    }
}
