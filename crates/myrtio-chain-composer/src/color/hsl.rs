use crate::color::Rgb;

const ONE_THIRD: f32 = 1.0 / 3.0;
const ONE_SIXTH: f32 = 1.0 / 6.0;
const TWO_THIRDS: f32 = 2.0 / 3.0;

fn hue_to_channel(p: f32, q: f32, t: f32) -> f32 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < ONE_SIXTH {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < TWO_THIRDS {
        return p + (q - p) * (TWO_THIRDS - t) * 6.0;
    }
    p
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(value: f32) -> u8 {
    (255.0 * value) as u8
}

/// Convert an HSL triple to RGB
///
/// # Arguments
/// * `hue` - Hue in `[0, 1]`, where 0 and 1 are both red
/// * `saturation` - Saturation in `[0, 1]`
/// * `lightness` - Lightness in `[0, 1]`, 0.5 gives fully saturated colors
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb {
    if saturation == 0.0 {
        let gray = to_channel(lightness);
        return Rgb {
            r: gray,
            g: gray,
            b: gray,
        };
    }

    let q = if lightness < 0.5 {
        lightness * (1.0 + saturation)
    } else {
        lightness + saturation - lightness * saturation
    };
    let p = 2.0 * lightness - q;

    Rgb {
        r: to_channel(hue_to_channel(p, q, hue + ONE_THIRD)),
        g: to_channel(hue_to_channel(p, q, hue)),
        b: to_channel(hue_to_channel(p, q, hue - ONE_THIRD)),
    }
}
