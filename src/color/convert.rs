use crate::color::{Hsv, Rgb};

/// Convert HSV to RGB (all channels are 0-255).
///
/// Integer six-sector conversion on the 0-255 hue circle. Each sector
/// spans 43 hue steps, so hue 255 lands just inside the magenta-red
/// sector instead of wrapping exactly back to red. Saturation 0 is
/// plain gray at the given value.
#[allow(clippy::cast_possible_truncation, clippy::many_single_char_names)]
pub fn hsv2rgb(hsv: Hsv) -> Rgb {
    let (h, s, v) = (hsv.hue, hsv.sat, hsv.val);

    if s == 0 {
        return Rgb { r: v, g: v, b: v };
    }

    let region = h / 43;
    let remainder = (h - region * 43) * 6;

    let p = ((u16::from(v) * u16::from(255 - s)) >> 8) as u8;
    let q = ((u16::from(v) * (255 - ((u16::from(s) * u16::from(remainder)) >> 8))) >> 8) as u8;
    let t =
        ((u16::from(v) * (255 - ((u16::from(s) * (255 - u16::from(remainder))) >> 8))) >> 8) as u8;

    match region {
        0 => Rgb { r: v, g: t, b: p },
        1 => Rgb { r: q, g: v, b: p },
        2 => Rgb { r: p, g: v, b: t },
        3 => Rgb { r: p, g: q, b: v },
        4 => Rgb { r: t, g: p, b: v },
        _ => Rgb { r: v, g: p, b: q },
    }
}
