use image::{Rgba, RgbaImage};

/// Build the base card: `template` copied as-is, `illustration` composited
/// over it with its top-left corner at `offset`.
///
/// Nothing is scaled; parts of the illustration falling outside the
/// template's bounds are clipped.
pub fn compose(template: &RgbaImage, illustration: &RgbaImage, offset: (i64, i64)) -> RgbaImage {
    let mut card = template.clone();
    for (x, y, src) in illustration.enumerate_pixels() {
        let (Ok(cx), Ok(cy)) = (
            u32::try_from(offset.0 + i64::from(x)),
            u32::try_from(offset.1 + i64::from(y)),
        ) else {
            continue;
        };
        if let Some(dst) = card.get_pixel_mut_checked(cx, cy) {
            *dst = over(*dst, *src);
        }
    }
    card
}

/// Porter-Duff "source over destination" on straight-alpha pixels.
///
/// Integer arithmetic with rounding: an opaque destination stays opaque for
/// every source alpha.
fn over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    let sa = u32::from(src[3]);
    match sa {
        0 => return dst,
        255 => return src,
        _ => {}
    }
    let da = u32::from(dst[3]);
    let src_weight = sa * 255;
    let dst_weight = da * (255 - sa);
    // alpha scaled by 255
    let alpha = src_weight + dst_weight;
    if alpha == 0 {
        return Rgba([0, 0, 0, 0]);
    }

    let channel = |i: usize| {
        let num = u32::from(src[i]) * src_weight + u32::from(dst[i]) * dst_weight;
        ((num + alpha / 2) / alpha) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        ((alpha + 127) / 255) as u8,
    ])
}
