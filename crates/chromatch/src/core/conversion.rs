//! Pure conversion functions between color coordinate systems.
//!
//! The transforms in the middle of this module operate on coordinate
//! fractions, with every component scaled to unit range. [`convert`] routes
//! between coordinate systems and also handles the scaling to and from the
//! integer coordinates of the value types, truncating fractional parts toward
//! zero. Callers are expected to pass coordinates that already satisfy the
//! value type invariants.

/// The enumeration of supported coordinate systems.
///
/// Integer coordinates are `[red, green, blue]` with channels `0..=255` for
/// [`Rgb`](ColorSystem::Rgb), `[hue, saturation, value]` for
/// [`Hsv`](ColorSystem::Hsv), and `[hue, saturation, lightness]` for
/// [`Hsl`](ColorSystem::Hsl), with hue `0..360` and percentages `0..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ColorSystem {
    Rgb,
    Hsv,
    Hsl,
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the given integer channels to unit fractions.
#[inline]
fn from_channels(value: &[i64; 3]) -> [f64; 3] {
    [
        value[0] as f64 / 255.0,
        value[1] as f64 / 255.0,
        value[2] as f64 / 255.0,
    ]
}

/// Convert unit fractions to integer channels, truncating toward zero.
#[inline]
fn to_channels(value: &[f64; 3]) -> [i64; 3] {
    [
        (value[0] * 255.0) as i64,
        (value[1] * 255.0) as i64,
        (value[2] * 255.0) as i64,
    ]
}

/// Convert integer cylindrical coordinates to unit fractions.
#[inline]
fn from_cylindrical(value: &[i64; 3]) -> [f64; 3] {
    [
        value[0] as f64 / 360.0,
        value[1] as f64 / 100.0,
        value[2] as f64 / 100.0,
    ]
}

/// Convert cylindrical unit fractions to integer coordinates, truncating
/// toward zero.
#[inline]
fn to_cylindrical(value: &[f64; 3]) -> [i64; 3] {
    [
        (value[0] * 360.0) as i64,
        (value[1] * 100.0) as i64,
        (value[2] * 100.0) as i64,
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB fractions to HSV fractions.
fn rgb_to_hsv(value: &[f64; 3]) -> [f64; 3] {
    let [r, g, b] = *value;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);

    if minc == maxc {
        return [0.0, 0.0, maxc];
    }

    let rangec = maxc - minc;
    let s = rangec / maxc;
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), s, maxc]
}

/// Convert HSV fractions to RGB fractions.
fn hsv_to_rgb(value: &[f64; 3]) -> [f64; 3] {
    let [h, s, v] = *value;

    if s == 0.0 {
        return [v, v, v];
    }

    let sector = (h * 6.0) as i64;
    let f = h * 6.0 - sector as f64;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector.rem_euclid(6) {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Convert RGB fractions to HSL fractions.
fn rgb_to_hsl(value: &[f64; 3]) -> [f64; 3] {
    let [r, g, b] = *value;
    let maxc = r.max(g).max(b);
    let minc = r.min(g).min(b);
    let l = (minc + maxc) / 2.0;

    if minc == maxc {
        return [0.0, 0.0, l];
    }

    let rangec = maxc - minc;
    let s = if l <= 0.5 {
        rangec / (maxc + minc)
    } else {
        rangec / (2.0 - maxc - minc)
    };
    let rc = (maxc - r) / rangec;
    let gc = (maxc - g) / rangec;
    let bc = (maxc - b) / rangec;
    let h = if r == maxc {
        bc - gc
    } else if g == maxc {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    [(h / 6.0).rem_euclid(1.0), s, l]
}

const ONE_THIRD: f64 = 1.0 / 3.0;
const ONE_SIXTH: f64 = 1.0 / 6.0;
const TWO_THIRD: f64 = 2.0 / 3.0;

/// Convert HSL fractions to RGB fractions.
fn hsl_to_rgb(value: &[f64; 3]) -> [f64; 3] {
    let [h, s, l] = *value;

    if s == 0.0 {
        return [l, l, l];
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0 * l - m2;

    [
        hsl_channel(m1, m2, h + ONE_THIRD),
        hsl_channel(m1, m2, h),
        hsl_channel(m1, m2, h - ONE_THIRD),
    ]
}

/// Compute one RGB channel fraction from the two lightness-dependent
/// magnitudes and the channel's hue offset.
fn hsl_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < ONE_SIXTH {
        m1 + (m2 - m1) * hue * 6.0
    } else if hue < 0.5 {
        m2
    } else if hue < TWO_THIRD {
        m1 + (m2 - m1) * (TWO_THIRD - hue) * 6.0
    } else {
        m1
    }
}

// ====================================================================================================================

/// Convert the coordinates from one coordinate system to another.
///
/// This function routes every conversion through the table below. Conversions
/// between the two cylindrical systems take two hops through RGB, and the
/// intermediate RGB coordinates are quantized to integer channels just like
/// the final result of a single-hop conversion. Skipping that quantization
/// would produce hues that differ by one degree from chained conversion
/// calls, so the two-hop arms reuse the single-hop arms verbatim.
#[must_use = "function returns new color coordinates and does not mutate original value"]
pub(crate) fn convert(
    from_system: ColorSystem,
    to_system: ColorSystem,
    coordinates: &[i64; 3],
) -> [i64; 3] {
    use ColorSystem::*;

    match (from_system, to_system) {
        // Identity conversions
        (Rgb, Rgb) | (Hsv, Hsv) | (Hsl, Hsl) => *coordinates,

        // Single-hop conversions
        (Rgb, Hsv) => to_cylindrical(&rgb_to_hsv(&from_channels(coordinates))),
        (Rgb, Hsl) => to_cylindrical(&rgb_to_hsl(&from_channels(coordinates))),
        (Hsv, Rgb) => to_channels(&hsv_to_rgb(&from_cylindrical(coordinates))),
        (Hsl, Rgb) => to_channels(&hsl_to_rgb(&from_cylindrical(coordinates))),

        // Two-hop conversions through quantized RGB
        (Hsv, Hsl) => convert(Rgb, Hsl, &convert(Hsv, Rgb, coordinates)),
        (Hsl, Hsv) => convert(Rgb, Hsv, &convert(Hsl, Rgb, coordinates)),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{convert, ColorSystem::*};

    #[test]
    fn test_rgb_to_hsv() {
        assert_eq!(convert(Rgb, Hsv, &[0, 0, 0]), [0, 0, 0]);
        assert_eq!(convert(Rgb, Hsv, &[255, 255, 255]), [0, 0, 100]);
        assert_eq!(convert(Rgb, Hsv, &[255, 0, 0]), [0, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[0, 255, 0]), [120, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[0, 0, 255]), [240, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[255, 255, 0]), [60, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[0, 255, 255]), [180, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[255, 0, 255]), [300, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[128, 128, 128]), [0, 0, 50]);
        assert_eq!(convert(Rgb, Hsv, &[255, 128, 0]), [30, 100, 100]);
        assert_eq!(convert(Rgb, Hsv, &[128, 128, 0]), [60, 100, 50]);
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(convert(Rgb, Hsl, &[0, 0, 0]), [0, 0, 0]);
        assert_eq!(convert(Rgb, Hsl, &[255, 255, 255]), [0, 0, 100]);
        assert_eq!(convert(Rgb, Hsl, &[255, 0, 0]), [0, 100, 50]);
        assert_eq!(convert(Rgb, Hsl, &[0, 255, 0]), [120, 100, 50]);
        assert_eq!(convert(Rgb, Hsl, &[0, 0, 255]), [240, 100, 50]);
        assert_eq!(convert(Rgb, Hsl, &[255, 128, 0]), [30, 100, 50]);
        assert_eq!(convert(Rgb, Hsl, &[128, 128, 128]), [0, 0, 50]);
    }

    #[test]
    fn test_inverse_transforms() {
        assert_eq!(convert(Hsv, Rgb, &[0, 100, 100]), [255, 0, 0]);
        assert_eq!(convert(Hsv, Rgb, &[120, 100, 100]), [0, 255, 0]);
        assert_eq!(convert(Hsv, Rgb, &[240, 100, 100]), [0, 0, 255]);
        assert_eq!(convert(Hsv, Rgb, &[30, 100, 100]), [255, 127, 0]);
        assert_eq!(convert(Hsv, Rgb, &[0, 0, 50]), [127, 127, 127]);
        assert_eq!(convert(Hsl, Rgb, &[0, 100, 50]), [255, 0, 0]);
        assert_eq!(convert(Hsl, Rgb, &[120, 100, 50]), [0, 255, 0]);
        assert_eq!(convert(Hsl, Rgb, &[240, 100, 50]), [0, 0, 255]);
        assert_eq!(convert(Hsl, Rgb, &[30, 100, 50]), [255, 127, 0]);
        assert_eq!(convert(Hsl, Rgb, &[0, 0, 100]), [255, 255, 255]);
    }

    #[test]
    fn test_identity() {
        assert_eq!(convert(Rgb, Rgb, &[12, 34, 56]), [12, 34, 56]);
        assert_eq!(convert(Hsv, Hsv, &[350, 20, 30]), [350, 20, 30]);
        assert_eq!(convert(Hsl, Hsl, &[350, 20, 30]), [350, 20, 30]);
    }

    #[test]
    fn test_two_hop_quantization() {
        // The intermediate RGB coordinates for a 30 degree hue are
        // [255, 127, 0], and converting those back yields a 29 degree hue.
        // The two-hop route must observe that quantization.
        assert_eq!(convert(Hsv, Hsl, &[30, 100, 100]), [29, 100, 50]);
        assert_eq!(convert(Hsl, Hsv, &[30, 100, 50]), [29, 100, 100]);
        assert_eq!(
            convert(Hsv, Hsl, &[30, 100, 100]),
            convert(Rgb, Hsl, &convert(Hsv, Rgb, &[30, 100, 100]))
        );

        // Primaries survive the two hops unchanged.
        assert_eq!(convert(Hsv, Hsl, &[240, 100, 100]), [240, 100, 50]);
        assert_eq!(convert(Hsl, Hsv, &[240, 100, 50]), [240, 100, 100]);
    }

    #[test]
    fn test_truncation() {
        // 5/255 scales to 1.96 percent, which truncates to 1, not 2.
        assert_eq!(convert(Rgb, Hsv, &[5, 0, 0]), [0, 100, 1]);
        // 1 percent of 255 is 2.55, which truncates to 2.
        assert_eq!(convert(Hsv, Rgb, &[0, 100, 1]), [2, 0, 0]);
    }
}
