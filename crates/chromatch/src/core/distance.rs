//! Distance metrics over RGB channels and the search for the closest
//! candidate color.

/// The strategy for scoring the similarity of two RGB colors.
///
/// Both metrics are total, deterministic, and non-negative, with smaller
/// scores denoting more similar colors and zero reserved for identical
/// channels. They do, however, disagree about which of two candidates is
/// closer often enough that nearest-match lookups accept the metric as an
/// argument rather than hard-coding one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DistanceMetric {
    /// The sum of the absolute differences of the red, green, and blue
    /// channels. Cheap, order-preserving for small perturbations, and the
    /// default.
    #[default]
    Manhattan,

    /// The CMC l:c (2:1) color difference over CIE Lab, with both colors
    /// mapped from sRGB under the D65 white point. Considerably more
    /// expensive but closer to perceived similarity, particularly for
    /// desaturated colors.
    Cmc,
}

impl DistanceMetric {
    /// Compute the distance between the two channel triples under this
    /// metric.
    pub(crate) fn between(self, origin: &[u8; 3], candidate: &[u8; 3]) -> f64 {
        match self {
            DistanceMetric::Manhattan => manhattan(origin, candidate),
            DistanceMetric::Cmc => delta_e_cmc(origin, candidate),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Compute the Manhattan distance between the two channel triples.
fn manhattan(origin: &[u8; 3], candidate: &[u8; 3]) -> f64 {
    let sum: u32 = origin
        .iter()
        .zip(candidate.iter())
        .map(|(&a, &b)| u32::from(a.abs_diff(b)))
        .sum();
    f64::from(sum)
}

/// Convert sRGB channels to CIE Lab coordinates under the D65 white point.
fn rgb_to_lab(value: &[u8; 3]) -> [f64; 3] {
    #[inline]
    fn linearize(channel: u8) -> f64 {
        let c = f64::from(channel) / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    }

    #[inline]
    fn lab_f(t: f64) -> f64 {
        if t > 0.008856 {
            t.cbrt()
        } else {
            7.787 * t + 16.0 / 116.0
        }
    }

    let r = linearize(value[0]);
    let g = linearize(value[1]);
    let b = linearize(value[2]);

    let x = 0.4124564 * r + 0.3575761 * g + 0.1804375 * b;
    let y = 0.2126729 * r + 0.7151522 * g + 0.0721750 * b;
    let z = 0.0193339 * r + 0.1191920 * g + 0.9503041 * b;

    let fx = lab_f(x / 0.95047);
    let fy = lab_f(y / 1.0);
    let fz = lab_f(z / 1.08883);

    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Compute the CMC l:c color difference between the two channel triples,
/// with lightness weighted 2:1 against chroma.
fn delta_e_cmc(origin: &[u8; 3], candidate: &[u8; 3]) -> f64 {
    const LIGHTNESS: f64 = 2.0;
    const CHROMA: f64 = 1.0;

    let [l1, a1, b1] = rgb_to_lab(origin);
    let [l2, a2, b2] = rgb_to_lab(candidate);

    let c1 = (a1 * a1 + b1 * b1).sqrt();
    let c2 = (a2 * a2 + b2 * b2).sqrt();

    let delta_l = l1 - l2;
    let delta_c = c1 - c2;
    let delta_a = a1 - a2;
    let delta_b = b1 - b2;
    // The hue term is defined through the other two; floating point error can
    // push the difference marginally below zero.
    let delta_h2 = (delta_a * delta_a + delta_b * delta_b - delta_c * delta_c).max(0.0);

    let s_l = if l1 < 16.0 {
        0.511
    } else {
        0.040975 * l1 / (1.0 + 0.01765 * l1)
    };
    let s_c = 0.0638 * c1 / (1.0 + 0.0131 * c1) + 0.638;

    let h1 = b1.atan2(a1).to_degrees().rem_euclid(360.0);
    let t = if (164.0..=345.0).contains(&h1) {
        0.56 + (0.2 * (h1 + 168.0).to_radians().cos()).abs()
    } else {
        0.36 + (0.4 * (h1 + 35.0).to_radians().cos()).abs()
    };
    let c1_4 = c1.powi(4);
    let f = (c1_4 / (c1_4 + 1900.0)).sqrt();
    let s_h = s_c * (f * t + 1.0 - f);

    let term_l = delta_l / (LIGHTNESS * s_l);
    let term_c = delta_c / (CHROMA * s_c);
    let term_h = delta_h2.sqrt() / s_h;

    (term_l * term_l + term_c * term_c + term_h * term_h).sqrt()
}

// --------------------------------------------------------------------------------------------------------------------

/// Find the index of the candidate closest to the origin.
///
/// The scan runs in candidate order and replaces its champion only upon a
/// strictly smaller distance. When several candidates are equidistant, the
/// earliest one therefore wins. The result is `None` only if there are no
/// candidates at all.
pub(crate) fn find_closest<'c, C, F>(
    origin: &[u8; 3],
    candidates: C,
    mut compute_distance: F,
) -> Option<usize>
where
    C: IntoIterator<Item = &'c [u8; 3]>,
    F: FnMut(&[u8; 3], &[u8; 3]) -> f64,
{
    let mut min_distance = f64::INFINITY;
    let mut min_index = None;

    for (index, candidate) in candidates.into_iter().enumerate() {
        let distance = compute_distance(origin, candidate);
        if distance < min_distance {
            min_distance = distance;
            min_index = Some(index);
        }
    }

    min_index
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{find_closest, rgb_to_lab, DistanceMetric};

    #[test]
    fn test_manhattan() {
        let metric = DistanceMetric::Manhattan;
        assert_eq!(metric.between(&[0, 0, 0], &[0, 0, 0]), 0.0);
        assert_eq!(metric.between(&[255, 255, 255], &[0, 0, 0]), 765.0);
        assert_eq!(metric.between(&[10, 10, 10], &[0, 0, 0]), 30.0);
        assert_eq!(metric.between(&[10, 10, 10], &[20, 20, 20]), 30.0);
        // Symmetry
        assert_eq!(
            metric.between(&[1, 200, 40], &[88, 3, 19]),
            metric.between(&[88, 3, 19], &[1, 200, 40]),
        );
    }

    #[test]
    fn test_lab_landmarks() {
        // White is L = 100 with vanishing colorness.
        let [l, a, b] = rgb_to_lab(&[255, 255, 255]);
        assert!((l - 100.0).abs() < 0.01, "white L* is {}", l);
        assert!(a.abs() < 0.01, "white a* is {}", a);
        assert!(b.abs() < 0.01, "white b* is {}", b);

        // Black is the origin.
        let [l, a, b] = rgb_to_lab(&[0, 0, 0]);
        assert!(l.abs() < 0.01, "black L* is {}", l);
        assert!(a.abs() < 0.01, "black a* is {}", a);
        assert!(b.abs() < 0.01, "black b* is {}", b);

        // Red has positive a* (toward red) and positive b* (toward yellow).
        let [l, a, b] = rgb_to_lab(&[255, 0, 0]);
        assert!((l - 53.24).abs() < 0.05, "red L* is {}", l);
        assert!((a - 80.09).abs() < 0.05, "red a* is {}", a);
        assert!((b - 67.20).abs() < 0.05, "red b* is {}", b);
    }

    #[test]
    fn test_cmc_contract() {
        let metric = DistanceMetric::Cmc;
        assert_eq!(metric.between(&[17, 99, 231], &[17, 99, 231]), 0.0);
        assert!(metric.between(&[255, 0, 0], &[0, 0, 255]) > 0.0);
        // A small perturbation scores closer than a large one.
        assert!(
            metric.between(&[200, 30, 40], &[200, 32, 40])
                < metric.between(&[200, 30, 40], &[100, 130, 140])
        );
    }

    #[test]
    fn test_find_closest() {
        let candidates = [[0, 0, 0], [20, 20, 20], [250, 250, 250]];
        let manhattan = |a: &[u8; 3], b: &[u8; 3]| DistanceMetric::Manhattan.between(a, b);

        assert_eq!(find_closest(&[1, 1, 1], &candidates, manhattan), Some(0));
        assert_eq!(find_closest(&[19, 19, 19], &candidates, manhattan), Some(1));
        assert_eq!(
            find_closest(&[255, 255, 255], &candidates, manhattan),
            Some(2)
        );
        // Equidistant candidates resolve to the earliest index.
        assert_eq!(find_closest(&[10, 10, 10], &candidates, manhattan), Some(0));
        assert_eq!(find_closest(&[0, 0, 0], &[], manhattan), None);
    }
}
