//! The immutable color value types and their conversions.

use std::sync::OnceLock;

use crate::core::{self, ColorSystem, DistanceMetric};
use crate::error::RangeError;

/// Create a new RGB color from integer channel literals.
///
/// [`RgbColor::with_channels`] is a const function, so this macro mostly
/// saves on typing: it converts each argument with `as u8` before invoking
/// the constructor, which keeps literal-heavy color tables readable.
///
/// ```
/// # use chromatch::rgb;
/// let tomato = rgb!(255, 99, 71);
/// assert_eq!(tomato.channels(), [255, 99, 71]);
/// ```
#[macro_export]
macro_rules! rgb {
    ($r:expr, $g:expr, $b:expr) => {
        $crate::RgbColor::with_channels($r as u8, $g as u8, $b as u8)
    };
}

// --------------------------------------------------------------------------------------------------------------------

/// Wrap the hue into `0..360` by whole rotations.
fn wrap_hue(hue: i64) -> u16 {
    hue.rem_euclid(360) as u16
}

/// Validate an RGB channel.
fn byte_channel(name: &'static str, value: i64) -> Result<u8, RangeError> {
    u8::try_from(value).map_err(|_| RangeError::Component {
        name,
        value,
        expected: 0..=255,
    })
}

/// Validate a saturation, value, or lightness percentage.
fn percentage(name: &'static str, value: i64) -> Result<u8, RangeError> {
    match u8::try_from(value) {
        Ok(percent) if percent <= 100 => Ok(percent),
        _ => Err(RangeError::Component {
            name,
            value,
            expected: 0..=100,
        }),
    }
}

// ====================================================================================================================

/// An immutable color with red, green, and blue channels ranging `0..=255`.
///
/// Converting to another coordinate system computes the derived coordinates
/// at most once per instance; later calls reuse them. Equality and hashing
/// consider only the three channels, never the cached conversions, so two
/// colors constructed from equal channels are interchangeable for lookups.
///
/// # Examples
///
/// ```
/// # use chromatch::{error::RangeError, RgbColor};
/// let coral = RgbColor::new(255, 127, 80)?;
/// assert_eq!((coral.red(), coral.green(), coral.blue()), (255, 127, 80));
/// assert_eq!(coral.to_string(), "#FF7F50");
/// assert!(RgbColor::new(256, 0, 0).is_err());
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Clone)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
    hsv: OnceLock<[i64; 3]>,
    hsl: OnceLock<[i64; 3]>,
}

impl RgbColor {
    /// Instantiate a new RGB color from the given channels.
    ///
    /// Each channel must fit into `0..=255`; any other value produces a
    /// [`RangeError`] naming the offending channel.
    pub fn new(red: i64, green: i64, blue: i64) -> Result<Self, RangeError> {
        Ok(Self::with_channels(
            byte_channel("red", red)?,
            byte_channel("green", green)?,
            byte_channel("blue", blue)?,
        ))
    }

    /// Instantiate a new RGB color from channels that are bytes already.
    #[inline]
    pub const fn with_channels(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            hsv: OnceLock::new(),
            hsl: OnceLock::new(),
        }
    }

    /// Parse a hex color such as `#40C0FF`.
    ///
    /// The leading `#` is optional and the digits are case-insensitive. A
    /// three-digit color expands every digit `d` into the channel value
    /// `d * 16`, which is the historical expansion; it caps channels at 240,
    /// so `#FFF` is a very light gray rather than white. Use
    /// [`from_hex_css`](Self::from_hex_css) for the CSS expansion instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, RgbColor};
    /// assert_eq!(RgbColor::from_hex("#FF8000")?.channels(), [255, 128, 0]);
    /// assert_eq!(RgbColor::from_hex("#FFF")?.channels(), [240, 240, 240]);
    /// assert!(RgbColor::from_hex("#F800").is_err());
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn from_hex(s: &str) -> Result<Self, RangeError> {
        core::parse_hex(s).map(|[red, green, blue]| Self::with_channels(red, green, blue))
    }

    /// Parse a hex color, expanding three-digit colors as CSS does.
    ///
    /// Like [`from_hex`](Self::from_hex), except that a three-digit color
    /// doubles every digit, so `#FFF` parses as white.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, RgbColor};
    /// assert_eq!(RgbColor::from_hex_css("#FFF")?.channels(), [255, 255, 255]);
    /// assert_eq!(RgbColor::from_hex_css("#FF8000")?.channels(), [255, 128, 0]);
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn from_hex_css(s: &str) -> Result<Self, RangeError> {
        core::parse_hex_css(s).map(|[red, green, blue]| Self::with_channels(red, green, blue))
    }

    /// Access the red channel.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Access the green channel.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Access the blue channel.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Access all three channels.
    #[inline]
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Convert this color to RGB, which returns the same logical value.
    pub fn to_rgb(&self) -> RgbColor {
        self.clone()
    }

    /// Convert this color to HSV.
    ///
    /// The derived coordinates are computed on the first call and cached on
    /// this instance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, RgbColor};
    /// let chartreuse = RgbColor::new(127, 255, 0)?;
    /// let hsv = chartreuse.to_hsv();
    /// assert_eq!((hsv.hue(), hsv.saturation(), hsv.value()), (90, 100, 100));
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn to_hsv(&self) -> HsvColor {
        let [hue, saturation, value] = *self
            .hsv
            .get_or_init(|| core::convert(ColorSystem::Rgb, ColorSystem::Hsv, &self.coordinates()));
        HsvColor::from_coordinates(hue, saturation, value)
    }

    /// Convert this color to HSL.
    ///
    /// The derived coordinates are computed on the first call and cached on
    /// this instance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, RgbColor};
    /// let rose = RgbColor::new(255, 0, 127)?;
    /// let hsl = rose.to_hsl();
    /// assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (330, 100, 50));
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn to_hsl(&self) -> HslColor {
        let [hue, saturation, lightness] = *self
            .hsl
            .get_or_init(|| core::convert(ColorSystem::Rgb, ColorSystem::Hsl, &self.coordinates()));
        HslColor::from_coordinates(hue, saturation, lightness)
    }

    /// Format this color as an uppercase `#RRGGBB` string.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::RgbColor;
    /// assert_eq!(RgbColor::with_channels(255, 128, 0).to_hex(), "#FF8000");
    /// assert_eq!(RgbColor::with_channels(0, 7, 0).to_hex(), "#000700");
    /// ```
    pub fn to_hex(&self) -> String {
        self.to_string()
    }

    /// Determine the distance to the other color under the given metric.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{DistanceMetric, RgbColor};
    /// let black = RgbColor::with_channels(0, 0, 0);
    /// let dusk = RgbColor::with_channels(10, 10, 10);
    /// assert_eq!(black.distance(&dusk, DistanceMetric::Manhattan), 30.0);
    /// ```
    pub fn distance(&self, other: &RgbColor, metric: DistanceMetric) -> f64 {
        metric.between(&self.channels(), &other.channels())
    }

    /// Spread the channels into conversion coordinates.
    fn coordinates(&self) -> [i64; 3] {
        [
            i64::from(self.red),
            i64::from(self.green),
            i64::from(self.blue),
        ]
    }
}

impl std::fmt::Debug for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RgbColor")
            .field("red", &self.red)
            .field("green", &self.green)
            .field("blue", &self.blue)
            .finish()
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        core::format(&self.channels(), f)
    }
}

impl PartialEq for RgbColor {
    fn eq(&self, other: &Self) -> bool {
        self.red == other.red && self.green == other.green && self.blue == other.blue
    }
}

impl Eq for RgbColor {}

impl std::hash::Hash for RgbColor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.channels().hash(state);
    }
}

impl From<(u8, u8, u8)> for RgbColor {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::with_channels(red, green, blue)
    }
}

impl From<[u8; 3]> for RgbColor {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::with_channels(red, green, blue)
    }
}

impl std::str::FromStr for RgbColor {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<&str> for RgbColor {
    type Error = RangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_hex(value)
    }
}

impl TryFrom<String> for RgbColor {
    type Error = RangeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

// ====================================================================================================================

/// An immutable color with hue, saturation, and value coordinates.
///
/// The hue ranges `0..360` and wraps around instead of erroring, so a
/// rotation of 360 degrees is the same color again. Saturation and value are
/// percentages ranging `0..=100`. As with [`RgbColor`], derived conversions
/// are cached per instance and excluded from equality and hashing.
///
/// # Examples
///
/// ```
/// # use chromatch::{error::RangeError, HsvColor};
/// assert_eq!(HsvColor::new(360, 50, 50)?.hue(), 0);
/// assert_eq!(HsvColor::new(-10, 50, 50)?.hue(), 350);
/// assert!(HsvColor::new(0, 101, 50).is_err());
/// # Ok::<(), RangeError>(())
/// ```
#[derive(Clone)]
pub struct HsvColor {
    hue: u16,
    saturation: u8,
    value: u8,
    rgb: OnceLock<[i64; 3]>,
    hsl: OnceLock<[i64; 3]>,
}

impl HsvColor {
    /// Instantiate a new HSV color.
    ///
    /// The hue is wrapped into `0..360`. Saturation and value must fit into
    /// `0..=100`; any other value produces a [`RangeError`] naming the
    /// offending component.
    pub fn new(hue: i64, saturation: i64, value: i64) -> Result<Self, RangeError> {
        Ok(Self {
            hue: wrap_hue(hue),
            saturation: percentage("saturation", saturation)?,
            value: percentage("value", value)?,
            rgb: OnceLock::new(),
            hsl: OnceLock::new(),
        })
    }

    /// Instantiate from conversion coordinates that satisfy the invariants
    /// already.
    fn from_coordinates(hue: i64, saturation: i64, value: i64) -> Self {
        debug_assert!((0..360).contains(&hue), "hue {} outside 0..360", hue);
        debug_assert!(
            (0..=100).contains(&saturation),
            "saturation {} outside 0..=100",
            saturation
        );
        debug_assert!((0..=100).contains(&value), "value {} outside 0..=100", value);

        Self {
            hue: hue as u16,
            saturation: saturation as u8,
            value: value as u8,
            rgb: OnceLock::new(),
            hsl: OnceLock::new(),
        }
    }

    /// Access the hue in degrees.
    #[inline]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Access the saturation percentage.
    #[inline]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Access the value percentage.
    #[inline]
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Convert this color to RGB.
    ///
    /// The derived channels are computed on the first call and cached on
    /// this instance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, HsvColor};
    /// let orange = HsvColor::new(30, 100, 100)?;
    /// assert_eq!(orange.to_rgb().channels(), [255, 127, 0]);
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn to_rgb(&self) -> RgbColor {
        let [red, green, blue] = *self
            .rgb
            .get_or_init(|| core::convert(ColorSystem::Hsv, ColorSystem::Rgb, &self.coordinates()));
        RgbColor::with_channels(red as u8, green as u8, blue as u8)
    }

    /// Convert this color to HSL.
    ///
    /// The conversion takes two hops, from HSV to RGB and from RGB to HSL,
    /// and the intermediate channels are quantized to whole bytes. Chaining
    /// [`to_rgb`](Self::to_rgb) and [`RgbColor::to_hsl`] therefore yields
    /// exactly the same color.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, HsvColor};
    /// let orange = HsvColor::new(30, 100, 100)?;
    /// let hsl = orange.to_hsl();
    /// assert_eq!((hsl.hue(), hsl.saturation(), hsl.lightness()), (29, 100, 50));
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn to_hsl(&self) -> HslColor {
        let [hue, saturation, lightness] = *self
            .hsl
            .get_or_init(|| core::convert(ColorSystem::Hsv, ColorSystem::Hsl, &self.coordinates()));
        HslColor::from_coordinates(hue, saturation, lightness)
    }

    /// Convert this color to HSV, which returns the same logical value.
    pub fn to_hsv(&self) -> HsvColor {
        self.clone()
    }

    /// Spread the components into conversion coordinates.
    fn coordinates(&self) -> [i64; 3] {
        [
            i64::from(self.hue),
            i64::from(self.saturation),
            i64::from(self.value),
        ]
    }
}

impl std::fmt::Debug for HsvColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HsvColor")
            .field("hue", &self.hue)
            .field("saturation", &self.saturation)
            .field("value", &self.value)
            .finish()
    }
}

impl PartialEq for HsvColor {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue
            && self.saturation == other.saturation
            && self.value == other.value
    }
}

impl Eq for HsvColor {}

impl std::hash::Hash for HsvColor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.hue, self.saturation, self.value).hash(state);
    }
}

// ====================================================================================================================

/// An immutable color with hue, saturation, and lightness coordinates.
///
/// The hue ranges `0..360` and wraps around instead of erroring. Saturation
/// and lightness are percentages ranging `0..=100`. As with [`RgbColor`],
/// derived conversions are cached per instance and excluded from equality
/// and hashing.
#[derive(Clone)]
pub struct HslColor {
    hue: u16,
    saturation: u8,
    lightness: u8,
    rgb: OnceLock<[i64; 3]>,
    hsv: OnceLock<[i64; 3]>,
}

impl HslColor {
    /// Instantiate a new HSL color.
    ///
    /// The hue is wrapped into `0..360`. Saturation and lightness must fit
    /// into `0..=100`; any other value produces a [`RangeError`] naming the
    /// offending component.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, HslColor};
    /// let spring = HslColor::new(150, 100, 50)?;
    /// assert_eq!(spring.lightness(), 50);
    /// assert!(HslColor::new(150, 100, -1).is_err());
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn new(hue: i64, saturation: i64, lightness: i64) -> Result<Self, RangeError> {
        Ok(Self {
            hue: wrap_hue(hue),
            saturation: percentage("saturation", saturation)?,
            lightness: percentage("lightness", lightness)?,
            rgb: OnceLock::new(),
            hsv: OnceLock::new(),
        })
    }

    /// Instantiate from conversion coordinates that satisfy the invariants
    /// already.
    fn from_coordinates(hue: i64, saturation: i64, lightness: i64) -> Self {
        debug_assert!((0..360).contains(&hue), "hue {} outside 0..360", hue);
        debug_assert!(
            (0..=100).contains(&saturation),
            "saturation {} outside 0..=100",
            saturation
        );
        debug_assert!(
            (0..=100).contains(&lightness),
            "lightness {} outside 0..=100",
            lightness
        );

        Self {
            hue: hue as u16,
            saturation: saturation as u8,
            lightness: lightness as u8,
            rgb: OnceLock::new(),
            hsv: OnceLock::new(),
        }
    }

    /// Access the hue in degrees.
    #[inline]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Access the saturation percentage.
    #[inline]
    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Access the lightness percentage.
    #[inline]
    pub const fn lightness(&self) -> u8 {
        self.lightness
    }

    /// Convert this color to RGB.
    ///
    /// The derived channels are computed on the first call and cached on
    /// this instance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use chromatch::{error::RangeError, HslColor};
    /// let azure = HslColor::new(240, 100, 50)?;
    /// assert_eq!(azure.to_rgb().channels(), [0, 0, 255]);
    /// # Ok::<(), RangeError>(())
    /// ```
    pub fn to_rgb(&self) -> RgbColor {
        let [red, green, blue] = *self
            .rgb
            .get_or_init(|| core::convert(ColorSystem::Hsl, ColorSystem::Rgb, &self.coordinates()));
        RgbColor::with_channels(red as u8, green as u8, blue as u8)
    }

    /// Convert this color to HSV.
    ///
    /// The conversion takes two hops, from HSL to RGB and from RGB to HSV,
    /// and the intermediate channels are quantized to whole bytes. Chaining
    /// [`to_rgb`](Self::to_rgb) and [`RgbColor::to_hsv`] therefore yields
    /// exactly the same color.
    pub fn to_hsv(&self) -> HsvColor {
        let [hue, saturation, value] = *self
            .hsv
            .get_or_init(|| core::convert(ColorSystem::Hsl, ColorSystem::Hsv, &self.coordinates()));
        HsvColor::from_coordinates(hue, saturation, value)
    }

    /// Convert this color to HSL, which returns the same logical value.
    pub fn to_hsl(&self) -> HslColor {
        self.clone()
    }

    /// Spread the components into conversion coordinates.
    fn coordinates(&self) -> [i64; 3] {
        [
            i64::from(self.hue),
            i64::from(self.saturation),
            i64::from(self.lightness),
        ]
    }
}

impl std::fmt::Debug for HslColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HslColor")
            .field("hue", &self.hue)
            .field("saturation", &self.saturation)
            .field("lightness", &self.lightness)
            .finish()
    }
}

impl PartialEq for HslColor {
    fn eq(&self, other: &Self) -> bool {
        self.hue == other.hue
            && self.saturation == other.saturation
            && self.lightness == other.lightness
    }
}

impl Eq for HslColor {}

impl std::hash::Hash for HslColor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        (self.hue, self.saturation, self.lightness).hash(state);
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{HslColor, HsvColor, RgbColor};
    use crate::error::RangeError;

    #[test]
    fn test_rgb_validation() {
        assert!(RgbColor::new(0, 0, 0).is_ok());
        assert!(RgbColor::new(255, 255, 255).is_ok());
        assert_eq!(
            RgbColor::new(256, 0, 0),
            Err(RangeError::Component {
                name: "red",
                value: 256,
                expected: 0..=255,
            })
        );
        assert_eq!(
            RgbColor::new(-1, 0, 0),
            Err(RangeError::Component {
                name: "red",
                value: -1,
                expected: 0..=255,
            })
        );
        assert_eq!(
            RgbColor::new(0, 1000, 0),
            Err(RangeError::Component {
                name: "green",
                value: 1000,
                expected: 0..=255,
            })
        );
    }

    #[test]
    fn test_percentage_validation() {
        assert!(HsvColor::new(0, 100, 100).is_ok());
        assert_eq!(
            HsvColor::new(0, 101, 0),
            Err(RangeError::Component {
                name: "saturation",
                value: 101,
                expected: 0..=100,
            })
        );
        assert_eq!(
            HslColor::new(0, 0, -3),
            Err(RangeError::Component {
                name: "lightness",
                value: -3,
                expected: 0..=100,
            })
        );
    }

    #[test]
    fn test_hue_wrap() -> Result<(), RangeError> {
        assert_eq!(HsvColor::new(0, 50, 50)?.hue(), 0);
        assert_eq!(HsvColor::new(359, 50, 50)?.hue(), 359);
        assert_eq!(HsvColor::new(360, 50, 50)?.hue(), 0);
        assert_eq!(HsvColor::new(-10, 50, 50)?.hue(), 350);
        assert_eq!(HsvColor::new(720, 50, 50)?.hue(), 0);
        assert_eq!(HsvColor::new(-370, 50, 50)?.hue(), 350);
        assert_eq!(HslColor::new(365, 50, 50)?.hue(), 5);
        Ok(())
    }

    #[test]
    fn test_conversion_round_trips() -> Result<(), RangeError> {
        // Fully saturated and achromatic colors round-trip exactly.
        for channels in [
            [0, 0, 0],
            [255, 255, 255],
            [255, 0, 0],
            [0, 255, 0],
            [0, 0, 255],
            [255, 255, 0],
            [0, 255, 255],
            [255, 0, 255],
        ] {
            let color = RgbColor::new(channels[0], channels[1], channels[2])?;
            assert_eq!(color.to_hsv().to_rgb(), color, "HSV trip for {:?}", color);
            assert_eq!(color.to_hsl().to_rgb(), color, "HSL trip for {:?}", color);
        }

        // Truncation shifts mid-range channels by at most one.
        let olive = RgbColor::new(128, 128, 0)?;
        assert_eq!(olive.to_hsv().to_rgb().channels(), [127, 127, 0]);
        assert_eq!(olive.to_hsl().to_rgb().channels(), [127, 127, 0]);
        let gray = RgbColor::new(128, 128, 128)?;
        assert_eq!(gray.to_hsv().to_rgb().channels(), [127, 127, 127]);

        // Dark colors lose more to the percentage quantization.
        let ember = RgbColor::new(5, 0, 0)?;
        assert_eq!(ember.to_hsv(), HsvColor::new(0, 100, 1)?);
        assert_eq!(ember.to_hsv().to_rgb().channels(), [2, 0, 0]);
        Ok(())
    }

    #[test]
    fn test_identity_conversions() -> Result<(), RangeError> {
        let rgb = RgbColor::new(12, 34, 56)?;
        assert_eq!(rgb.to_rgb(), rgb);
        let hsv = HsvColor::new(12, 34, 56)?;
        assert_eq!(hsv.to_hsv(), hsv);
        let hsl = HslColor::new(12, 34, 56)?;
        assert_eq!(hsl.to_hsl(), hsl);
        Ok(())
    }

    #[test]
    fn test_two_hop_conversions() -> Result<(), RangeError> {
        let orange = HsvColor::new(30, 100, 100)?;
        assert_eq!(orange.to_hsl(), HslColor::new(29, 100, 50)?);
        assert_eq!(orange.to_hsl(), orange.to_rgb().to_hsl());

        let lime = HslColor::new(120, 100, 50)?;
        assert_eq!(lime.to_hsv(), HsvColor::new(120, 100, 100)?);
        assert_eq!(lime.to_hsv(), lime.to_rgb().to_hsv());
        Ok(())
    }

    #[test]
    fn test_equality_ignores_caches() -> Result<(), RangeError> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash_of(color: &RgbColor) -> u64 {
            let mut hasher = DefaultHasher::new();
            color.hash(&mut hasher);
            hasher.finish()
        }

        let plain = RgbColor::new(10, 20, 30)?;
        let warmed = RgbColor::new(10, 20, 30)?;
        let _ = warmed.to_hsv();
        let _ = warmed.to_hsl();

        assert_eq!(plain, warmed);
        assert_eq!(hash_of(&plain), hash_of(&warmed));
        Ok(())
    }

    #[test]
    fn test_hex_round_trip() -> Result<(), RangeError> {
        assert_eq!(RgbColor::from_hex("#FF8000")?.to_hex(), "#FF8000");
        assert_eq!(RgbColor::from_hex("#FFF")?, RgbColor::new(240, 240, 240)?);
        assert_eq!(
            RgbColor::from_hex_css("#FFF")?,
            RgbColor::new(255, 255, 255)?
        );
        assert_eq!("#FF8000".parse::<RgbColor>()?.channels(), [255, 128, 0]);
        assert_eq!(RgbColor::try_from("0a0b0c")?.to_hex(), "#0A0B0C");
        assert_eq!(
            RgbColor::try_from("#123456".to_string())?.channels(),
            [18, 52, 86]
        );
        assert_eq!(RgbColor::from_hex(""), Err(RangeError::EmptyHexString));
        Ok(())
    }

    #[test]
    fn test_display() {
        assert_eq!(rgb!(255, 128, 0).to_string(), "#FF8000");
        assert_eq!(rgb!(0, 0, 0).to_string(), "#000000");
        assert_eq!(format!("{}", rgb!(1, 2, 3)), "#010203");
        assert_eq!(
            format!("{:?}", rgb!(1, 2, 3)),
            "RgbColor { red: 1, green: 2, blue: 3 }"
        );
    }

    #[test]
    fn test_conversions_from_tuples() {
        assert_eq!(RgbColor::from((1, 2, 3)).channels(), [1, 2, 3]);
        assert_eq!(RgbColor::from([4, 5, 6]).channels(), [4, 5, 6]);
    }
}
