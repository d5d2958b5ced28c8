//! Utility module with chromatch's errors.

/// An out-of-range error.
///
/// This error indicates a color component or hex string that does not fit the
/// valid shape for its field. The component ranges used by this crate are:
///
///   * `0..=255` for the channels of [`RgbColor`](crate::RgbColor);
///   * `0..=100` for the saturation, value, and lightness percentages of
///     [`HsvColor`](crate::HsvColor) and [`HslColor`](crate::HslColor).
///
/// Hue is exempt: out-of-range hues wrap around instead of erroring. The
/// remaining variants cover hex strings that are empty, have an unexpected
/// number of digits, or contain non-hexadecimal characters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RangeError {
    /// A component value outside its valid closed range.
    Component {
        /// The name of the offending component.
        name: &'static str,
        /// The rejected value.
        value: i64,
        /// The range the value should have fit into.
        expected: std::ops::RangeInclusive<i64>,
    },

    /// An empty string where a hex color was expected.
    EmptyHexString,

    /// A hex color with an unexpected number of digits after removing the
    /// optional `#` prefix. For example, `#12345` has five digits, which is
    /// neither 3 nor 6.
    UnexpectedHexLength(usize),

    /// A hex color containing characters other than `0-9`, `a-f`, and `A-F`.
    /// For example, `#efgefg` contains the letter `g`. The payload is the
    /// offending digit group.
    MalformedHexDigits(String),
}

impl std::fmt::Display for RangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use RangeError::*;

        match self {
            Component {
                name,
                value,
                expected,
            } => f.write_fmt(format_args!(
                "{} component {} does not fit into range {}..={}",
                name,
                value,
                expected.start(),
                expected.end()
            )),
            EmptyHexString => f.write_str("hex color should not be empty"),
            UnexpectedHexLength(length) => f.write_fmt(format_args!(
                "hex color should have 3 or 6 digits but has {}",
                length
            )),
            MalformedHexDigits(digits) => f.write_fmt(format_args!(
                "hex color `{}` should contain only hexadecimal digits",
                digits
            )),
        }
    }
}

impl std::error::Error for RangeError {}

// ====================================================================================================================

use crate::model::RgbColor;

/// A failed exact lookup on a color group.
///
/// This error indicates a name or value lookup that matched no member of the
/// queried [`ColorGroup`](crate::ColorGroup). Nearest-match lookup never
/// produces this error, since every non-empty group has some closest member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NotFoundError {
    /// No member with the given name.
    Name {
        /// The name of the queried group.
        group: String,
        /// The name that matched no member.
        name: String,
    },

    /// No member with the given RGB value.
    Value {
        /// The name of the queried group.
        group: String,
        /// The value that matched no member.
        color: RgbColor,
    },
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            NotFoundError::Name { group, name } => f.write_fmt(format_args!(
                "color group {} has no member named `{}`",
                group, name
            )),
            NotFoundError::Value { group, color } => f.write_fmt(format_args!(
                "color group {} has no member with value {}",
                group, color
            )),
        }
    }
}

impl std::error::Error for NotFoundError {}

// ====================================================================================================================

/// An error indicating a nearest-match lookup on an empty color group.
///
/// A group without members has no closest member either. The built-in
/// palettes are never empty, so this error only arises for groups constructed
/// from an empty sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyGroupError;

impl std::fmt::Display for EmptyGroupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot determine the closest member of an empty color group")
    }
}

impl std::error::Error for EmptyGroupError {}
