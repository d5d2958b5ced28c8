mod conversion;
mod distance;
mod string;

// conversion
pub(crate) use conversion::{convert, ColorSystem};

// distance
pub use distance::DistanceMetric;
pub(crate) use distance::find_closest;

// string
pub(crate) use string::{format, parse_hex, parse_hex_css};
