//! The 16 basic colors of HTML 4.01.
//!
//! These are the named colors of the HTML 4.01 specification from 1999.

use std::sync::LazyLock;

use chromatch::{rgb, ColorGroup};

/// The HTML color group.
pub static HTML: LazyLock<ColorGroup> = LazyLock::new(|| {
    ColorGroup::new(
        "HTML",
        [
            ("White", rgb!(255, 255, 255)),
            ("Silver", rgb!(192, 192, 192)),
            ("Gray", rgb!(128, 128, 128)),
            ("Black", rgb!(0, 0, 0)),
            ("Red", rgb!(255, 0, 0)),
            ("Maroon", rgb!(128, 0, 0)),
            ("Yellow", rgb!(255, 255, 0)),
            ("Olive", rgb!(128, 128, 0)),
            ("Lime", rgb!(0, 255, 0)),
            ("Green", rgb!(0, 128, 0)),
            ("Aqua", rgb!(0, 255, 255)),
            ("Teal", rgb!(0, 128, 128)),
            ("Blue", rgb!(0, 0, 255)),
            ("Navy", rgb!(0, 0, 128)),
            ("Fuchsia", rgb!(255, 0, 255)),
            ("Purple", rgb!(128, 0, 128)),
        ],
    )
});

/// Access the HTML color group.
pub fn group() -> &'static ColorGroup {
    &HTML
}
