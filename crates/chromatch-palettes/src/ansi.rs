//! The 16 base terminal colors, as rendered by seven terminal vendors.
//!
//! The original ANSI escape sequences named eight colors and left their
//! exact appearance to the terminal, with "bold" rendering commonly doubling
//! as eight brighter variants. Vendors disagreed on the actual RGB values,
//! so this group carries one set of entries per vendor, each named after the
//! vendor and the color. The X variant omits the four bright entries that
//! never had recorded values.

use std::sync::LazyLock;

use chromatch::{rgb, ColorGroup};

/// The ANSI color group.
pub static ANSI: LazyLock<ColorGroup> = LazyLock::new(|| {
    ColorGroup::new(
        "ANSI",
        [
            ("VgaBlack", rgb!(0, 0, 0)),
            ("VgaRed", rgb!(170, 0, 0)),
            ("VgaGreen", rgb!(0, 170, 0)),
            ("VgaYellow", rgb!(170, 85, 0)),
            ("VgaBlue", rgb!(0, 0, 170)),
            ("VgaMagenta", rgb!(170, 0, 170)),
            ("VgaCyan", rgb!(0, 170, 170)),
            ("VgaWhite", rgb!(170, 170, 170)),

            ("VgaBrightBlack", rgb!(85, 85, 85)),
            ("VgaBrightRed", rgb!(255, 85, 85)),
            ("VgaBrightGreen", rgb!(85, 255, 85)),
            ("VgaBrightYellow", rgb!(255, 255, 85)),
            ("VgaBrightBlue", rgb!(85, 85, 255)),
            ("VgaBrightMagenta", rgb!(255, 85, 255)),
            ("VgaBrightCyan", rgb!(85, 255, 255)),
            ("VgaBrightWhite", rgb!(255, 255, 255)),

            ("CmdBlack", rgb!(0, 0, 0)),
            ("CmdRed", rgb!(128, 0, 0)),
            ("CmdGreen", rgb!(0, 128, 0)),
            ("CmdYellow", rgb!(128, 128, 0)),
            ("CmdBlue", rgb!(0, 0, 128)),
            ("CmdMagenta", rgb!(128, 0, 128)),
            ("CmdCyan", rgb!(0, 128, 128)),
            ("CmdWhite", rgb!(192, 192, 192)),

            ("CmdBrightBlack", rgb!(128, 128, 128)),
            ("CmdBrightRed", rgb!(255, 0, 0)),
            ("CmdBrightGreen", rgb!(0, 255, 0)),
            ("CmdBrightYellow", rgb!(255, 255, 0)),
            ("CmdBrightBlue", rgb!(0, 0, 255)),
            ("CmdBrightMagenta", rgb!(255, 0, 255)),
            ("CmdBrightCyan", rgb!(0, 255, 255)),
            ("CmdBrightWhite", rgb!(255, 255, 255)),

            ("TerminalAppBlack", rgb!(0, 0, 0)),
            ("TerminalAppRed", rgb!(194, 54, 33)),
            ("TerminalAppGreen", rgb!(37, 188, 36)),
            ("TerminalAppYellow", rgb!(173, 173, 39)),
            ("TerminalAppBlue", rgb!(73, 46, 255)),
            ("TerminalAppMagenta", rgb!(211, 56, 211)),
            ("TerminalAppCyan", rgb!(51, 187, 200)),
            ("TerminalAppWhite", rgb!(203, 204, 205)),

            ("TerminalAppBrightBlack", rgb!(129, 131, 131)),
            ("TerminalAppBrightRed", rgb!(252, 57, 31)),
            ("TerminalAppBrightGreen", rgb!(49, 231, 34)),
            ("TerminalAppBrightYellow", rgb!(234, 236, 35)),
            ("TerminalAppBrightBlue", rgb!(88, 51, 255)),
            ("TerminalAppBrightMagenta", rgb!(249, 53, 248)),
            ("TerminalAppBrightCyan", rgb!(20, 240, 240)),
            ("TerminalAppBrightWhite", rgb!(233, 235, 235)),

            ("PuttyBlack", rgb!(0, 0, 0)),
            ("PuttyRed", rgb!(187, 0, 0)),
            ("PuttyGreen", rgb!(0, 187, 0)),
            ("PuttyYellow", rgb!(187, 187, 0)),
            ("PuttyBlue", rgb!(0, 0, 187)),
            ("PuttyMagenta", rgb!(187, 0, 187)),
            ("PuttyCyan", rgb!(0, 187, 187)),
            ("PuttyWhite", rgb!(187, 187, 187)),

            ("PuttyBrightBlack", rgb!(85, 85, 85)),
            ("PuttyBrightRed", rgb!(255, 85, 85)),
            ("PuttyBrightGreen", rgb!(85, 255, 85)),
            ("PuttyBrightYellow", rgb!(255, 255, 85)),
            ("PuttyBrightBlue", rgb!(85, 85, 255)),
            ("PuttyBrightMagenta", rgb!(255, 85, 255)),
            ("PuttyBrightCyan", rgb!(85, 255, 255)),
            ("PuttyBrightWhite", rgb!(255, 255, 255)),

            ("MircBlack", rgb!(0, 0, 0)),
            ("MircRed", rgb!(127, 0, 0)),
            ("MircGreen", rgb!(0, 147, 0)),
            ("MircYellow", rgb!(252, 127, 0)),
            ("MircBlue", rgb!(0, 0, 127)),
            ("MircMagenta", rgb!(156, 0, 156)),
            ("MircCyan", rgb!(0, 147, 147)),
            ("MircWhite", rgb!(210, 210, 210)),

            ("MircBrightBlack", rgb!(127, 127, 127)),
            ("MircBrightRed", rgb!(255, 0, 0)),
            ("MircBrightGreen", rgb!(0, 255, 0)),
            ("MircBrightYellow", rgb!(255, 255, 0)),
            ("MircBrightBlue", rgb!(0, 0, 255)),
            ("MircBrightMagenta", rgb!(255, 0, 255)),
            ("MircBrightCyan", rgb!(0, 255, 255)),
            ("MircBrightWhite", rgb!(255, 255, 255)),

            ("XtermBlack", rgb!(0, 0, 0)),
            ("XtermRed", rgb!(205, 0, 0)),
            ("XtermGreen", rgb!(0, 205, 0)),
            ("XtermYellow", rgb!(205, 205, 0)),
            ("XtermBlue", rgb!(0, 0, 238)),
            ("XtermMagenta", rgb!(205, 0, 205)),
            ("XtermCyan", rgb!(0, 205, 205)),
            ("XtermWhite", rgb!(229, 229, 229)),

            ("XtermBrightBlack", rgb!(127, 127, 127)),
            ("XtermBrightRed", rgb!(255, 0, 0)),
            ("XtermBrightGreen", rgb!(0, 255, 0)),
            ("XtermBrightYellow", rgb!(255, 255, 0)),
            ("XtermBrightBlue", rgb!(92, 92, 255)),
            ("XtermBrightMagenta", rgb!(255, 0, 255)),
            ("XtermBrightCyan", rgb!(0, 255, 255)),
            ("XtermBrightWhite", rgb!(255, 255, 255)),

            ("XBlack", rgb!(0, 0, 0)),
            ("XRed", rgb!(255, 0, 0)),
            ("XGreen", rgb!(0, 255, 0)),
            ("XYellow", rgb!(255, 255, 0)),
            ("XBlue", rgb!(0, 0, 255)),
            ("XMagenta", rgb!(255, 0, 255)),
            ("XCyan", rgb!(0, 255, 255)),
            ("XWhite", rgb!(255, 255, 255)),

            ("XBrightGreen", rgb!(144, 238, 144)),
            ("XBrightYellow", rgb!(255, 255, 224)),
            ("XBrightBlue", rgb!(173, 216, 230)),
            ("XBrightCyan", rgb!(224, 255, 255)),
        ],
    )
});

/// Access the ANSI color group.
pub fn group() -> &'static ColorGroup {
    &ANSI
}
