//! The 256-entry indexed terminal palette.
//!
//! A member's position equals its terminal color code: the 16 base colors,
//! then the 6x6x6 color cube, then the 24-step grayscale ramp. The
//! historical names repeat across indices, and name lookup resolves such
//! repeats to the lowest color code.

use std::sync::LazyLock;

use chromatch::{rgb, ColorGroup};

/// The Xterm color group.
pub static XTERM: LazyLock<ColorGroup> = LazyLock::new(|| {
    ColorGroup::new(
        "Xterm",
        [
            // ANSI colors
            ("Black", rgb!(0, 0, 0)),
            ("Maroon", rgb!(128, 0, 0)),
            ("Green", rgb!(0, 128, 0)),
            ("Olive", rgb!(128, 128, 0)),
            ("Navy", rgb!(0, 0, 128)),
            ("Purple", rgb!(128, 0, 128)),
            ("Teal", rgb!(0, 128, 128)),
            ("Silver", rgb!(192, 192, 192)),
            ("Gray", rgb!(128, 128, 128)),
            ("Red", rgb!(255, 0, 0)),
            ("Lime", rgb!(0, 255, 0)),
            ("Yellow", rgb!(255, 255, 0)),
            ("Blue", rgb!(0, 0, 255)),
            ("Magenta", rgb!(255, 0, 255)),
            ("Cyan", rgb!(0, 255, 255)),
            ("White", rgb!(255, 255, 255)),

            // 6x6x6 Cube
            ("Gray0", rgb!(0, 0, 0)),
            ("NavyBlue", rgb!(0, 0, 95)),
            ("DarkBlue", rgb!(0, 0, 135)),
            ("Blue3", rgb!(0, 0, 175)),
            ("Blue3", rgb!(0, 0, 215)),
            ("Blue1", rgb!(0, 0, 255)),
            ("DarkGreen", rgb!(0, 95, 0)),
            ("DeepSkyBlue4", rgb!(0, 95, 95)),
            ("DeepSkyBlue4", rgb!(0, 95, 135)),
            ("DeepSkyBlue4", rgb!(0, 95, 175)),
            ("DodgerBlue3", rgb!(0, 95, 215)),
            ("DodgetBlue2", rgb!(0, 95, 255)),
            ("Green4", rgb!(0, 135, 0)),
            ("SpringGreen4", rgb!(0, 135, 95)),
            ("Turquoise4", rgb!(0, 135, 135)),
            ("DeepSkyBlue3", rgb!(0, 135, 175)),
            ("DeepSkyBlue3", rgb!(0, 135, 215)),
            ("DodgerBlue1", rgb!(0, 135, 255)),
            ("Green3", rgb!(0, 175, 0)),
            ("SpringGreen3", rgb!(0, 175, 95)),
            ("DarkCyan", rgb!(0, 175, 135)),
            ("LightSeaGreen", rgb!(0, 175, 175)),
            ("DeepSkyBlue2", rgb!(0, 175, 215)),
            ("DeepSkyBlue1", rgb!(0, 175, 255)),
            ("Green3", rgb!(0, 215, 0)),
            ("SpringGreen3", rgb!(0, 215, 95)),
            ("SpringGreen2", rgb!(0, 215, 135)),
            ("Cyan3", rgb!(0, 215, 175)),
            ("DarkTurquoise", rgb!(0, 215, 215)),
            ("Turquoise2", rgb!(0, 215, 255)),
            ("Green1", rgb!(0, 255, 0)),
            ("SpringGreen2", rgb!(0, 255, 95)),
            ("SpringGreen1", rgb!(0, 255, 135)),
            ("MediumSpringGreen", rgb!(0, 255, 175)),
            ("Cyan2", rgb!(0, 255, 215)),
            ("Cyan1", rgb!(0, 255, 255)),
            ("DarkRed", rgb!(95, 0, 0)),
            ("DeepPink4", rgb!(95, 0, 95)),
            ("Purple4", rgb!(95, 0, 135)),
            ("Purple4", rgb!(95, 0, 175)),
            ("Purple3", rgb!(95, 0, 215)),
            ("BlueViolet", rgb!(95, 0, 255)),
            ("Orange4", rgb!(95, 95, 0)),
            ("Gray37", rgb!(95, 95, 95)),
            ("MediumPurple4", rgb!(95, 95, 135)),
            ("SlateBlue3", rgb!(95, 95, 175)),
            ("SlateBlue3", rgb!(95, 95, 215)),
            ("RoyalBlue1", rgb!(95, 95, 255)),
            ("Chartreuse4", rgb!(95, 135, 0)),
            ("DarkSeaGreen4", rgb!(95, 135, 95)),
            ("PaleTurquoise4", rgb!(95, 135, 135)),
            ("SteelBlue", rgb!(95, 135, 175)),
            ("SteelBlue3", rgb!(95, 135, 215)),
            ("CornflowerBlue", rgb!(95, 135, 255)),
            ("Chartreuse3", rgb!(95, 175, 0)),
            ("DarkSeaGreen4", rgb!(95, 175, 95)),
            ("CadetBlue", rgb!(95, 175, 135)),
            ("CadetBlue", rgb!(95, 175, 175)),
            ("SkyBlue3", rgb!(95, 175, 215)),
            ("SteelBlue1", rgb!(95, 175, 255)),
            ("Cartreuse3", rgb!(95, 215, 0)),
            ("PaleGreen3", rgb!(95, 215, 95)),
            ("SeaGreen3", rgb!(95, 215, 135)),
            ("Aquamarine3", rgb!(95, 215, 175)),
            ("MediumTurquoise", rgb!(95, 215, 215)),
            ("SteelBlue1", rgb!(95, 215, 255)),
            ("Chartreuse2", rgb!(95, 255, 0)),
            ("SeaGreen2", rgb!(95, 255, 95)),
            ("SeaGreen1", rgb!(95, 255, 135)),
            ("SeaGreen1", rgb!(95, 255, 175)),
            ("Aquamarine1", rgb!(95, 255, 215)),
            ("DarkSlateGray2", rgb!(95, 255, 255)),
            ("DarkRed", rgb!(135, 0, 0)),
            ("DeepPink4", rgb!(135, 0, 95)),
            ("DarkMagenta", rgb!(135, 0, 135)),
            ("DarkMagenta", rgb!(135, 0, 175)),
            ("DarkViolet", rgb!(135, 0, 215)),
            ("Purple", rgb!(135, 0, 255)),
            ("Orange4", rgb!(135, 95, 0)),
            ("LightPink4", rgb!(135, 95, 95)),
            ("Plum4", rgb!(135, 95, 135)),
            ("MediumPurple3", rgb!(135, 95, 175)),
            ("MediumPurple3", rgb!(135, 95, 215)),
            ("SlateBlue1", rgb!(135, 95, 255)),
            ("Yellow4", rgb!(135, 135, 0)),
            ("Wheat4", rgb!(135, 135, 95)),
            ("Gray53", rgb!(135, 135, 135)),
            ("LightSlateGray", rgb!(135, 135, 175)),
            ("MediumPurple", rgb!(135, 135, 215)),
            ("LightSlateBlue", rgb!(135, 135, 255)),
            ("Yellow4", rgb!(135, 175, 0)),
            ("DarkOliveGreen3", rgb!(135, 175, 95)),
            ("DarkSeaGreen", rgb!(135, 175, 135)),
            ("LightSkyBlue3", rgb!(135, 175, 175)),
            ("LightSkyBlue3", rgb!(135, 175, 215)),
            ("SkyBlue2", rgb!(135, 175, 255)),
            ("Chartreuse2", rgb!(135, 215, 0)),
            ("DarkOliveGreen3", rgb!(135, 215, 95)),
            ("PaleGreen3", rgb!(135, 215, 135)),
            ("DarkSeaGreen3", rgb!(135, 215, 175)),
            ("DarkSlateGray3", rgb!(135, 215, 215)),
            ("SkyBlue1", rgb!(135, 215, 255)),
            ("Chartreuse1", rgb!(135, 255, 0)),
            ("LightGreen", rgb!(135, 255, 95)),
            ("LightGreen", rgb!(135, 255, 135)),
            ("PaleGreen1", rgb!(135, 255, 175)),
            ("Aquamarine1", rgb!(135, 255, 215)),
            ("DarkSlateGray1", rgb!(135, 255, 255)),
            ("Red3", rgb!(175, 0, 0)),
            ("DeepPink4", rgb!(175, 0, 95)),
            ("MediumVioletRed", rgb!(175, 0, 135)),
            ("Magenta3", rgb!(175, 0, 175)),
            ("DarkViolet", rgb!(175, 0, 215)),
            ("Purple", rgb!(175, 0, 255)),
            ("DarkOrange3", rgb!(175, 95, 0)),
            ("IndianRed", rgb!(175, 95, 95)),
            ("HotPink3", rgb!(175, 95, 135)),
            ("MediumOrchid3", rgb!(175, 95, 175)),
            ("MediumOrchid", rgb!(175, 95, 215)),
            ("MediumPurple2", rgb!(175, 95, 255)),
            ("DarkGoldenrod", rgb!(175, 135, 0)),
            ("LightSalmon3", rgb!(175, 135, 95)),
            ("RosyBrown", rgb!(175, 135, 135)),
            ("Gray63", rgb!(175, 135, 175)),
            ("MediumPurple2", rgb!(175, 135, 215)),
            ("MediumPurple1", rgb!(175, 135, 255)),
            ("Gold3", rgb!(175, 175, 0)),
            ("DarkKhaki", rgb!(175, 175, 95)),
            ("NavajoWhite", rgb!(175, 175, 135)),
            ("Gray69", rgb!(175, 175, 175)),
            ("LightSteelBlue3", rgb!(175, 175, 215)),
            ("LightSteelBlue", rgb!(175, 175, 255)),
            ("Yellow3", rgb!(175, 215, 0)),
            ("DarkOliveGreen3", rgb!(175, 215, 95)),
            ("DarkSeaGreen3", rgb!(175, 215, 135)),
            ("DarkSeaGreen2", rgb!(175, 215, 175)),
            ("LightCyan3", rgb!(175, 215, 215)),
            ("LightSkyBlue1", rgb!(175, 215, 255)),
            ("GreenYellow", rgb!(175, 255, 0)),
            ("DarkOliveGreen2", rgb!(175, 255, 95)),
            ("PaleGreen1", rgb!(175, 255, 135)),
            ("DarkSeaGreen2", rgb!(175, 255, 175)),
            ("DarkSeaGreen1", rgb!(175, 255, 215)),
            ("PaleTurquoise1", rgb!(175, 255, 255)),
            ("Red3", rgb!(215, 0, 0)),
            ("DeepPink3", rgb!(215, 0, 95)),
            ("DeepPink3", rgb!(215, 0, 135)),
            ("Magenta3", rgb!(215, 0, 175)),
            ("Magenta3", rgb!(215, 0, 215)),
            ("Magenta2", rgb!(215, 0, 255)),
            ("DarkOrange3", rgb!(215, 95, 0)),
            ("IndianRed", rgb!(215, 95, 95)),
            ("HotPink3", rgb!(215, 95, 135)),
            ("HotPink2", rgb!(215, 95, 175)),
            ("Orchid", rgb!(215, 95, 215)),
            ("MediumOrchid1", rgb!(215, 95, 255)),
            ("Orange3", rgb!(215, 135, 0)),
            ("LightSalmon3", rgb!(215, 135, 95)),
            ("LightPink3", rgb!(215, 135, 135)),
            ("Pink3", rgb!(215, 135, 175)),
            ("Plum3", rgb!(215, 135, 215)),
            ("Violet", rgb!(215, 135, 255)),
            ("Gold3", rgb!(215, 175, 0)),
            ("LightGoldenrod3", rgb!(215, 175, 95)),
            ("Tan", rgb!(215, 175, 135)),
            ("MistyRose3", rgb!(215, 175, 175)),
            ("Thistle3", rgb!(215, 175, 215)),
            ("Plum2", rgb!(215, 175, 255)),
            ("Yellow3", rgb!(215, 215, 0)),
            ("Khaki3", rgb!(215, 215, 95)),
            ("LightGoldenrod2", rgb!(215, 215, 135)),
            ("LightYellow3", rgb!(215, 215, 175)),
            ("Gray84", rgb!(215, 215, 215)),
            ("LightSteelBlue1", rgb!(215, 215, 255)),
            ("Yellow2", rgb!(215, 255, 0)),
            ("DarkOliveGreen1", rgb!(215, 255, 95)),
            ("DarkOliveGreen1", rgb!(215, 255, 135)),
            ("DarkSeaGreen1", rgb!(215, 255, 175)),
            ("Honeydew2", rgb!(215, 255, 215)),
            ("LightCyan", rgb!(215, 255, 255)),
            ("Red1", rgb!(255, 0, 0)),
            ("DeepPink2", rgb!(255, 0, 95)),
            ("DeepPink1", rgb!(255, 0, 135)),
            ("DeepPink1", rgb!(255, 0, 175)),
            ("Magenta2", rgb!(255, 0, 215)),
            ("Magenta1", rgb!(255, 0, 255)),
            ("OrangeRed1", rgb!(255, 95, 0)),
            ("IndianRed1", rgb!(255, 95, 95)),
            ("IndianRed1", rgb!(255, 95, 135)),
            ("HotPink", rgb!(255, 95, 175)),
            ("HotPink", rgb!(255, 95, 215)),
            ("MediumOrchid1", rgb!(255, 95, 255)),
            ("DarkOrange", rgb!(255, 135, 0)),
            ("Salmon1", rgb!(255, 135, 95)),
            ("LightCoral", rgb!(255, 135, 135)),
            ("PaleVioletRed1", rgb!(255, 135, 175)),
            ("Orchid2", rgb!(255, 135, 215)),
            ("Orchid1", rgb!(255, 135, 255)),
            ("Orange1", rgb!(255, 175, 0)),
            ("SandyBrown", rgb!(255, 175, 95)),
            ("LightSalmon1", rgb!(255, 175, 135)),
            ("LightPink1", rgb!(255, 175, 175)),
            ("Pink1", rgb!(255, 175, 215)),
            ("Plum1", rgb!(255, 175, 255)),
            ("Gold1", rgb!(255, 215, 0)),
            ("LightGoldenrod2", rgb!(255, 215, 95)),
            ("LightGoldenrod2", rgb!(255, 215, 135)),
            ("NavajoWhite1", rgb!(255, 215, 175)),
            ("MistyRose1", rgb!(255, 215, 215)),
            ("Thistle1", rgb!(255, 215, 255)),
            ("Yellow1", rgb!(255, 255, 0)),
            ("LightGoldenrod1", rgb!(255, 255, 95)),
            ("Khaki1", rgb!(255, 255, 135)),
            ("Wheat1", rgb!(255, 255, 175)),
            ("Cornsilk1", rgb!(255, 255, 215)),
            ("Gray100", rgb!(255, 255, 255)),

            // Grayscale
            ("Gray3", rgb!(8, 8, 8)),
            ("Gray7", rgb!(18, 18, 18)),
            ("Gray11", rgb!(28, 28, 28)),
            ("Gray15", rgb!(38, 38, 38)),
            ("Gray19", rgb!(48, 48, 48)),
            ("Gray23", rgb!(58, 58, 58)),
            ("Gray27", rgb!(68, 68, 68)),
            ("Gray30", rgb!(78, 78, 78)),
            ("Gray35", rgb!(88, 88, 88)),
            ("Gray39", rgb!(98, 98, 98)),
            ("Gray42", rgb!(108, 108, 108)),
            ("Gray46", rgb!(118, 118, 118)),
            ("Gray50", rgb!(128, 128, 128)),
            ("Gray54", rgb!(138, 138, 138)),
            ("Gray58", rgb!(148, 148, 148)),
            ("Gray62", rgb!(158, 158, 158)),
            ("Gray66", rgb!(168, 168, 168)),
            ("Gray70", rgb!(178, 178, 178)),
            ("Gray74", rgb!(188, 188, 188)),
            ("Gray78", rgb!(198, 198, 198)),
            ("Gray82", rgb!(208, 208, 208)),
            ("Gray85", rgb!(218, 218, 218)),
            ("Gray89", rgb!(228, 228, 228)),
            ("Gray93", rgb!(238, 238, 238)),
        ],
    )
});

/// Access the Xterm color group.
pub fn group() -> &'static ColorGroup {
    &XTERM
}
