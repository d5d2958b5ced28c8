//! # Chromatch Palettes
//!
//! This crate materializes the well-known color palettes as
//! [`ColorGroup`](chromatch::ColorGroup) statics for use with the
//! [`chromatch`] color model. Each module covers one palette family:
//!
//!   * [`ansi`] — the 16 base terminal colors in seven vendor renditions;
//!   * [`html`] — the 16 basic colors of HTML 4.01;
//!   * [`web`] — the extended web color keywords;
//!   * [`material`] — the Material Design palette;
//!   * [`crayola`] — the Crayola crayon colors;
//!   * [`wiki`] — the Wikipedia list of named colors;
//!   * [`xterm`] — the 256-entry indexed terminal palette.
//!
//! Every module exposes one lazily initialized static plus a `group()`
//! accessor. The groups preserve the declaration order of the historical
//! tables, including synonym entries that map several names to one value,
//! so member positions are stable; for [`xterm`], a member's position is
//! its terminal color code.
//!
//! The typical use is translating a color named in one scheme to the
//! closest member of another:
//!
//! ```
//! use chromatch_palettes::{web, xterm};
//!
//! let alice_blue = web::group().by_name("AliceBlue")?.color();
//! let code = xterm::group().closest(alice_blue)?.index();
//! assert_eq!(code, 15);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod ansi;
pub mod crayola;
pub mod html;
pub mod material;
pub mod web;
pub mod wiki;
pub mod xterm;

// ====================================================================================================================

#[cfg(test)]
mod test {
    use chromatch::rgb;

    use super::{ansi, crayola, html, material, web, wiki, xterm};

    #[test]
    fn test_group_sizes() {
        assert_eq!(ansi::group().len(), 108);
        assert_eq!(html::group().len(), 16);
        assert_eq!(web::group().len(), 141);
        assert_eq!(material::group().len(), 256);
        assert_eq!(crayola::group().len(), 471);
        assert_eq!(wiki::group().len(), 189);
        assert_eq!(xterm::group().len(), 256);
    }

    #[test]
    fn test_html_members() -> Result<(), Box<dyn std::error::Error>> {
        let group = html::group();
        assert_eq!(group.name(), "HTML");
        assert_eq!(group.by_name("Teal")?.color(), &rgb!(0, 128, 128));
        assert_eq!(group.by_name("White")?.index(), 0);
        assert_eq!(group.by_name("Purple")?.index(), 15);
        assert_eq!(group.by_value(&rgb!(0, 255, 0))?.name(), "Lime");
        Ok(())
    }

    #[test]
    fn test_ansi_vendor_variants() -> Result<(), Box<dyn std::error::Error>> {
        let group = ansi::group();
        assert_eq!(group.by_name("VgaBlack")?.index(), 0);
        assert_eq!(group.by_name("VgaYellow")?.color(), &rgb!(170, 85, 0));
        assert_eq!(group.by_name("CmdWhite")?.color(), &rgb!(192, 192, 192));
        assert_eq!(group.by_name("PuttyRed")?.color(), &rgb!(187, 0, 0));
        assert_eq!(group.by_name("MircYellow")?.color(), &rgb!(252, 127, 0));
        assert_eq!(
            group.by_name("TerminalAppBrightCyan")?.color(),
            &rgb!(20, 240, 240)
        );
        assert_eq!(group.by_name("XtermBlue")?.color(), &rgb!(0, 0, 238));
        // The four bright X entries without recorded values are omitted.
        assert_eq!(group.by_name("XBrightGreen")?.color(), &rgb!(144, 238, 144));
        assert!(group.by_name("XBrightBlack").is_err());
        assert!(group.by_name("XBrightWhite").is_err());
        assert_eq!(group.reverse_iter().next().map(|m| m.name()), Some("XBrightCyan"));
        Ok(())
    }

    #[test]
    fn test_xterm_positions_are_color_codes() -> Result<(), Box<dyn std::error::Error>> {
        let group = xterm::group();
        assert_eq!(group.by_name("Black")?.index(), 0);
        assert_eq!(group.by_name("Silver")?.index(), 7);
        // The start of the color cube.
        assert_eq!(group.by_name("Gray0")?.index(), 16);
        assert_eq!(group.by_name("NavyBlue")?.color(), &rgb!(0, 0, 95));
        // The grayscale ramp.
        assert_eq!(group.by_name("Gray3")?.index(), 232);
        assert_eq!(group.by_name("Gray93")?.index(), 255);
        assert_eq!(group.by_name("Gray93")?.color(), &rgb!(238, 238, 238));
        Ok(())
    }

    #[test]
    fn test_xterm_repeated_names() -> Result<(), Box<dyn std::error::Error>> {
        let group = xterm::group();
        // "Blue3" names both codes 19 and 20; lookup keeps the lower code.
        assert_eq!(group.by_name("Blue3")?.index(), 19);
        // Pure red is both base color 9 and cube entry 196.
        assert_eq!(group.by_value(&rgb!(255, 0, 0))?.index(), 9);
        let reds: Vec<usize> = group
            .iter()
            .filter(|member| member.color() == &rgb!(255, 0, 0))
            .map(|member| member.index())
            .collect();
        assert_eq!(reds, [9, 196]);
        Ok(())
    }

    #[test]
    fn test_material_members() -> Result<(), Box<dyn std::error::Error>> {
        let group = material::group();
        assert_eq!(group.by_name("Red50")?.index(), 0);
        assert_eq!(group.by_name("Red500")?.color(), &rgb!(244, 67, 54));
        assert_eq!(group.by_name("RedA700")?.color(), &rgb!(213, 0, 0));
        assert_eq!(group.by_name("BlueGrey900")?.color(), &rgb!(38, 50, 56));
        assert_eq!(group.by_name("White")?.index(), 255);
        Ok(())
    }

    #[test]
    fn test_crayola_synonyms() -> Result<(), Box<dyn std::error::Error>> {
        let group = crayola::group();
        // Maroon is the renamed Dark Red crayon; both entries survive and
        // value lookup resolves to the earlier name.
        assert_eq!(group.by_name("DarkRed")?.color(), &rgb!(195, 33, 72));
        assert_eq!(group.by_name("Maroon")?.color(), &rgb!(195, 33, 72));
        assert_eq!(group.by_value(&rgb!(195, 33, 72))?.name(), "DarkRed");
        Ok(())
    }

    #[test]
    fn test_wiki_members() -> Result<(), Box<dyn std::error::Error>> {
        let group = wiki::group();
        assert_eq!(group.by_name("AbsoluteZero")?.index(), 0);
        assert_eq!(group.by_name("AcidGreen")?.color(), &rgb!(176, 191, 26));
        Ok(())
    }

    #[test]
    fn test_cross_palette_matching() -> Result<(), Box<dyn std::error::Error>> {
        let xterm = xterm::group();

        // An exact hit: HTML white is also terminal color 15.
        let white = html::group().by_name("White")?.color();
        assert_eq!(xterm.closest(white)?.index(), 15);

        // Near misses scan the whole table.
        let violet = web::group().by_name("MediumVioletRed")?.color();
        assert_eq!(xterm.closest(violet)?.name(), "DeepPink3");
        assert_eq!(xterm.closest(violet)?.index(), 162);

        let tomato = rgb!(255, 99, 71);
        assert_eq!(xterm.closest(&tomato)?.name(), "IndianRed1");
        Ok(())
    }
}
