//! The Material Design color palette.
//!
//! Every hue family spans ten shades from 50 to 900 plus, for most families,
//! four accents from A100 to A700, with plain black and white at the end.

use std::sync::LazyLock;

use chromatch::{rgb, ColorGroup};

/// The Material Design color group.
pub static MATERIAL: LazyLock<ColorGroup> = LazyLock::new(|| {
    ColorGroup::new(
        "Material Design",
        [
            ("Red50", rgb!(255, 235, 238)),
            ("Red100", rgb!(255, 205, 210)),
            ("Red200", rgb!(239, 154, 154)),
            ("Red300", rgb!(229, 115, 115)),
            ("Red400", rgb!(239, 83, 80)),
            ("Red500", rgb!(244, 67, 54)),
            ("Red600", rgb!(229, 57, 53)),
            ("Red700", rgb!(211, 47, 47)),
            ("Red800", rgb!(198, 40, 40)),
            ("Red900", rgb!(183, 28, 28)),
            ("RedA100", rgb!(255, 138, 128)),
            ("RedA200", rgb!(255, 82, 82)),
            ("RedA400", rgb!(255, 23, 68)),
            ("RedA700", rgb!(213, 0, 0)),
            ("Pink50", rgb!(252, 228, 236)),
            ("Pink100", rgb!(248, 187, 208)),
            ("Pink200", rgb!(244, 143, 177)),
            ("Pink300", rgb!(240, 98, 146)),
            ("Pink400", rgb!(236, 64, 122)),
            ("Pink500", rgb!(233, 30, 99)),
            ("Pink600", rgb!(216, 27, 96)),
            ("Pink700", rgb!(194, 24, 91)),
            ("Pink800", rgb!(173, 20, 87)),
            ("Pink900", rgb!(136, 14, 79)),
            ("PinkA100", rgb!(255, 128, 171)),
            ("PinkA200", rgb!(255, 64, 129)),
            ("PinkA400", rgb!(245, 0, 87)),
            ("PinkA700", rgb!(197, 17, 98)),
            ("Purple50", rgb!(243, 229, 245)),
            ("Purple100", rgb!(225, 190, 231)),
            ("Purple200", rgb!(206, 147, 216)),
            ("Purple300", rgb!(186, 104, 200)),
            ("Purple400", rgb!(171, 71, 188)),
            ("Purple500", rgb!(156, 39, 176)),
            ("Purple600", rgb!(142, 36, 170)),
            ("Purple700", rgb!(123, 31, 162)),
            ("Purple800", rgb!(106, 27, 154)),
            ("Purple900", rgb!(74, 20, 140)),
            ("PurpleA100", rgb!(234, 128, 252)),
            ("PurpleA200", rgb!(224, 64, 251)),
            ("PurpleA400", rgb!(213, 0, 249)),
            ("PurpleA700", rgb!(170, 0, 255)),
            ("DeepPurple50", rgb!(237, 231, 246)),
            ("DeepPurple100", rgb!(209, 196, 233)),
            ("DeepPurple200", rgb!(179, 157, 219)),
            ("DeepPurple300", rgb!(149, 117, 205)),
            ("DeepPurple400", rgb!(126, 87, 194)),
            ("DeepPurple500", rgb!(103, 58, 183)),
            ("DeepPurple600", rgb!(94, 53, 177)),
            ("DeepPurple700", rgb!(81, 45, 168)),
            ("DeepPurple800", rgb!(69, 39, 160)),
            ("DeepPurple900", rgb!(49, 27, 146)),
            ("DeepPurpleA100", rgb!(179, 136, 255)),
            ("DeepPurpleA200", rgb!(124, 77, 255)),
            ("DeepPurpleA400", rgb!(101, 31, 255)),
            ("DeepPurpleA700", rgb!(98, 0, 234)),
            ("Indigo50", rgb!(232, 234, 246)),
            ("Indigo100", rgb!(197, 202, 233)),
            ("Indigo200", rgb!(159, 168, 218)),
            ("Indigo300", rgb!(121, 134, 203)),
            ("Indigo400", rgb!(92, 107, 192)),
            ("Indigo500", rgb!(63, 81, 181)),
            ("Indigo600", rgb!(57, 73, 171)),
            ("Indigo700", rgb!(48, 63, 159)),
            ("Indigo800", rgb!(40, 53, 147)),
            ("Indigo900", rgb!(26, 35, 126)),
            ("IndigoA100", rgb!(140, 158, 255)),
            ("IndigoA200", rgb!(83, 109, 254)),
            ("IndigoA400", rgb!(61, 90, 254)),
            ("IndigoA700", rgb!(48, 79, 254)),
            ("Blue50", rgb!(227, 242, 253)),
            ("Blue100", rgb!(187, 222, 251)),
            ("Blue200", rgb!(144, 202, 249)),
            ("Blue300", rgb!(100, 181, 246)),
            ("Blue400", rgb!(66, 165, 245)),
            ("Blue500", rgb!(33, 150, 243)),
            ("Blue600", rgb!(30, 136, 229)),
            ("Blue700", rgb!(25, 118, 210)),
            ("Blue800", rgb!(21, 101, 192)),
            ("Blue900", rgb!(13, 71, 161)),
            ("BlueA100", rgb!(130, 177, 255)),
            ("BlueA200", rgb!(68, 138, 255)),
            ("BlueA400", rgb!(41, 121, 255)),
            ("BlueA700", rgb!(41, 98, 255)),
            ("LightBlue50", rgb!(225, 245, 254)),
            ("LightBlue100", rgb!(179, 229, 252)),
            ("LightBlue200", rgb!(129, 212, 250)),
            ("LightBlue300", rgb!(79, 195, 247)),
            ("LightBlue400", rgb!(41, 182, 246)),
            ("LightBlue500", rgb!(3, 169, 244)),
            ("LightBlue600", rgb!(3, 155, 229)),
            ("LightBlue700", rgb!(2, 136, 209)),
            ("LightBlue800", rgb!(2, 119, 189)),
            ("LightBlue900", rgb!(1, 87, 155)),
            ("LightBlueA100", rgb!(128, 216, 255)),
            ("LightBlueA200", rgb!(64, 196, 255)),
            ("LightBlueA400", rgb!(0, 176, 255)),
            ("LightBlueA700", rgb!(0, 145, 234)),
            ("Cyan50", rgb!(224, 247, 250)),
            ("Cyan100", rgb!(178, 235, 242)),
            ("Cyan200", rgb!(128, 222, 234)),
            ("Cyan300", rgb!(77, 208, 225)),
            ("Cyan400", rgb!(38, 198, 218)),
            ("Cyan500", rgb!(0, 188, 212)),
            ("Cyan600", rgb!(0, 172, 193)),
            ("Cyan700", rgb!(0, 151, 167)),
            ("Cyan800", rgb!(0, 131, 143)),
            ("Cyan900", rgb!(0, 96, 100)),
            ("CyanA100", rgb!(132, 255, 255)),
            ("CyanA200", rgb!(24, 255, 255)),
            ("CyanA400", rgb!(0, 229, 255)),
            ("CyanA700", rgb!(0, 184, 212)),
            ("Teal50", rgb!(224, 242, 241)),
            ("Teal100", rgb!(178, 223, 219)),
            ("Teal200", rgb!(128, 203, 196)),
            ("Teal300", rgb!(77, 182, 172)),
            ("Teal400", rgb!(38, 166, 154)),
            ("Teal500", rgb!(0, 150, 136)),
            ("Teal600", rgb!(0, 137, 123)),
            ("Teal700", rgb!(0, 121, 107)),
            ("Teal800", rgb!(0, 105, 92)),
            ("Teal900", rgb!(0, 77, 64)),
            ("TealA100", rgb!(167, 255, 235)),
            ("TealA200", rgb!(100, 255, 218)),
            ("TealA400", rgb!(29, 233, 182)),
            ("TealA700", rgb!(0, 191, 165)),
            ("Green50", rgb!(232, 245, 233)),
            ("Green100", rgb!(200, 230, 201)),
            ("Green200", rgb!(165, 214, 167)),
            ("Green300", rgb!(129, 199, 132)),
            ("Green400", rgb!(102, 187, 106)),
            ("Green500", rgb!(76, 175, 80)),
            ("Green600", rgb!(67, 160, 71)),
            ("Green700", rgb!(56, 142, 60)),
            ("Green800", rgb!(46, 125, 50)),
            ("Green900", rgb!(27, 94, 32)),
            ("GreenA100", rgb!(185, 246, 202)),
            ("GreenA200", rgb!(105, 240, 174)),
            ("GreenA400", rgb!(0, 230, 118)),
            ("GreenA700", rgb!(0, 200, 83)),
            ("LightGreen50", rgb!(241, 248, 233)),
            ("LightGreen100", rgb!(220, 237, 200)),
            ("LightGreen200", rgb!(197, 225, 165)),
            ("LightGreen300", rgb!(174, 213, 129)),
            ("LightGreen400", rgb!(156, 204, 101)),
            ("LightGreen500", rgb!(139, 195, 74)),
            ("LightGreen600", rgb!(124, 179, 66)),
            ("LightGreen700", rgb!(104, 159, 56)),
            ("LightGreen800", rgb!(85, 139, 47)),
            ("LightGreen900", rgb!(51, 105, 30)),
            ("LightGreenA100", rgb!(204, 255, 144)),
            ("LightGreenA200", rgb!(178, 255, 89)),
            ("LightGreenA400", rgb!(118, 255, 3)),
            ("LightGreenA700", rgb!(100, 221, 23)),
            ("Lime50", rgb!(249, 251, 231)),
            ("Lime100", rgb!(240, 244, 195)),
            ("Lime200", rgb!(230, 238, 156)),
            ("Lime300", rgb!(220, 231, 117)),
            ("Lime400", rgb!(212, 225, 87)),
            ("Lime500", rgb!(205, 220, 57)),
            ("Lime600", rgb!(192, 202, 51)),
            ("Lime700", rgb!(175, 180, 43)),
            ("Lime800", rgb!(158, 157, 36)),
            ("Lime900", rgb!(130, 119, 23)),
            ("LimeA100", rgb!(244, 255, 129)),
            ("LimeA200", rgb!(238, 255, 65)),
            ("LimeA400", rgb!(198, 255, 0)),
            ("LimeA700", rgb!(174, 234, 0)),
            ("Yellow50", rgb!(255, 253, 231)),
            ("Yellow100", rgb!(255, 249, 196)),
            ("Yellow200", rgb!(255, 245, 157)),
            ("Yellow300", rgb!(255, 241, 118)),
            ("Yellow400", rgb!(255, 238, 88)),
            ("Yellow500", rgb!(255, 235, 59)),
            ("Yellow600", rgb!(253, 216, 53)),
            ("Yellow700", rgb!(251, 192, 45)),
            ("Yellow800", rgb!(249, 168, 37)),
            ("Yellow900", rgb!(245, 127, 23)),
            ("YellowA100", rgb!(255, 255, 141)),
            ("YellowA200", rgb!(255, 255, 0)),
            ("YellowA400", rgb!(255, 234, 0)),
            ("YellowA700", rgb!(255, 214, 0)),
            ("Amber50", rgb!(255, 248, 225)),
            ("Amber100", rgb!(255, 236, 179)),
            ("Amber200", rgb!(255, 224, 130)),
            ("Amber300", rgb!(255, 213, 79)),
            ("Amber400", rgb!(255, 202, 40)),
            ("Amber500", rgb!(255, 193, 7)),
            ("Amber600", rgb!(255, 179, 0)),
            ("Amber700", rgb!(255, 160, 0)),
            ("Amber800", rgb!(255, 143, 0)),
            ("Amber900", rgb!(255, 111, 0)),
            ("AmberA100", rgb!(255, 229, 127)),
            ("AmberA200", rgb!(255, 215, 64)),
            ("AmberA400", rgb!(255, 196, 0)),
            ("AmberA700", rgb!(255, 171, 0)),
            ("Orange50", rgb!(255, 243, 224)),
            ("Orange100", rgb!(255, 224, 178)),
            ("Orange200", rgb!(255, 204, 128)),
            ("Orange300", rgb!(255, 183, 77)),
            ("Orange400", rgb!(255, 167, 38)),
            ("Orange500", rgb!(255, 152, 0)),
            ("Orange600", rgb!(251, 140, 0)),
            ("Orange700", rgb!(245, 124, 0)),
            ("Orange800", rgb!(239, 108, 0)),
            ("Orange900", rgb!(230, 81, 0)),
            ("OrangeA100", rgb!(255, 209, 128)),
            ("OrangeA200", rgb!(255, 171, 64)),
            ("OrangeA400", rgb!(255, 145, 0)),
            ("OrangeA700", rgb!(255, 109, 0)),
            ("DeepOrange50", rgb!(251, 233, 231)),
            ("DeepOrange100", rgb!(255, 204, 188)),
            ("DeepOrange200", rgb!(255, 171, 145)),
            ("DeepOrange300", rgb!(255, 138, 101)),
            ("DeepOrange400", rgb!(255, 112, 67)),
            ("DeepOrange500", rgb!(255, 87, 34)),
            ("DeepOrange600", rgb!(244, 81, 30)),
            ("DeepOrange700", rgb!(230, 74, 25)),
            ("DeepOrange800", rgb!(216, 67, 21)),
            ("DeepOrange900", rgb!(191, 54, 12)),
            ("DeepOrangeA100", rgb!(255, 158, 128)),
            ("DeepOrangeA200", rgb!(255, 110, 64)),
            ("DeepOrangeA400", rgb!(255, 61, 0)),
            ("DeepOrangeA700", rgb!(221, 44, 0)),
            ("Brown50", rgb!(239, 235, 233)),
            ("Brown100", rgb!(215, 204, 200)),
            ("Brown200", rgb!(188, 170, 164)),
            ("Brown300", rgb!(161, 136, 127)),
            ("Brown400", rgb!(141, 110, 99)),
            ("Brown500", rgb!(121, 85, 72)),
            ("Brown600", rgb!(109, 76, 65)),
            ("Brown700", rgb!(93, 64, 55)),
            ("Brown800", rgb!(78, 52, 46)),
            ("Brown900", rgb!(62, 39, 35)),
            ("Grey50", rgb!(250, 250, 250)),
            ("Grey100", rgb!(245, 245, 245)),
            ("Grey200", rgb!(238, 238, 238)),
            ("Grey300", rgb!(224, 224, 224)),
            ("Grey400", rgb!(189, 189, 189)),
            ("Grey500", rgb!(158, 158, 158)),
            ("Grey600", rgb!(117, 117, 117)),
            ("Grey700", rgb!(97, 97, 97)),
            ("Grey800", rgb!(66, 66, 66)),
            ("Grey900", rgb!(33, 33, 33)),
            ("BlueGrey50", rgb!(236, 239, 241)),
            ("BlueGrey100", rgb!(207, 216, 220)),
            ("BlueGrey200", rgb!(176, 190, 197)),
            ("BlueGrey300", rgb!(144, 164, 174)),
            ("BlueGrey400", rgb!(120, 144, 156)),
            ("BlueGrey500", rgb!(96, 125, 139)),
            ("BlueGrey600", rgb!(84, 110, 122)),
            ("BlueGrey700", rgb!(69, 90, 100)),
            ("BlueGrey800", rgb!(55, 71, 79)),
            ("BlueGrey900", rgb!(38, 50, 56)),
            ("Black", rgb!(0, 0, 0)),
            ("White", rgb!(255, 255, 255)),
        ],
    )
});

/// Access the Material Design color group.
pub fn group() -> &'static ColorGroup {
    &MATERIAL
}
