//! The Wikipedia list of named colors, as recorded.
//!
//! The historical table covers the A and B range of the list.

use std::sync::LazyLock;

use chromatch::{rgb, ColorGroup};

/// The Wiki color group.
pub static WIKI: LazyLock<ColorGroup> = LazyLock::new(|| {
    ColorGroup::new(
        "Wiki",
        [
            ("AbsoluteZero", rgb!(246, 173, 198)),
            ("Acajou", rgb!(76, 47, 39)),
            ("AcidGreen", rgb!(176, 191, 26)),
            ("Aero", rgb!(124, 185, 232)),
            ("AeroBlue", rgb!(201, 255, 229)),
            ("AfricanViolet", rgb!(178, 132, 190)),
            ("AirForceBlueRAF", rgb!(93, 138, 168)),
            ("AirForceBlueUSAF", rgb!(0, 48, 143)),
            ("AirSuperiorityBlue", rgb!(114, 160, 193)),
            ("AlabamaCrimson", rgb!(175, 0, 42)),
            ("Alabaster", rgb!(242, 240, 230)),
            ("AliceBlue", rgb!(240, 248, 255)),
            ("AlienArmpit", rgb!(132, 222, 2)),
            ("AlizarinCrimson", rgb!(227, 38, 54)),
            ("AlloyOrange", rgb!(196, 98, 16)),
            ("Almond", rgb!(239, 222, 205)),
            ("Amaranth", rgb!(229, 43, 80)),
            ("AmaranthDeepPurple", rgb!(159, 43, 104)),
            ("AmaranthPink", rgb!(241, 156, 187)),
            ("AmaranthPurple", rgb!(171, 39, 79)),
            ("AmaranthRed", rgb!(211, 33, 45)),
            ("Amazon", rgb!(59, 122, 87)),
            ("Amazonite", rgb!(0, 196, 176)),
            ("Amber", rgb!(255, 191, 0)),
            ("AmberSAE", rgb!(255, 126, 0)),
            ("AmberECE", rgb!(255, 126, 0)),
            ("AmericanBlue", rgb!(59, 59, 109)),
            ("AmericanBrown", rgb!(128, 64, 64)),
            ("AmericanGold", rgb!(211, 175, 55)),
            ("AmericanGreen", rgb!(52, 179, 52)),
            ("AmericanOrange", rgb!(255, 139, 0)),
            ("AmericanPink", rgb!(255, 152, 153)),
            ("AmericanPurple", rgb!(67, 28, 83)),
            ("AmericanRed", rgb!(179, 33, 52)),
            ("AmericanRose", rgb!(255, 3, 62)),
            ("AmericanSilver", rgb!(207, 207, 207)),
            ("AmericanViolet", rgb!(85, 27, 140)),
            ("AmericanYellow", rgb!(242, 180, 0)),
            ("Amethyst", rgb!(153, 102, 204)),
            ("AndroidGreen", rgb!(164, 198, 57)),
            ("AntiFlashWhite", rgb!(242, 243, 244)),
            ("AntiqueBrass", rgb!(205, 149, 117)),
            ("AntiqueBronze", rgb!(102, 93, 30)),
            ("AntiqueFuchsia", rgb!(145, 92, 131)),
            ("AntiqueRuby", rgb!(132, 27, 45)),
            ("AntiqueWhite", rgb!(250, 235, 215)),
            ("AoEnglish", rgb!(0, 128, 0)),
            ("Apple", rgb!(102, 180, 71)),
            ("AppleGreen", rgb!(141, 182, 0)),
            ("Apricot", rgb!(251, 206, 177)),
            ("Aqua", rgb!(0, 255, 255)),
            ("Aquamarine", rgb!(127, 255, 212)),
            ("ArmyGreen", rgb!(75, 83, 32)),
            ("Arsenic", rgb!(59, 68, 75)),
            ("Artichoke", rgb!(143, 151, 121)),
            ("ArylideYellow", rgb!(233, 214, 107)),
            ("AshGray", rgb!(178, 190, 181)),
            ("Asparagus", rgb!(135, 169, 107)),
            ("AteneoBlue", rgb!(0, 58, 108)),
            ("AtomicTangerine", rgb!(255, 153, 102)),
            ("Auburn", rgb!(165, 42, 42)),
            ("Aureolin", rgb!(253, 238, 0)),
            ("AuroMetalSaurus", rgb!(110, 127, 128)),
            ("Avocado", rgb!(86, 130, 3)),
            ("Awesome", rgb!(255, 32, 82)),
            ("Axolotl", rgb!(99, 119, 91)),
            ("AztecGold", rgb!(195, 153, 83)),
            ("Azure", rgb!(0, 127, 255)),
            ("AzureWebColor", rgb!(240, 255, 255)),
            ("AzureMist", rgb!(240, 255, 255)),
            ("AzureishWhite", rgb!(219, 233, 244)),
            ("BabyBlue", rgb!(137, 207, 240)),
            ("BabyBlueEyes", rgb!(161, 202, 241)),
            ("BabyPink", rgb!(244, 194, 194)),
            ("BabyPowder", rgb!(254, 254, 250)),
            ("BakerMillerPink", rgb!(255, 145, 175)),
            ("BallBlue", rgb!(33, 171, 205)),
            ("BananaMania", rgb!(250, 231, 181)),
            ("BananaYellow", rgb!(255, 225, 53)),
            ("BangladeshGreen", rgb!(0, 106, 78)),
            ("BarbiePink", rgb!(224, 33, 138)),
            ("BarnRed", rgb!(124, 10, 2)),
            ("BatteryChargedBlue", rgb!(29, 172, 214)),
            ("BattleshipGrey", rgb!(132, 132, 130)),
            ("Bazaar", rgb!(152, 119, 123)),
            ("BeauBlue", rgb!(188, 212, 230)),
            ("Beaver", rgb!(159, 129, 112)),
            ("Begonia", rgb!(250, 110, 121)),
            ("Beige", rgb!(245, 245, 220)),
            ("BdazzledBlue", rgb!(46, 88, 148)),
            ("BigDipORuby", rgb!(156, 37, 66)),
            ("BigFootFeet", rgb!(232, 142, 90)),
            ("Bisque", rgb!(255, 228, 196)),
            ("Bistre", rgb!(61, 43, 31)),
            ("BistreBrown", rgb!(150, 113, 23)),
            ("BitterLemon", rgb!(202, 224, 13)),
            ("BitterLime", rgb!(191, 255, 0)),
            ("Bittersweet", rgb!(254, 111, 94)),
            ("BittersweetShimmer", rgb!(191, 79, 81)),
            ("Black", rgb!(0, 0, 0)),
            ("BlackBean", rgb!(61, 12, 2)),
            ("BlackChocolate", rgb!(27, 24, 17)),
            ("BlackCoffee", rgb!(59, 47, 47)),
            ("BlackCoral", rgb!(84, 98, 111)),
            ("BlackLeatherJacket", rgb!(37, 53, 41)),
            ("BlackOlive", rgb!(59, 60, 54)),
            ("Blackberry", rgb!(143, 89, 115)),
            ("BlackShadows", rgb!(191, 175, 178)),
            ("BlanchedAlmond", rgb!(255, 235, 205)),
            ("BlastOffBronze", rgb!(165, 113, 100)),
            ("BleuDeFrance", rgb!(49, 140, 231)),
            ("BlizzardBlue", rgb!(172, 229, 238)),
            ("Blond", rgb!(250, 240, 190)),
            ("BloodOrange", rgb!(209, 0, 28)),
            ("BloodRed", rgb!(102, 0, 0)),
            ("Blue", rgb!(0, 0, 255)),
            ("BlueCrayola", rgb!(31, 117, 254)),
            ("BlueMunsell", rgb!(0, 147, 175)),
            ("BlueNCS", rgb!(0, 135, 189)),
            ("BluePantone", rgb!(0, 24, 168)),
            ("BluePigment", rgb!(51, 51, 153)),
            ("BlueRYB", rgb!(2, 71, 254)),
            ("BlueBell", rgb!(162, 162, 208)),
            ("BlueBolt", rgb!(0, 185, 251)),
            ("BlueGray", rgb!(102, 153, 204)),
            ("BlueGreen", rgb!(13, 152, 186)),
            ("BlueJeans", rgb!(93, 173, 236)),
            ("BlueLagoon", rgb!(172, 229, 238)),
            ("BlueMagentaViolet", rgb!(85, 53, 146)),
            ("BlueSapphire", rgb!(18, 97, 128)),
            ("BlueViolet", rgb!(138, 43, 226)),
            ("BlueYonder", rgb!(80, 114, 167)),
            ("Blueberry", rgb!(79, 134, 247)),
            ("Bluebonnet", rgb!(28, 28, 240)),
            ("Blush", rgb!(222, 93, 131)),
            ("Bole", rgb!(121, 68, 59)),
            ("BondiBlue", rgb!(0, 149, 182)),
            ("Bone", rgb!(227, 218, 201)),
            ("BoogerBuster", rgb!(221, 226, 106)),
            ("BostonUniversityRed", rgb!(204, 0, 0)),
            ("BottleGreen", rgb!(0, 106, 78)),
            ("Boysenberry", rgb!(135, 50, 96)),
            ("BrandeisBlue", rgb!(0, 112, 255)),
            ("Brass", rgb!(181, 166, 66)),
            ("BrickRed", rgb!(203, 65, 84)),
            ("BrightCerulean", rgb!(29, 172, 214)),
            ("BrightGray", rgb!(235, 236, 240)),
            ("BrightGreen", rgb!(102, 255, 0)),
            ("BrightLavender", rgb!(191, 148, 228)),
            ("BrightLilac", rgb!(216, 145, 239)),
            ("BrightMaroon", rgb!(195, 33, 72)),
            ("BrightNavyBlue", rgb!(25, 116, 210)),
            ("BrightPink", rgb!(255, 0, 127)),
            ("BrightTurquoise", rgb!(8, 232, 222)),
            ("BrightUbe", rgb!(209, 159, 232)),
            ("BrightYellowCrayola", rgb!(255, 170, 29)),
            ("BrilliantAzure", rgb!(51, 153, 255)),
            ("BrilliantLavender", rgb!(244, 187, 255)),
            ("BrilliantRose", rgb!(244, 187, 255)),
            ("BrinkPink", rgb!(251, 96, 127)),
            ("BritishRacingGreen", rgb!(0, 66, 37)),
            ("Bronze", rgb!(136, 84, 11)),
            ("Bronze2", rgb!(205, 127, 50)),
            ("BronzeMetallic", rgb!(176, 141, 87)),
            ("BronzeYellow", rgb!(115, 112, 0)),
            ("Brown", rgb!(153, 51, 0)),
            ("BrownCrayola", rgb!(175, 89, 62)),
            ("BrownTraditional", rgb!(150, 75, 0)),
            ("BrownWeb", rgb!(165, 42, 42)),
            ("BrownNose", rgb!(107, 68, 35)),
            ("BrownSugar", rgb!(175, 110, 77)),
            ("BrownChocolate", rgb!(95, 25, 51)),
            ("BrownCoffee", rgb!(74, 44, 42)),
            ("BrownYellow", rgb!(204, 153, 102)),
            ("BrunswickGreen", rgb!(204, 153, 102)),
            ("BubbleGum", rgb!(255, 193, 204)),
            ("Bubbles", rgb!(231, 254, 255)),
            ("BudGreen", rgb!(123, 182, 97)),
            ("Buff", rgb!(240, 220, 130)),
            ("BulgarianRose", rgb!(72, 6, 7)),
            ("Burgundy", rgb!(128, 0, 32)),
            ("Burlywood", rgb!(222, 184, 135)),
            ("BurnishedBrown", rgb!(161, 122, 116)),
            ("BurntOrange", rgb!(204, 85, 0)),
            ("BurntSienna", rgb!(233, 116, 81)),
            ("BurntUmber", rgb!(138, 51, 36)),
            ("ButtonBlue", rgb!(36, 160, 237)),
            ("Byzantine", rgb!(189, 51, 164)),
            ("Byzantium", rgb!(112, 41, 99)),
        ],
    )
});

/// Access the Wiki color group.
pub fn group() -> &'static ColorGroup {
    &WIKI
}
