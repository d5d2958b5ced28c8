//! The Crayola crayon colors.
//!
//! The colors found in regular Crayola assortments since 1903, followed by
//! the specialty assortments. Renamed crayons appear under both their names
//! as synonym entries with identical values.

use std::sync::LazyLock;

use chromatch::{rgb, ColorGroup};

/// The Crayola color group.
pub static CRAYOLA: LazyLock<ColorGroup> = LazyLock::new(|| {
    ColorGroup::new(
        "Crayola",
        [
            // Standard Colors
            ("Red", rgb!(237, 10, 63)),
            ("DarkRed", rgb!(195, 33, 72)),
            ("Maroon", rgb!(195, 33, 72)),
            ("TorchRed", rgb!(253, 14, 53)),
            ("Scarlet", rgb!(253, 14, 53)),
            ("BrickRed", rgb!(198, 45, 66)),
            ("EnglishVermilion", rgb!(204, 71, 75)),
            ("EnglishVermillion", rgb!(204, 71, 75)),
            ("MadderLake", rgb!(204, 51, 54)),
            ("PermanentGeraniumLake", rgb!(225, 44, 44)),
            ("MaximumRed", rgb!(217, 33, 33)),
            ("IndianRed", rgb!(185, 78, 72)),
            ("Chestnut", rgb!(185, 78, 72)),
            ("OrangeRed", rgb!(255, 63, 52)),
            ("SunsetOrange", rgb!(254, 76, 64)),
            ("Bittersweet", rgb!(254, 111, 94)),
            ("DarkVenetianRed", rgb!(179, 59, 36)),
            ("VenetianRed", rgb!(204, 85, 61)),
            ("LightVenetianRed", rgb!(230, 115, 92)),
            ("VividTangerine", rgb!(255, 153, 128)),
            ("MiddleRed", rgb!(229, 144, 115)),
            ("BurntOrange", rgb!(255, 112, 52)),
            ("RedOrange", rgb!(255, 104, 31)),
            ("Orange", rgb!(255, 136, 100)),
            ("MacaroniAndCheese", rgb!(255, 185, 123)),
            ("MiddleYellowRed", rgb!(236, 177, 118)),
            ("MediumOrange", rgb!(236, 177, 118)),
            ("MangoTango", rgb!(231, 114, 0)),
            ("YellowOrange", rgb!(255, 174, 66)),
            ("MaximumYellowRed", rgb!(242, 186, 73)),
            ("BananaMania", rgb!(251, 231, 178)),
            ("Maize", rgb!(242, 198, 73)),
            ("GoldOchre", rgb!(242, 198, 73)),
            ("GoldenOchre", rgb!(242, 198, 73)),
            ("OrangeYellow", rgb!(248, 213, 104)),
            ("Goldenrod", rgb!(252, 214, 103)),
            ("MediumChromeYellow", rgb!(252, 214, 103)),
            ("MediumYellow", rgb!(252, 214, 103)),
            ("Dandelion", rgb!(254, 216, 93)),
            ("Yellow", rgb!(252, 232, 131)),
            ("GreenYellow", rgb!(241, 231, 136)),
            ("MiddleYellow", rgb!(255, 235, 0)),
            ("OliveGreen", rgb!(181, 179, 92)),
            ("SpringGreen", rgb!(236, 235, 189)),
            ("MaximumYellow", rgb!(250, 250, 55)),
            ("Canary", rgb!(255, 255, 153)),
            ("LemonYellow", rgb!(255, 255, 159)),
            ("LightChromeYellow", rgb!(255, 255, 159)),
            ("LightYellow", rgb!(255, 255, 159)),
            ("MaximumGreenYellow", rgb!(217, 230, 80)),
            ("MiddleGreenYellow", rgb!(172, 191, 96)),
            ("Inchworm", rgb!(175, 227, 19)),
            ("LightChromeGreen", rgb!(190, 230, 75)),
            ("LightGreen", rgb!(190, 230, 75)),
            ("YellowGreen", rgb!(197, 225, 122)),
            ("MaximumGreen", rgb!(94, 140, 49)),
            ("Asparagus", rgb!(123, 160, 91)),
            ("GrannySmithApple", rgb!(157, 224, 147)),
            ("Fern", rgb!(99, 183, 108)),
            ("MiddleGreen", rgb!(77, 140, 87)),
            ("Green", rgb!(58, 166, 85)),
            ("MediumChromeGreen", rgb!(108, 166, 124)),
            ("MediumGreen", rgb!(108, 166, 124)),
            ("ForestGreen", rgb!(95, 167, 119)),
            ("DarkGreen", rgb!(95, 167, 119)),
            ("SeaGreen", rgb!(147, 223, 184)),
            ("LightGreen", rgb!(147, 223, 184)),
            ("Shamrock", rgb!(51, 204, 153)),
            ("MountainMeadow", rgb!(26, 179, 133)),
            ("JungleGreen", rgb!(41, 171, 135)),
            ("CaribbeanGreen", rgb!(0, 204, 153)),
            ("TropicalRainForest", rgb!(0, 117, 94)),
            ("MiddleBlueGreen", rgb!(141, 217, 204)),
            ("PineGreen", rgb!(1, 120, 111)),
            ("DarkChromeGreen", rgb!(1, 120, 111)),
            ("DarkGreen2", rgb!(1, 120, 111)),
            ("MaximumBlueGreen", rgb!(48, 191, 191)),
            ("RobinsEggBlue", rgb!(0, 204, 204)),
            ("TealBlue", rgb!(0, 128, 128)),
            ("LightBlue", rgb!(143, 216, 216)),
            ("Aquamarine", rgb!(149, 224, 232)),
            ("LightTurquoiseBlue", rgb!(149, 224, 232)),
            ("TurquoiseBlue", rgb!(108, 218, 231)),
            ("OuterSpace", rgb!(45, 56, 58)),
            ("SkyBlue", rgb!(118, 215, 234)),
            ("MiddleBlue", rgb!(126, 212, 230)),
            ("BlueGreen", rgb!(0, 149, 183)),
            ("MiddleBlueGreen", rgb!(0, 149, 183)),
            ("PacificBlue", rgb!(0, 157, 196)),
            ("Cerulean", rgb!(2, 164, 211)),
            ("MaximumBlue", rgb!(71, 171, 204)),
            ("BlueGreen2", rgb!(71, 171, 204)),
            ("Blue", rgb!(46, 180, 230)),
            ("Blue1", rgb!(46, 180, 230)),
            ("BlueI", rgb!(46, 180, 230)),
            ("CelestialBlue", rgb!(46, 180, 230)),
            ("AzureBlue", rgb!(46, 180, 230)),
            ("CeruleanBlue", rgb!(51, 154, 204)),
            ("Cornflower", rgb!(147, 204, 234)),
            ("GreenBlue", rgb!(40, 135, 200)),
            ("MidnightBlue", rgb!(0, 70, 140)),
            ("PrussianBlue", rgb!(0, 70, 140)),
            ("NavyBlue", rgb!(0, 102, 204)),
            ("Denim", rgb!(21, 96, 189)),
            ("Blue3", rgb!(0, 102, 255)),
            ("BlueIII", rgb!(0, 102, 255)),
            ("CadetBlue", rgb!(169, 178, 195)),
            ("Periwinkle", rgb!(195, 205, 230)),
            ("Blue2", rgb!(69, 112, 230)),
            ("BlueII", rgb!(69, 112, 230)),
            ("WildBlueYonder", rgb!(122, 137, 184)),
            ("Indigo", rgb!(79, 105, 198)),
            ("Manatee", rgb!(141, 144, 161)),
            ("CobaltBlue", rgb!(140, 144, 200)),
            ("CelestialBlue2", rgb!(112, 112, 204)),
            ("BlueBell", rgb!(153, 153, 204)),
            ("MaximumBluePurple", rgb!(172, 172, 230)),
            ("VioletBlue", rgb!(118, 110, 200)),
            ("BlueViolet", rgb!(118, 110, 200)),
            ("BlueViolet2", rgb!(100, 86, 183)),
            ("Violet", rgb!(100, 86, 183)),
            ("UltramarineBlue", rgb!(63, 38, 191)),
            ("MiddleBluePurple", rgb!(139, 114, 190)),
            ("PurpleHeart", rgb!(101, 45, 193)),
            ("RoyalPurple", rgb!(107, 63, 160)),
            ("Violet2", rgb!(131, 89, 163)),
            ("VioletII", rgb!(131, 89, 163)),
            ("VioletPurple", rgb!(131, 89, 163)),
            ("MediumViolet", rgb!(143, 71, 179)),
            ("Wisteria", rgb!(201, 160, 220)),
            ("Lavender", rgb!(191, 143, 204)),
            ("LavenderI", rgb!(191, 143, 204)),
            ("VividViolet", rgb!(128, 55, 144)),
            ("MaximumPurple", rgb!(115, 51, 128)),
            ("PurpleMountainsMajesty", rgb!(214, 174, 221)),
            ("PurpleMountainMajesty", rgb!(214, 174, 221)),
            ("Fuchsia", rgb!(193, 84, 193)),
            ("PinkFlamingo", rgb!(252, 116, 253)),
            ("Violet", rgb!(115, 46, 108)),
            ("VioletI", rgb!(115, 46, 108)),
            ("Purple", rgb!(115, 46, 108)),
            ("BrilliantRose", rgb!(230, 103, 206)),
            ("Orchid", rgb!(226, 156, 210)),
            ("MediumRedViolet", rgb!(226, 156, 210)),
            ("Plum", rgb!(142, 49, 121)),
            ("MediumRose", rgb!(217, 108, 190)),
            ("Thistle", rgb!(235, 176, 215)),
            ("LightMagenta", rgb!(235, 176, 215)),
            ("Mulberry", rgb!(200, 80, 155)),
            ("RedViolet", rgb!(187, 51, 133)),
            ("MiddlePurple", rgb!(217, 130, 181)),
            ("MaximumRedPurple", rgb!(166, 58, 121)),
            ("JazzberryJam", rgb!(165, 11, 94)),
            ("Eggplant", rgb!(97, 64, 81)),
            ("Magenta", rgb!(246, 83, 166)),
            ("PermanentMagenta", rgb!(246, 83, 166)),
            ("Cerise", rgb!(218, 50, 135)),
            ("WildStrawberry", rgb!(255, 51, 153)),
            ("Lavender2", rgb!(251, 174, 210)),
            ("LavenderII", rgb!(251, 174, 210)),
            ("CottonCandy", rgb!(255, 183, 213)),
            ("CarnationPink", rgb!(255, 166, 201)),
            ("RosePink", rgb!(255, 166, 201)),
            ("Pink", rgb!(255, 166, 201)),
            ("VioletRed", rgb!(247, 70, 138)),
            ("Razzmatazz", rgb!(227, 11, 92)),
            ("PigPink", rgb!(253, 215, 228)),
            ("PiggyPink", rgb!(253, 215, 228)),
            ("Carmine", rgb!(230, 46, 107)),
            ("CarmineRed", rgb!(230, 46, 107)),
            ("Blush", rgb!(219, 80, 121)),
            ("Cranberry", rgb!(219, 80, 121)),
            ("TickleMePink", rgb!(252, 128, 165)),
            ("Mauvelous", rgb!(240, 145, 169)),
            ("Salmon", rgb!(255, 145, 164)),
            ("MiddleRedPurple", rgb!(165, 83, 83)),
            ("Mahogany", rgb!(202, 52, 53)),
            ("Melon", rgb!(254, 186, 173)),
            ("PinkSherbert", rgb!(247, 163, 142)),
            ("BurntSienna", rgb!(233, 116, 81)),
            ("Brown", rgb!(175, 89, 62)),
            ("Sepia", rgb!(158, 91, 64)),
            ("FuzzyWuzzy", rgb!(135, 66, 31)),
            ("FuzzyWuzzyBrown", rgb!(135, 66, 31)),
            ("Beaver", rgb!(146, 111, 91)),
            ("Tumbleweed", rgb!(222, 166, 129)),
            ("RawSienna", rgb!(210, 125, 70)),
            ("VanDykeBrown", rgb!(102, 66, 40)),
            ("Brown2", rgb!(102, 66, 40)),
            ("Tan", rgb!(217, 154, 108)),
            ("DesertSand", rgb!(237, 201, 175)),
            ("Peach", rgb!(255, 203, 164)),
            ("FleshTint", rgb!(255, 203, 164)),
            ("Flesh", rgb!(255, 203, 164)),
            ("PinkBeige", rgb!(255, 203, 164)),
            ("BurntUmber", rgb!(128, 85, 51)),
            ("Apricot", rgb!(253, 213, 177)),
            ("Almond", rgb!(238, 217, 196)),
            ("RawUmber", rgb!(102, 82, 51)),
            ("Shadow", rgb!(131, 112, 80)),
            ("RawSienna", rgb!(230, 188, 92)),
            ("RawSiennaI", rgb!(230, 188, 92)),
            ("Timberwolf", rgb!(217, 214, 207)),
            ("Gold", rgb!(146, 146, 110)),
            ("GoldI", rgb!(146, 146, 110)),
            ("GoldII", rgb!(230, 190, 138)),
            ("Silver", rgb!(201, 192, 187)),
            ("Copper", rgb!(218, 138, 103)),
            ("AntiqueBrass", rgb!(200, 138, 101)),
            ("Black", rgb!(0, 0, 0)),
            ("CharcoalGray", rgb!(115, 106, 98)),
            ("Gray", rgb!(139, 134, 128)),
            ("Grey", rgb!(139, 134, 128)),
            ("MiddleGray", rgb!(139, 134, 128)),
            ("MiddleGrey", rgb!(139, 134, 128)),
            ("NeutralGray", rgb!(139, 134, 128)),
            ("NeutralGrey", rgb!(139, 134, 128)),
            ("BlueGray", rgb!(200, 200, 205)),
            ("White", rgb!(255, 255, 255)),

            // Fluorescent
            ("RadicalRed", rgb!(255, 53, 94)),
            ("WildWatermelon", rgb!(253, 91, 120)),
            ("UltraRed", rgb!(253, 91, 120)),
            ("OutrageousOrange", rgb!(255, 96, 55)),
            ("UltraOrange", rgb!(255, 96, 55)),
            ("AtomicTangerine", rgb!(255, 153, 102)),
            ("UltraYellow", rgb!(255, 153, 102)),
            ("NeonCarrot", rgb!(255, 153, 51)),
            ("Sunglow", rgb!(255, 204, 51)),
            ("LaserLemon", rgb!(255, 255, 102)),
            ("Chartreuse", rgb!(255, 255, 102)),
            ("UnmellowYellow", rgb!(255, 255, 102)),
            ("ElectricLime", rgb!(204, 255, 0)),
            ("ScreaminGreen", rgb!(102, 255, 102)),
            ("UltraGreen", rgb!(102, 255, 102)),
            ("MagicMint", rgb!(170, 240, 209)),
            ("BlizzardBlue", rgb!(80, 191, 230)),
            ("UltraBlue", rgb!(80, 191, 230)),
            ("ShockingPink", rgb!(255, 110, 255)),
            ("UltraPink", rgb!(255, 110, 255)),
            ("RazzleDazzleRose", rgb!(238, 52, 210)),
            ("HotMagenta", rgb!(238, 52, 210)),
            ("HotMagenta2", rgb!(255, 0, 204)),
            ("PurplePizzazz", rgb!(255, 0, 204)),

            // Silver Swirls
            ("AztecGold", rgb!(195, 153, 83)),
            ("BurnishedBrown", rgb!(161, 122, 116)),
            ("CeruleanFrost", rgb!(109, 155, 195)),
            ("CinnamonSatin", rgb!(205, 96, 126)),
            ("CopperPenny", rgb!(173, 111, 105)),
            ("CosmicCobalt", rgb!(46, 45, 136)),
            ("GlossyGrape", rgb!(171, 146, 179)),
            ("GraniteGray", rgb!(103, 103, 103)),
            ("GreenSheen", rgb!(110, 174, 161)),
            ("LilacLuster", rgb!(174, 152, 170)),
            ("MistyMoss", rgb!(187, 180, 119)),
            ("MysticMaroon", rgb!(173, 67, 121)),
            ("PearlyPurple", rgb!(183, 104, 162)),
            ("PewterBlue", rgb!(139, 168, 183)),
            ("PolishedPine", rgb!(93, 164, 147)),
            ("QuickSilver", rgb!(166, 166, 166)),
            ("RoseDust", rgb!(158, 94, 111)),
            ("RustyRed", rgb!(218, 44, 67)),
            ("ShadowBlue", rgb!(119, 139, 165)),
            ("ShinyShamrock", rgb!(95, 167, 120)),
            ("SteelTeal", rgb!(95, 138, 139)),
            ("SugarPlum", rgb!(145, 78, 117)),
            ("TwilightLavender", rgb!(138, 73, 107)),
            ("WintergreenDream", rgb!(86, 136, 125)),

            // Magic Scent
            ("BabyPowder", rgb!(255, 255, 255)),
            ("Banana", rgb!(254, 216, 93)),
            ("Blueberry", rgb!(69, 112, 230)),
            ("BubbleGum", rgb!(252, 128, 165)),
            ("CedarChest", rgb!(202, 52, 53)),
            ("Cherry", rgb!(195, 33, 72)),
            ("Chocolate", rgb!(175, 89, 62)),
            ("Coconut", rgb!(255, 255, 255)),
            ("Daffodil", rgb!(251, 232, 112)),
            ("Dirt", rgb!(158, 91, 64)),
            ("Eucalyptus", rgb!(41, 171, 135)),
            ("FreshAir", rgb!(118, 215, 234)),
            ("Grape", rgb!(131, 89, 163)),
            ("JellyBean", rgb!(255, 136, 51)),
            ("LeatherJacket", rgb!(0, 0, 0)),
            ("Lemon", rgb!(251, 232, 112)),
            ("Licorice", rgb!(0, 0, 0)),
            ("Lilac", rgb!(201, 160, 220)),
            ("Lime", rgb!(197, 225, 122)),
            ("Lumber", rgb!(253, 213, 177)),
            ("NewCar", rgb!(0, 102, 255)),
            ("Pine", rgb!(1, 120, 111)),
            ("Rose", rgb!(237, 10, 63)),
            ("Shampoo", rgb!(255, 166, 201)),
            ("Smoke", rgb!(139, 134, 128)),
            ("Soap", rgb!(195, 205, 230)),
            ("Strawberry", rgb!(255, 51, 153)),
            ("Tulip", rgb!(255, 136, 51)),

            // Gem Tones
            ("Amethyst", rgb!(100, 96, 154)),
            ("Citrine", rgb!(147, 55, 9)),
            ("Emerald", rgb!(20, 169, 137)),
            ("Jade", rgb!(70, 154, 132)),
            ("Jasper", rgb!(208, 83, 64)),
            ("LapisLazuli", rgb!(67, 108, 185)),
            ("Malachite", rgb!(70, 148, 150)),
            ("Moonstone", rgb!(58, 168, 193)),
            ("Onyx", rgb!(53, 56, 57)),
            ("Peridot", rgb!(171, 173, 72)),
            ("PinkPearl", rgb!(176, 112, 128)),
            ("RoseQuartz", rgb!(189, 85, 156)),
            ("Ruby", rgb!(170, 64, 105)),
            ("Sapphire", rgb!(45, 93, 161)),
            ("SmokeyTopaz", rgb!(131, 42, 13)),
            ("TigersEye", rgb!(181, 105, 23)),

            // Color 'n Smell
            ("BabysPowder", rgb!(255, 255, 255)),
            ("BaseballMitt", rgb!(233, 116, 81)),
            ("BubbleBath", rgb!(252, 128, 165)),
            ("Earthworm", rgb!(198, 45, 66)),
            ("FlowerShop", rgb!(201, 160, 220)),
            ("FreshAir", rgb!(118, 215, 234)),
            ("GrandmasPerfume", rgb!(255, 136, 51)),
            ("KoalaTree", rgb!(41, 171, 135)),
            ("NewSneakers", rgb!(0, 0, 0)),
            ("PetShop", rgb!(175, 89, 62)),
            ("PineTree", rgb!(1, 120, 111)),
            ("SawDust", rgb!(255, 203, 164)),
            ("SharpeningPencils", rgb!(252, 214, 103)),
            ("SmellTheRoses", rgb!(237, 10, 63)),
            ("SunnyDay", rgb!(251, 232, 112)),
            ("WashTheDog", rgb!(254, 216, 93)),

            // Color Mix-Up
            ("BabysBlanket", rgb!(255, 138, 186)),
            ("BabysBlanket1", rgb!(31, 117, 254)),
            ("BabysBlanket2", rgb!(28, 172, 120)),
            ("BlazingBonfire", rgb!(252, 232, 131)),
            ("BlazingBonfire1", rgb!(255, 117, 56)),
            ("BlazingBonfire2", rgb!(238, 32, 77)),
            ("CoolAndCrazy", rgb!(255, 255, 255)),
            ("CoolAndCrazy1", rgb!(120, 81, 169)),
            ("CoolAndCrazy2", rgb!(13, 152, 186)),
            ("LemonLimeZing", rgb!(252, 232, 131)),
            ("LemonLimeZing1", rgb!(28, 172, 120)),
            ("LemonLimeZing2", rgb!(31, 117, 254)),
            ("MagentaMixUp", rgb!(252, 180, 213)),
            ("MagentaMixUp1", rgb!(31, 117, 254)),
            ("MagentaMixUp2", rgb!(200, 56, 90)),
            ("MixedVeggies", rgb!(182, 182, 80)),
            ("MixedVeggies1", rgb!(189, 11, 76)),
            ("MixedVeggies2", rgb!(242, 221, 135)),
            ("OffRoad", rgb!(222, 170, 136)),
            ("OffRoad1", rgb!(43, 108, 196)),
            ("OffRoad2", rgb!(200, 56, 90)),
            ("PeachesNCream", rgb!(255, 255, 255)),
            ("PeachesNCream1", rgb!(255, 207, 171)),
            ("PeachesNCream2", rgb!(252, 232, 131)),
            ("Rainforest", rgb!(109, 174, 129)),
            ("Rainforest1", rgb!(93, 118, 203)),
            ("Rainforest2", rgb!(120, 81, 169)),
            ("ShrimpCocktail", rgb!(255, 255, 255)),
            ("ShrimpCocktail1", rgb!(255, 117, 56)),
            ("ShrimpCocktail2", rgb!(200, 56, 90)),
            ("Southwest", rgb!(255, 255, 255)),
            ("Southwest1", rgb!(255, 117, 56)),
            ("Southwest2", rgb!(93, 118, 203)),
            ("StarSpangledBanner", rgb!(248, 239, 230)),
            ("StarSpangledBanner1", rgb!(31, 117, 254)),
            ("StarSpangledBanner2", rgb!(238, 32, 77)),
            ("Stonewashed", rgb!(248, 239, 230)),
            ("Stonewashed1", rgb!(31, 117, 254)),
            ("Stonewashed2", rgb!(238, 32, 77)),
            ("SurfsUp", rgb!(255, 255, 255)),
            ("SurfsUp1", rgb!(28, 169, 201)),
            ("SurfsUp2", rgb!(252, 232, 131)),
            ("Twister", rgb!(255, 255, 255)),
            ("Twister1", rgb!(28, 172, 120)),
            ("Twister2", rgb!(255, 117, 56)),
            ("WarmAndFuzzy", rgb!(255, 138, 186)),
            ("WarmAndFuzzy1", rgb!(255, 117, 56)),
            ("WarmAndFuzzy2", rgb!(31, 117, 254)),

            // Pearl Brite
            ("AquaPearl", rgb!(95, 190, 215)),
            ("BlackCoralPearl", rgb!(84, 98, 111)),
            ("CaribbeanGreenPearl", rgb!(106, 218, 142)),
            ("CulturedPearl", rgb!(245, 245, 245)),
            ("KeyLimePearl", rgb!(232, 244, 140)),
            ("MandarinPearl", rgb!(243, 122, 72)),
            ("MidnightPearl", rgb!(112, 38, 112)),
            ("MysticPearl", rgb!(214, 82, 130)),
            ("OceanBluePearl", rgb!(79, 66, 181)),
            ("OceanGreenPearl", rgb!(72, 191, 145)),
            ("OrchidPearl", rgb!(123, 66, 89)),
            ("RosePearl", rgb!(240, 56, 101)),
            ("SalmonPearl", rgb!(241, 68, 74)),
            ("SunnyPearl", rgb!(242, 242, 122)),
            ("SunsetPearl", rgb!(241, 204, 121)),
            ("TurquoisePearl", rgb!(59, 188, 208)),

            // Metallic FX
            ("AlloyOrange", rgb!(196, 98, 16)),
            ("BdazzledBlue", rgb!(46, 88, 148)),
            ("BigDipORuby", rgb!(156, 37, 66)),
            ("BittersweetShimmer", rgb!(191, 79, 81)),
            ("BlastOffBronze", rgb!(165, 113, 100)),
            ("CyberGrape", rgb!(88, 66, 124)),
            ("DeepSpaceSparkle", rgb!(74, 100, 108)),
            ("GoldFusion", rgb!(133, 117, 78)),
            ("IlluminatingEmerald", rgb!(49, 145, 119)),
            ("MetallicSeaweed", rgb!(10, 126, 140)),
            ("MetallicSunburst", rgb!(156, 124, 56)),
            ("RazzmicBerry", rgb!(141, 78, 133)),
            ("SheenGreen", rgb!(143, 212, 0)),
            ("ShimmeringBlush", rgb!(217, 134, 149)),
            ("SonicSilver", rgb!(117, 117, 117)),
            ("SteelBlue", rgb!(0, 129, 171)),

            // Silly Scents
            ("AlienArmpit", rgb!(197, 225, 122)),
            ("BigFootFeet", rgb!(217, 154, 108)),
            ("BoogerBuster", rgb!(236, 235, 189)),
            ("DingyDungeon", rgb!(195, 33, 72)),
            ("GargoyleGas", rgb!(254, 216, 93)),
            ("GiantsClub", rgb!(185, 78, 72)),
            ("MagicPotion", rgb!(237, 10, 63)),
            ("MummysTomb", rgb!(139, 134, 128)),
            ("OgreOdor", rgb!(255, 104, 31)),
            ("PixiePowder", rgb!(100, 86, 183)),
            ("PrincessPerfume", rgb!(252, 128, 165)),
            ("SasquatchSocks", rgb!(247, 70, 138)),
            ("SeaSerpent", rgb!(0, 204, 204)),
            ("SmashedPumpkin", rgb!(255, 136, 51)),
            ("SunburntCyclops", rgb!(231, 114, 0)),
            ("WinterWizard", rgb!(118, 215, 234)),

            // Heads 'n Tails
            ("SizzlingRed", rgb!(255, 56, 85)),
            ("RedSalsa", rgb!(253, 58, 74)),
            ("TartOrange", rgb!(251, 77, 70)),
            ("OrangeSoda", rgb!(250, 91, 61)),
            ("BrightYellow", rgb!(255, 170, 29)),
            ("YellowSunshine", rgb!(255, 247, 0)),
            ("SlimyGreen", rgb!(41, 150, 23)),
            ("GreenLizard", rgb!(167, 244, 50)),
            ("DenimBlue", rgb!(34, 67, 182)),
            ("BlueJeans", rgb!(93, 173, 236)),
            ("PlumpPurple", rgb!(89, 70, 178)),
            ("PurplePlum", rgb!(156, 81, 182)),
            ("SweetBrown", rgb!(168, 55, 49)),
            ("BrownSugar", rgb!(175, 110, 77)),
            ("EerieBlack", rgb!(27, 27, 27)),
            ("BlackShadows", rgb!(191, 175, 178)),

            // True to Life
            ("AmazonForest", rgb!(146, 246, 70)),
            ("AmazonForest1", rgb!(253, 254, 3)),
            ("AmazonForest2", rgb!(203, 251, 7)),
            ("CaribbeanCurrent", rgb!(93, 141, 223)),
            ("CaribbeanCurrent1", rgb!(218, 206, 210)),
            ("CaribbeanCurrent2", rgb!(48, 214, 164)),
            ("FloridaSunrise", rgb!(255, 179, 41)),
            ("FloridaSunrise1", rgb!(255, 216, 44)),
            ("FloridaSunrise2", rgb!(255, 204, 107)),
            ("GrandCanyon", rgb!(109, 56, 52)),
            ("GrandCanyon1", rgb!(179, 96, 88)),
            ("GrandCanyon2", rgb!(0, 0, 0)),
            ("MauiSunset", rgb!(142, 89, 159)),
            ("MauiSunset1", rgb!(236, 135, 43)),
            ("MauiSunset2", rgb!(250, 121, 185)),
            ("MilkyWay", rgb!(7, 7, 7)),
            ("MilkyWay1", rgb!(141, 71, 157)),
            ("MilkyWay2", rgb!(110, 127, 231)),
            ("SaharaDesert", rgb!(245, 203, 189)),
            ("SaharaDesert1", rgb!(176, 110, 84)),
            ("SaharaDesert2", rgb!(208, 198, 198)),
            ("YosemiteCampfire", rgb!(237, 76, 68)),
            ("YosemiteCampfire1", rgb!(239, 142, 48)),
            ("YosemiteCampfire2", rgb!(169, 94, 52)),

            // True to Life
            ("FieryRose", rgb!(255, 84, 112)),
            ("SizzlingSunset", rgb!(255, 219, 0)),
            ("HeatWave", rgb!(255, 122, 0)),
            ("LemonGlacier", rgb!(253, 255, 0)),
            ("SpringFrost", rgb!(135, 255, 42)),
            ("AbsoluteZero", rgb!(0, 72, 186)),
            ("WinterSky", rgb!(255, 0, 124)),
            ("Frostbite", rgb!(233, 54, 167)),
        ],
    )
});

/// Access the Crayola color group.
pub fn group() -> &'static ColorGroup {
    &CRAYOLA
}
