// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static table of human color names mapped to their nearest 256-color terminal code.
//! The hex and RGB values of each name are derived from the code with
//! [`term_code_to_hex`] and [`term_code_to_rgb`], so the three fields always agree.
//!
//! [`term_code_to_hex`]: crate::term_code_to_hex
//! [`term_code_to_rgb`]: crate::term_code_to_rgb

/// Sorted by name so lookups can binary search.
pub const NAMED_COLOR_TABLE: &[(&str, u8)] = &[
    ("aliceblue", 231),
    ("antiquewhite", 230),
    ("antiquewhite2", 224),
    ("antiquewhite3", 181),
    ("antiquewhite4", 102),
    ("aquamarine", 122),
    ("aquamarine2", 79),
    ("aquamarine3", 66),
    ("azure", 231),
    ("azure2", 195),
    ("azure3", 152),
    ("azure4", 102),
    ("beige", 230),
    ("bisque", 224),
    ("bisque2", 223),
    ("bisque3", 181),
    ("bisque4", 101),
    ("black", 16),
    ("blanchedalmond", 230),
    ("blue", 21),
    ("blue2", 20),
    ("blue3", 18),
    ("blueviolet", 92),
    ("brown", 124),
    ("brown2", 203),
    ("brown3", 167),
    ("brown4", 88),
    ("burlywood", 180),
    ("burlywood2", 223),
    ("burlywood3", 222),
    ("burlywood4", 180),
    ("burlywood5", 101),
    ("cadetblue", 73),
    ("cadetblue2", 123),
    ("cadetblue3", 117),
    ("cadetblue4", 116),
    ("cadetblue5", 66),
    ("chartreuse", 118),
    ("chartreuse2", 76),
    ("chartreuse3", 64),
    ("chocolate", 166),
    ("chocolate2", 208),
    ("chocolate3", 166),
    ("chocolate4", 94),
    ("coral", 203),
    ("coral2", 209),
    ("coral3", 167),
    ("coral4", 94),
    ("cornflowerblue", 69),
    ("cornsilk", 230),
    ("cornsilk2", 224),
    ("cornsilk3", 187),
    ("cornsilk4", 102),
    ("cyan", 51),
    ("cyan2", 44),
    ("cyan3", 30),
    ("darkblue", 18),
    ("darkcyan", 30),
    ("darkgoldenrod", 136),
    ("darkgoldenrod2", 214),
    ("darkgoldenrod3", 172),
    ("darkgoldenrod4", 94),
    ("darkgray", 145),
    ("darkgreen", 22),
    ("darkgrey", 145),
    ("darkkhaki", 143),
    ("darkmagenta", 90),
    ("darkolivegreen", 58),
    ("darkolivegreen2", 191),
    ("darkolivegreen3", 155),
    ("darkolivegreen4", 149),
    ("darkolivegreen5", 65),
    ("darkorange", 208),
    ("darkorange2", 166),
    ("darkorange3", 94),
    ("darkorchid", 98),
    ("darkorchid2", 135),
    ("darkorchid3", 98),
    ("darkorchid4", 54),
    ("darkred", 88),
    ("darksalmon", 174),
    ("darkseagreen", 108),
    ("darkseagreen2", 157),
    ("darkseagreen3", 151),
    ("darkseagreen4", 65),
    ("darkslateblue", 60),
    ("darkslategray", 23),
    ("darkslategray2", 123),
    ("darkslategray3", 116),
    ("darkslategray4", 66),
    ("darkslategrey", 23),
    ("darkturquoise", 44),
    ("darkviolet", 92),
    ("debianred", 161),
    ("deeppink", 198),
    ("deeppink2", 162),
    ("deeppink3", 89),
    ("deepskyblue", 39),
    ("deepskyblue2", 32),
    ("deepskyblue3", 24),
    ("dimgrey", 59),
    ("dodgerblue", 33),
    ("dodgerblue2", 32),
    ("dodgerblue3", 24),
    ("firebrick", 124),
    ("firebrick2", 203),
    ("firebrick3", 160),
    ("firebrick4", 88),
    ("floralwhite", 231),
    ("forestgreen", 28),
    ("gainsboro", 188),
    ("ghostwhite", 231),
    ("gold", 220),
    ("gold2", 178),
    ("gold3", 100),
    ("goldenrod", 178),
    ("goldenrod2", 214),
    ("goldenrod3", 178),
    ("goldenrod4", 94),
    ("gray", 145),
    ("gray100", 231),
    ("gray37", 59),
    ("gray50", 102),
    ("gray59", 102),
    ("green", 46),
    ("green2", 40),
    ("green3", 28),
    ("greenyellow", 154),
    ("grey", 145),
    ("grey100", 231),
    ("grey37", 59),
    ("grey50", 102),
    ("grey59", 102),
    ("honeydew2", 194),
    ("honeydew3", 151),
    ("honeydew4", 102),
    ("hotpink", 205),
    ("hotpink2", 168),
    ("hotpink3", 95),
    ("indianred", 167),
    ("indianred2", 203),
    ("indianred3", 167),
    ("indianred4", 95),
    ("ivory", 231),
    ("ivory2", 230),
    ("ivory3", 187),
    ("ivory4", 102),
    ("khaki", 222),
    ("khaki2", 228),
    ("khaki3", 186),
    ("khaki4", 101),
    ("lavender", 189),
    ("lavenderblush", 231),
    ("lavenderblush2", 224),
    ("lavenderblush3", 182),
    ("lavenderblush4", 102),
    ("lawngreen", 118),
    ("lemonchiffon", 230),
    ("lemonchiffon2", 223),
    ("lemonchiffon3", 187),
    ("lemonchiffon4", 101),
    ("lightblue", 152),
    ("lightblue2", 159),
    ("lightblue3", 153),
    ("lightblue4", 110),
    ("lightblue5", 66),
    ("lightcoral", 210),
    ("lightcyan", 195),
    ("lightcyan3", 152),
    ("lightcyan4", 102),
    ("lightgoldenrod", 222),
    ("lightgoldenrod2", 228),
    ("lightgoldenrod3", 179),
    ("lightgoldenrod4", 101),
    ("lightgoldenrodyellow", 230),
    ("lightgray", 188),
    ("lightgreen", 120),
    ("lightgrey", 188),
    ("lightpink", 217),
    ("lightpink2", 174),
    ("lightpink3", 95),
    ("lightsalmon", 216),
    ("lightsalmon2", 209),
    ("lightsalmon3", 173),
    ("lightsalmon4", 95),
    ("lightseagreen", 37),
    ("lightskyblue", 117),
    ("lightskyblue2", 153),
    ("lightskyblue3", 110),
    ("lightskyblue4", 66),
    ("lightslateblue", 99),
    ("lightslategray", 102),
    ("lightsteelblue", 152),
    ("lightsteelblue2", 189),
    ("lightsteelblue3", 153),
    ("lightsteelblue4", 146),
    ("lightsteelblue5", 66),
    ("lightyellow", 230),
    ("lightyellow2", 230),
    ("lightyellow3", 187),
    ("lightyellow4", 102),
    ("limegreen", 77),
    ("linen", 230),
    ("magenta", 201),
    ("magenta2", 164),
    ("magenta3", 90),
    ("maroon", 131),
    ("maroon2", 205),
    ("maroon3", 162),
    ("maroon4", 89),
    ("mediumaquamarine", 79),
    ("mediumblue", 20),
    ("mediumorchid", 134),
    ("mediumorchid2", 171),
    ("mediumorchid3", 134),
    ("mediumorchid4", 96),
    ("mediumpurple", 98),
    ("mediumpurple3", 141),
    ("mediumpurple4", 98),
    ("mediumpurple5", 60),
    ("mediumseagreen", 71),
    ("mediumslateblue", 99),
    ("mediumspringgreen", 48),
    ("mediumturquoise", 80),
    ("mediumvioletred", 162),
    ("midnightblue", 17),
    ("mintcream", 231),
    ("mistyrose", 224),
    ("mistyrose2", 181),
    ("mistyrose3", 102),
    ("moccasin", 223),
    ("navajowhite", 223),
    ("navajowhite2", 180),
    ("navajowhite3", 101),
    ("navy", 18),
    ("navyblue", 18),
    ("oldlace", 230),
    ("olivedrab", 64),
    ("olivedrab2", 155),
    ("olivedrab3", 113),
    ("olivedrab4", 64),
    ("orange", 214),
    ("orange2", 214),
    ("orange3", 208),
    ("orange4", 172),
    ("orange5", 94),
    ("orangered", 202),
    ("orangered2", 166),
    ("orangered3", 88),
    ("orchid", 170),
    ("orchid2", 213),
    ("orchid3", 212),
    ("orchid4", 170),
    ("orchid5", 96),
    ("palegoldenrod", 223),
    ("palegreen", 120),
    ("palegreen2", 114),
    ("palegreen3", 65),
    ("paleturquoise", 159),
    ("paleturquoise2", 116),
    ("paleturquoise3", 66),
    ("palevioletred", 168),
    ("palevioletred2", 211),
    ("palevioletred3", 168),
    ("palevioletred4", 95),
    ("papayawhip", 230),
    ("peachpuff", 223),
    ("peachpuff2", 223),
    ("peachpuff3", 180),
    ("peachpuff4", 101),
    ("peru", 173),
    ("pink", 218),
    ("pink2", 217),
    ("pink3", 175),
    ("pink4", 95),
    ("plum", 182),
    ("plum2", 219),
    ("plum3", 176),
    ("plum4", 96),
    ("powderblue", 152),
    ("purple", 129),
    ("purple2", 135),
    ("purple3", 93),
    ("purple4", 92),
    ("purple5", 54),
    ("red", 9),
    ("red2", 160),
    ("red3", 88),
    ("rosybrown", 138),
    ("rosybrown2", 217),
    ("rosybrown3", 181),
    ("rosybrown4", 95),
    ("royalblue", 62),
    ("royalblue2", 69),
    ("royalblue3", 63),
    ("royalblue4", 62),
    ("royalblue5", 24),
    ("saddlebrown", 94),
    ("salmon", 209),
    ("salmon2", 209),
    ("salmon3", 167),
    ("salmon4", 95),
    ("sandybrown", 215),
    ("seagreen", 29),
    ("seagreen2", 85),
    ("seagreen3", 84),
    ("seagreen4", 78),
    ("seagreen5", 29),
    ("seashell", 231),
    ("seashell2", 224),
    ("seashell3", 187),
    ("seashell4", 102),
    ("sienna", 130),
    ("sienna2", 209),
    ("sienna3", 167),
    ("sienna4", 94),
    ("skyblue", 117),
    ("skyblue2", 111),
    ("skyblue3", 74),
    ("skyblue4", 60),
    ("slateblue", 62),
    ("slateblue2", 99),
    ("slateblue3", 62),
    ("slateblue4", 60),
    ("slategray", 66),
    ("slategray2", 189),
    ("slategray3", 153),
    ("slategray4", 146),
    ("slategray5", 66),
    ("slategrey", 66),
    ("snow", 231),
    ("snow2", 224),
    ("snow3", 188),
    ("snow4", 102),
    ("springgreen", 48),
    ("springgreen2", 48),
    ("springgreen3", 41),
    ("springgreen4", 29),
    ("steelblue", 67),
    ("steelblue2", 75),
    ("steelblue3", 68),
    ("steelblue4", 60),
    ("tan", 180),
    ("tan2", 215),
    ("tan3", 209),
    ("tan4", 173),
    ("tan5", 94),
    ("thistle", 182),
    ("thistle2", 225),
    ("thistle3", 225),
    ("thistle4", 182),
    ("thistle5", 102),
    ("tomato", 203),
    ("tomato2", 167),
    ("tomato3", 94),
    ("turquoise", 80),
    ("turquoise2", 51),
    ("turquoise3", 45),
    ("turquoise4", 44),
    ("turquoise5", 30),
    ("violet", 213),
    ("violetred", 162),
    ("violetred2", 204),
    ("violetred3", 168),
    ("violetred4", 89),
    ("wheat", 223),
    ("wheat2", 223),
    ("wheat3", 180),
    ("wheat4", 101),
    ("white", 231),
    ("whitesmoke", 231),
    ("yellow", 11),
    ("yellow2", 184),
    ("yellow3", 100),
    ("yellowgreen", 113),
];
