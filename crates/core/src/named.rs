//! Fixed named-colour tables used by the `framework` and `system` population modes.

use crate::color::Argb;
use crate::error::SwatchError;

/// A colour with its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    /// Display name, in the table's own capitalisation.
    pub name: &'static str,
    pub color: Argb,
}

impl NamedColor {
    const fn new(name: &'static str, color: Argb) -> Self {
        Self { name, color }
    }
}

/// The predefined web colours, alphabetical, including `Transparent`.
pub const FRAMEWORK: &[NamedColor] = &[
    NamedColor::new("AliceBlue", Argb::rgb(0xF0, 0xF8, 0xFF)),
    NamedColor::new("AntiqueWhite", Argb::rgb(0xFA, 0xEB, 0xD7)),
    NamedColor::new("Aqua", Argb::rgb(0x00, 0xFF, 0xFF)),
    NamedColor::new("Aquamarine", Argb::rgb(0x7F, 0xFF, 0xD4)),
    NamedColor::new("Azure", Argb::rgb(0xF0, 0xFF, 0xFF)),
    NamedColor::new("Beige", Argb::rgb(0xF5, 0xF5, 0xDC)),
    NamedColor::new("Bisque", Argb::rgb(0xFF, 0xE4, 0xC4)),
    NamedColor::new("Black", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("BlanchedAlmond", Argb::rgb(0xFF, 0xEB, 0xCD)),
    NamedColor::new("Blue", Argb::rgb(0x00, 0x00, 0xFF)),
    NamedColor::new("BlueViolet", Argb::rgb(0x8A, 0x2B, 0xE2)),
    NamedColor::new("Brown", Argb::rgb(0xA5, 0x2A, 0x2A)),
    NamedColor::new("BurlyWood", Argb::rgb(0xDE, 0xB8, 0x87)),
    NamedColor::new("CadetBlue", Argb::rgb(0x5F, 0x9E, 0xA0)),
    NamedColor::new("Chartreuse", Argb::rgb(0x7F, 0xFF, 0x00)),
    NamedColor::new("Chocolate", Argb::rgb(0xD2, 0x69, 0x1E)),
    NamedColor::new("Coral", Argb::rgb(0xFF, 0x7F, 0x50)),
    NamedColor::new("CornflowerBlue", Argb::rgb(0x64, 0x95, 0xED)),
    NamedColor::new("Cornsilk", Argb::rgb(0xFF, 0xF8, 0xDC)),
    NamedColor::new("Crimson", Argb::rgb(0xDC, 0x14, 0x3C)),
    NamedColor::new("Cyan", Argb::rgb(0x00, 0xFF, 0xFF)),
    NamedColor::new("DarkBlue", Argb::rgb(0x00, 0x00, 0x8B)),
    NamedColor::new("DarkCyan", Argb::rgb(0x00, 0x8B, 0x8B)),
    NamedColor::new("DarkGoldenrod", Argb::rgb(0xB8, 0x86, 0x0B)),
    NamedColor::new("DarkGray", Argb::rgb(0xA9, 0xA9, 0xA9)),
    NamedColor::new("DarkGreen", Argb::rgb(0x00, 0x64, 0x00)),
    NamedColor::new("DarkKhaki", Argb::rgb(0xBD, 0xB7, 0x6B)),
    NamedColor::new("DarkMagenta", Argb::rgb(0x8B, 0x00, 0x8B)),
    NamedColor::new("DarkOliveGreen", Argb::rgb(0x55, 0x6B, 0x2F)),
    NamedColor::new("DarkOrange", Argb::rgb(0xFF, 0x8C, 0x00)),
    NamedColor::new("DarkOrchid", Argb::rgb(0x99, 0x32, 0xCC)),
    NamedColor::new("DarkRed", Argb::rgb(0x8B, 0x00, 0x00)),
    NamedColor::new("DarkSalmon", Argb::rgb(0xE9, 0x96, 0x7A)),
    NamedColor::new("DarkSeaGreen", Argb::rgb(0x8F, 0xBC, 0x8F)),
    NamedColor::new("DarkSlateBlue", Argb::rgb(0x48, 0x3D, 0x8B)),
    NamedColor::new("DarkSlateGray", Argb::rgb(0x2F, 0x4F, 0x4F)),
    NamedColor::new("DarkTurquoise", Argb::rgb(0x00, 0xCE, 0xD1)),
    NamedColor::new("DarkViolet", Argb::rgb(0x94, 0x00, 0xD3)),
    NamedColor::new("DeepPink", Argb::rgb(0xFF, 0x14, 0x93)),
    NamedColor::new("DeepSkyBlue", Argb::rgb(0x00, 0xBF, 0xFF)),
    NamedColor::new("DimGray", Argb::rgb(0x69, 0x69, 0x69)),
    NamedColor::new("DodgerBlue", Argb::rgb(0x1E, 0x90, 0xFF)),
    NamedColor::new("Firebrick", Argb::rgb(0xB2, 0x22, 0x22)),
    NamedColor::new("FloralWhite", Argb::rgb(0xFF, 0xFA, 0xF0)),
    NamedColor::new("ForestGreen", Argb::rgb(0x22, 0x8B, 0x22)),
    NamedColor::new("Fuchsia", Argb::rgb(0xFF, 0x00, 0xFF)),
    NamedColor::new("Gainsboro", Argb::rgb(0xDC, 0xDC, 0xDC)),
    NamedColor::new("GhostWhite", Argb::rgb(0xF8, 0xF8, 0xFF)),
    NamedColor::new("Gold", Argb::rgb(0xFF, 0xD7, 0x00)),
    NamedColor::new("Goldenrod", Argb::rgb(0xDA, 0xA5, 0x20)),
    NamedColor::new("Gray", Argb::rgb(0x80, 0x80, 0x80)),
    NamedColor::new("Green", Argb::rgb(0x00, 0x80, 0x00)),
    NamedColor::new("GreenYellow", Argb::rgb(0xAD, 0xFF, 0x2F)),
    NamedColor::new("Honeydew", Argb::rgb(0xF0, 0xFF, 0xF0)),
    NamedColor::new("HotPink", Argb::rgb(0xFF, 0x69, 0xB4)),
    NamedColor::new("IndianRed", Argb::rgb(0xCD, 0x5C, 0x5C)),
    NamedColor::new("Indigo", Argb::rgb(0x4B, 0x00, 0x82)),
    NamedColor::new("Ivory", Argb::rgb(0xFF, 0xFF, 0xF0)),
    NamedColor::new("Khaki", Argb::rgb(0xF0, 0xE6, 0x8C)),
    NamedColor::new("Lavender", Argb::rgb(0xE6, 0xE6, 0xFA)),
    NamedColor::new("LavenderBlush", Argb::rgb(0xFF, 0xF0, 0xF5)),
    NamedColor::new("LawnGreen", Argb::rgb(0x7C, 0xFC, 0x00)),
    NamedColor::new("LemonChiffon", Argb::rgb(0xFF, 0xFA, 0xCD)),
    NamedColor::new("LightBlue", Argb::rgb(0xAD, 0xD8, 0xE6)),
    NamedColor::new("LightCoral", Argb::rgb(0xF0, 0x80, 0x80)),
    NamedColor::new("LightCyan", Argb::rgb(0xE0, 0xFF, 0xFF)),
    NamedColor::new("LightGoldenrodYellow", Argb::rgb(0xFA, 0xFA, 0xD2)),
    NamedColor::new("LightGray", Argb::rgb(0xD3, 0xD3, 0xD3)),
    NamedColor::new("LightGreen", Argb::rgb(0x90, 0xEE, 0x90)),
    NamedColor::new("LightPink", Argb::rgb(0xFF, 0xB6, 0xC1)),
    NamedColor::new("LightSalmon", Argb::rgb(0xFF, 0xA0, 0x7A)),
    NamedColor::new("LightSeaGreen", Argb::rgb(0x20, 0xB2, 0xAA)),
    NamedColor::new("LightSkyBlue", Argb::rgb(0x87, 0xCE, 0xFA)),
    NamedColor::new("LightSlateGray", Argb::rgb(0x77, 0x88, 0x99)),
    NamedColor::new("LightSteelBlue", Argb::rgb(0xB0, 0xC4, 0xDE)),
    NamedColor::new("LightYellow", Argb::rgb(0xFF, 0xFF, 0xE0)),
    NamedColor::new("Lime", Argb::rgb(0x00, 0xFF, 0x00)),
    NamedColor::new("LimeGreen", Argb::rgb(0x32, 0xCD, 0x32)),
    NamedColor::new("Linen", Argb::rgb(0xFA, 0xF0, 0xE6)),
    NamedColor::new("Magenta", Argb::rgb(0xFF, 0x00, 0xFF)),
    NamedColor::new("Maroon", Argb::rgb(0x80, 0x00, 0x00)),
    NamedColor::new("MediumAquamarine", Argb::rgb(0x66, 0xCD, 0xAA)),
    NamedColor::new("MediumBlue", Argb::rgb(0x00, 0x00, 0xCD)),
    NamedColor::new("MediumOrchid", Argb::rgb(0xBA, 0x55, 0xD3)),
    NamedColor::new("MediumPurple", Argb::rgb(0x93, 0x70, 0xDB)),
    NamedColor::new("MediumSeaGreen", Argb::rgb(0x3C, 0xB3, 0x71)),
    NamedColor::new("MediumSlateBlue", Argb::rgb(0x7B, 0x68, 0xEE)),
    NamedColor::new("MediumSpringGreen", Argb::rgb(0x00, 0xFA, 0x9A)),
    NamedColor::new("MediumTurquoise", Argb::rgb(0x48, 0xD1, 0xCC)),
    NamedColor::new("MediumVioletRed", Argb::rgb(0xC7, 0x15, 0x85)),
    NamedColor::new("MidnightBlue", Argb::rgb(0x19, 0x19, 0x70)),
    NamedColor::new("MintCream", Argb::rgb(0xF5, 0xFF, 0xFA)),
    NamedColor::new("MistyRose", Argb::rgb(0xFF, 0xE4, 0xE1)),
    NamedColor::new("Moccasin", Argb::rgb(0xFF, 0xE4, 0xB5)),
    NamedColor::new("NavajoWhite", Argb::rgb(0xFF, 0xDE, 0xAD)),
    NamedColor::new("Navy", Argb::rgb(0x00, 0x00, 0x80)),
    NamedColor::new("OldLace", Argb::rgb(0xFD, 0xF5, 0xE6)),
    NamedColor::new("Olive", Argb::rgb(0x80, 0x80, 0x00)),
    NamedColor::new("OliveDrab", Argb::rgb(0x6B, 0x8E, 0x23)),
    NamedColor::new("Orange", Argb::rgb(0xFF, 0xA5, 0x00)),
    NamedColor::new("OrangeRed", Argb::rgb(0xFF, 0x45, 0x00)),
    NamedColor::new("Orchid", Argb::rgb(0xDA, 0x70, 0xD6)),
    NamedColor::new("PaleGoldenrod", Argb::rgb(0xEE, 0xE8, 0xAA)),
    NamedColor::new("PaleGreen", Argb::rgb(0x98, 0xFB, 0x98)),
    NamedColor::new("PaleTurquoise", Argb::rgb(0xAF, 0xEE, 0xEE)),
    NamedColor::new("PaleVioletRed", Argb::rgb(0xDB, 0x70, 0x93)),
    NamedColor::new("PapayaWhip", Argb::rgb(0xFF, 0xEF, 0xD5)),
    NamedColor::new("PeachPuff", Argb::rgb(0xFF, 0xDA, 0xB9)),
    NamedColor::new("Peru", Argb::rgb(0xCD, 0x85, 0x3F)),
    NamedColor::new("Pink", Argb::rgb(0xFF, 0xC0, 0xCB)),
    NamedColor::new("Plum", Argb::rgb(0xDD, 0xA0, 0xDD)),
    NamedColor::new("PowderBlue", Argb::rgb(0xB0, 0xE0, 0xE6)),
    NamedColor::new("Purple", Argb::rgb(0x80, 0x00, 0x80)),
    NamedColor::new("Red", Argb::rgb(0xFF, 0x00, 0x00)),
    NamedColor::new("RosyBrown", Argb::rgb(0xBC, 0x8F, 0x8F)),
    NamedColor::new("RoyalBlue", Argb::rgb(0x41, 0x69, 0xE1)),
    NamedColor::new("SaddleBrown", Argb::rgb(0x8B, 0x45, 0x13)),
    NamedColor::new("Salmon", Argb::rgb(0xFA, 0x80, 0x72)),
    NamedColor::new("SandyBrown", Argb::rgb(0xF4, 0xA4, 0x60)),
    NamedColor::new("SeaGreen", Argb::rgb(0x2E, 0x8B, 0x57)),
    NamedColor::new("SeaShell", Argb::rgb(0xFF, 0xF5, 0xEE)),
    NamedColor::new("Sienna", Argb::rgb(0xA0, 0x52, 0x2D)),
    NamedColor::new("Silver", Argb::rgb(0xC0, 0xC0, 0xC0)),
    NamedColor::new("SkyBlue", Argb::rgb(0x87, 0xCE, 0xEB)),
    NamedColor::new("SlateBlue", Argb::rgb(0x6A, 0x5A, 0xCD)),
    NamedColor::new("SlateGray", Argb::rgb(0x70, 0x80, 0x90)),
    NamedColor::new("Snow", Argb::rgb(0xFF, 0xFA, 0xFA)),
    NamedColor::new("SpringGreen", Argb::rgb(0x00, 0xFF, 0x7F)),
    NamedColor::new("SteelBlue", Argb::rgb(0x46, 0x82, 0xB4)),
    NamedColor::new("Tan", Argb::rgb(0xD2, 0xB4, 0x8C)),
    NamedColor::new("Teal", Argb::rgb(0x00, 0x80, 0x80)),
    NamedColor::new("Thistle", Argb::rgb(0xD8, 0xBF, 0xD8)),
    NamedColor::new("Tomato", Argb::rgb(0xFF, 0x63, 0x47)),
    NamedColor::new("Transparent", Argb::new(0x00, 0xFF, 0xFF, 0xFF)),
    NamedColor::new("Turquoise", Argb::rgb(0x40, 0xE0, 0xD0)),
    NamedColor::new("Violet", Argb::rgb(0xEE, 0x82, 0xEE)),
    NamedColor::new("Wheat", Argb::rgb(0xF5, 0xDE, 0xB3)),
    NamedColor::new("White", Argb::rgb(0xFF, 0xFF, 0xFF)),
    NamedColor::new("WhiteSmoke", Argb::rgb(0xF5, 0xF5, 0xF5)),
    NamedColor::new("Yellow", Argb::rgb(0xFF, 0xFF, 0x00)),
    NamedColor::new("YellowGreen", Argb::rgb(0x9A, 0xCD, 0x32)),
];

/// Desktop UI role colours, using the stock light theme values.
pub const SYSTEM: &[NamedColor] = &[
    NamedColor::new("ActiveBorder", Argb::rgb(0xB4, 0xB4, 0xB4)),
    NamedColor::new("ActiveCaption", Argb::rgb(0x99, 0xB4, 0xD1)),
    NamedColor::new("ActiveCaptionText", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("AppWorkspace", Argb::rgb(0xAB, 0xAB, 0xAB)),
    NamedColor::new("Control", Argb::rgb(0xF0, 0xF0, 0xF0)),
    NamedColor::new("ControlDark", Argb::rgb(0xA0, 0xA0, 0xA0)),
    NamedColor::new("ControlDarkDark", Argb::rgb(0x69, 0x69, 0x69)),
    NamedColor::new("ControlLight", Argb::rgb(0xE3, 0xE3, 0xE3)),
    NamedColor::new("ControlLightLight", Argb::rgb(0xFF, 0xFF, 0xFF)),
    NamedColor::new("ControlText", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("Desktop", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("GradientActiveCaption", Argb::rgb(0xB9, 0xD1, 0xEA)),
    NamedColor::new("GradientInactiveCaption", Argb::rgb(0xD7, 0xE4, 0xF2)),
    NamedColor::new("GrayText", Argb::rgb(0x6D, 0x6D, 0x6D)),
    NamedColor::new("Highlight", Argb::rgb(0x00, 0x78, 0xD7)),
    NamedColor::new("HighlightText", Argb::rgb(0xFF, 0xFF, 0xFF)),
    NamedColor::new("HotTrack", Argb::rgb(0x00, 0x66, 0xCC)),
    NamedColor::new("InactiveBorder", Argb::rgb(0xF4, 0xF7, 0xFC)),
    NamedColor::new("InactiveCaption", Argb::rgb(0xBF, 0xCD, 0xDB)),
    NamedColor::new("InactiveCaptionText", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("Info", Argb::rgb(0xFF, 0xFF, 0xE1)),
    NamedColor::new("InfoText", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("Menu", Argb::rgb(0xF0, 0xF0, 0xF0)),
    NamedColor::new("MenuBar", Argb::rgb(0xF0, 0xF0, 0xF0)),
    NamedColor::new("MenuHighlight", Argb::rgb(0x33, 0x99, 0xFF)),
    NamedColor::new("MenuText", Argb::rgb(0x00, 0x00, 0x00)),
    NamedColor::new("ScrollBar", Argb::rgb(0xC8, 0xC8, 0xC8)),
    NamedColor::new("Window", Argb::rgb(0xFF, 0xFF, 0xFF)),
    NamedColor::new("WindowFrame", Argb::rgb(0x64, 0x64, 0x64)),
    NamedColor::new("WindowText", Argb::rgb(0x00, 0x00, 0x00)),
];

/// Case-insensitive lookup across both tables, framework first.
pub fn lookup(name: &str) -> Result<Argb, SwatchError> {
    FRAMEWORK
        .iter()
        .chain(SYSTEM)
        .find(|n| n.name.eq_ignore_ascii_case(name))
        .map(|n| n.color)
        .ok_or_else(|| SwatchError::UnknownName {
            kind: "colour",
            name: name.to_string(),
        })
}
