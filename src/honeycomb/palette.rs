use std::fmt;
use std::str::FromStr;

use bevy::prelude::*;

use crate::error::HoneycombError;

/// Fill color of a honeycomb cell, from a fixed palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Reflect)]
pub enum CellColor {
    /// (255, 255, 255)
    #[default]
    White,
    /// (255, 0, 0)
    Red,
    /// (255, 175, 0)
    Orange,
    /// (255, 255, 0)
    Yellow,
    /// (175, 255, 0)
    Lime,
    /// (0, 175, 0)
    Green,
    /// (0, 255, 255)
    Cyan,
    /// (0, 0, 255)
    Blue,
    /// (125, 0, 255)
    Purple,
    /// (255, 0, 255)
    Magenta,
    /// (255, 0, 125)
    Pink,
}

impl CellColor {
    /// Every palette color in declaration order.
    pub const ALL: [CellColor; 11] = [
        CellColor::White,
        CellColor::Red,
        CellColor::Orange,
        CellColor::Yellow,
        CellColor::Lime,
        CellColor::Green,
        CellColor::Cyan,
        CellColor::Blue,
        CellColor::Purple,
        CellColor::Magenta,
        CellColor::Pink,
    ];

    /// Menu label, also the key accepted by [`CellColor::from_label`].
    pub fn name(self) -> &'static str {
        match self {
            CellColor::White => "White",
            CellColor::Red => "Red",
            CellColor::Orange => "Orange",
            CellColor::Yellow => "Yellow",
            CellColor::Lime => "Lime",
            CellColor::Green => "Green",
            CellColor::Cyan => "Cyan",
            CellColor::Blue => "Blue",
            CellColor::Purple => "Purple",
            CellColor::Magenta => "Magenta",
            CellColor::Pink => "Pink",
        }
    }

    /// 8-bit sRGB triple.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CellColor::White => [255, 255, 255],
            CellColor::Red => [255, 0, 0],
            CellColor::Orange => [255, 175, 0],
            CellColor::Yellow => [255, 255, 0],
            CellColor::Lime => [175, 255, 0],
            CellColor::Green => [0, 175, 0],
            CellColor::Cyan => [0, 255, 255],
            CellColor::Blue => [0, 0, 255],
            CellColor::Purple => [125, 0, 255],
            CellColor::Magenta => [255, 0, 255],
            CellColor::Pink => [255, 0, 125],
        }
    }

    /// Bevy color for the same triple.
    pub fn to_color(self) -> Color {
        let [r, g, b] = self.rgb();
        Color::srgb_u8(r, g, b)
    }

    /// Case-sensitive lookup by name; unknown labels fall back to white.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }
}

impl fmt::Display for CellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CellColor {
    type Err = HoneycombError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CellColor::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| HoneycombError::UnknownColor(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_white() {
        assert_eq!(CellColor::default(), CellColor::White);
    }

    #[test]
    fn every_name_maps_back_to_its_color() {
        for color in CellColor::ALL {
            assert_eq!(CellColor::from_label(color.name()), color);
            assert_eq!(color.to_string().parse::<CellColor>(), Ok(color));
        }
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(CellColor::from_label("red"), CellColor::White);
        assert_eq!(CellColor::from_label("RED"), CellColor::White);
        assert_eq!(CellColor::from_label("Red"), CellColor::Red);
    }

    #[test]
    fn unknown_label_falls_back_to_white() {
        assert_eq!(CellColor::from_label("Chartreuse"), CellColor::White);
        assert_eq!(CellColor::from_label(""), CellColor::White);
    }

    #[test]
    fn strict_parse_rejects_unknown_label() {
        assert_eq!(
            "Teal".parse::<CellColor>(),
            Err(HoneycombError::UnknownColor("Teal".into()))
        );
    }

    #[test]
    fn rgb_table() {
        assert_eq!(CellColor::White.rgb(), [255, 255, 255]);
        assert_eq!(CellColor::Orange.rgb(), [255, 175, 0]);
        assert_eq!(CellColor::Lime.rgb(), [175, 255, 0]);
        assert_eq!(CellColor::Green.rgb(), [0, 175, 0]);
        assert_eq!(CellColor::Purple.rgb(), [125, 0, 255]);
        assert_eq!(CellColor::Pink.rgb(), [255, 0, 125]);
    }

    #[test]
    fn palette_colors_are_distinct() {
        for (i, a) in CellColor::ALL.iter().enumerate() {
            for b in &CellColor::ALL[i + 1..] {
                assert_ne!(a.rgb(), b.rgb(), "{a} and {b}");
            }
        }
    }

    #[test]
    fn bevy_color_matches_rgb() {
        let srgba = CellColor::Orange.to_color().to_srgba();
        assert!((srgba.red - 1.0).abs() < 1e-6);
        assert!((srgba.green - 175.0 / 255.0).abs() < 1e-6);
        assert!(srgba.blue.abs() < 1e-6);
    }
}
