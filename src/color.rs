use std::fmt;

use image::Rgba;

pub const WHITE: Rgba<u8> = Rgba([u8::MAX, u8::MAX, u8::MAX, u8::MAX]);

/// The fully opaque colors a block can be painted with besides white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryColor {
    Red,
    Green,
    Blue,
}

impl PrimaryColor {
    /// Map a one-letter command line code to a color.
    ///
    /// Only the exact strings `R`, `G`, `B` (either case) are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "R" | "r" => Some(PrimaryColor::Red),
            "G" | "g" => Some(PrimaryColor::Green),
            "B" | "b" => Some(PrimaryColor::Blue),
            _ => None,
        }
    }

    pub fn rgba(self) -> Rgba<u8> {
        match self {
            PrimaryColor::Red => Rgba([u8::MAX, 0, 0, u8::MAX]),
            PrimaryColor::Green => Rgba([0, u8::MAX, 0, u8::MAX]),
            PrimaryColor::Blue => Rgba([0, 0, u8::MAX, u8::MAX]),
        }
    }
}

impl fmt::Display for PrimaryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrimaryColor::Red => "red",
            PrimaryColor::Green => "green",
            PrimaryColor::Blue => "blue",
        };
        f.write_str(name)
    }
}
