//! Palette and color math for the sunburst.
//!
//! Colors are plain 24-bit RGB. `lighten` and `desaturate` must be exact to
//! the bit: decorated trees are compared against visual-regression fixtures,
//! so both operations round the same way on every platform.

pub mod decorate;

pub use decorate::{decorate, DecoratedNode, LabelPosition, LabelStyle, ViewState};

/// 24-bit RGB color. Serializes as the `#rrggbb` hex form the option tree
/// uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Neutral gray used when a node has no resolvable parent color.
pub const FALLBACK: Color = Color { r: 0x66, g: 0x66, b: 0x66 };

/// The fixed "Mystic Depths & Illumination" palette, assigned to top-level
/// categories cycling by occurrence index.
pub const PALETTE: [Color; 10] = [
    Color { r: 0x03, g: 0x04, b: 0x5E }, // midnight blue
    Color { r: 0xFC, g: 0xD7, b: 0x71 }, // golden yellow
    Color { r: 0x2C, g: 0x5A, b: 0x5B }, // teal-blue
    Color { r: 0xE8, g: 0xB2, b: 0x43 }, // warm gold
    Color { r: 0xE5, g: 0x9A, b: 0x14 }, // rich amber
    Color { r: 0xBE, g: 0x68, b: 0x23 }, // burnt orange
    Color { r: 0xD0, g: 0x7E, b: 0x1F }, // terracotta
    Color { r: 0x5F, g: 0x83, b: 0x66 }, // olive green
    Color { r: 0x7E, g: 0x88, b: 0x5E }, // sage green
    Color { r: 0xFC, g: 0xD7, b: 0x71 }, // golden yellow (repeated for emphasis)
];

impl Color {
    /// Parse a `#RRGGBB` hex string. Malformed input yields the neutral
    /// fallback gray rather than an error; a bad color is a cosmetic
    /// problem, not a fatal one.
    pub fn parse_hex(s: &str) -> Color {
        let bytes = s.as_bytes();
        if bytes.len() != 7 || bytes[0] != b'#' {
            return FALLBACK;
        }
        let mut chan = [0u8; 3];
        for (i, c) in chan.iter_mut().enumerate() {
            let hi = hex_digit(bytes[1 + i * 2]);
            let lo = hex_digit(bytes[2 + i * 2]);
            match (hi, lo) {
                (Some(h), Some(l)) => *c = (h << 4) | l,
                _ => return FALLBACK,
            }
        }
        Color { r: chan[0], g: chan[1], b: chan[2] }
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_egui(self) -> egui::Color32 {
        egui::Color32::from_rgb(self.r, self.g, self.b)
    }
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Lighten by adding a uniform delta to each channel, clamped to [0, 255].
/// The delta is `round(2.55 * percent)`, so `lighten(c, 0) == c`.
pub fn lighten(c: Color, percent: u32) -> Color {
    let amt = (2.55 * percent as f64).round() as i32;
    let clamp = |ch: u8| (ch as i32 + amt).clamp(0, 255) as u8;
    Color { r: clamp(c.r), g: clamp(c.g), b: clamp(c.b) }
}

/// Desaturate by blending each channel toward the perceptual luminance gray
/// (0.299 / 0.587 / 0.114) by `percent / 100`. At 100 the result is
/// channel-equal; at 0 it is the input unchanged.
pub fn desaturate(c: Color, percent: u32) -> Color {
    let gray = c.r as f64 * 0.299 + c.g as f64 * 0.587 + c.b as f64 * 0.114;
    let f = percent as f64 / 100.0;
    let blend = |ch: u8| (ch as f64 * (1.0 - f) + gray * f).round() as u8;
    Color { r: blend(c.r), g: blend(c.g), b: blend(c.b) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(Color::parse_hex("#03045E"), Color { r: 3, g: 4, b: 0x5E });
        assert_eq!(Color::parse_hex("#ff8800"), Color { r: 255, g: 136, b: 0 });
    }

    #[test]
    fn test_parse_hex_malformed_falls_back_to_gray() {
        assert_eq!(Color::parse_hex(""), FALLBACK);
        assert_eq!(Color::parse_hex("03045E"), FALLBACK);
        assert_eq!(Color::parse_hex("#03045"), FALLBACK);
        assert_eq!(Color::parse_hex("#03045X"), FALLBACK);
    }

    #[test]
    fn test_hex_round_trip() {
        for hex in ["#03045e", "#fcd771", "#000000", "#ffffff"] {
            assert_eq!(Color::parse_hex(hex).to_hex(), hex);
        }
    }

    #[test]
    fn test_lighten_zero_is_identity() {
        for c in PALETTE {
            assert_eq!(lighten(c, 0), c);
        }
    }

    #[test]
    fn test_lighten_clamps() {
        let c = lighten(Color { r: 250, g: 10, b: 128 }, 20);
        assert_eq!(c, Color { r: 255, g: 61, b: 179 });
    }

    #[test]
    fn test_desaturate_zero_is_identity() {
        for c in PALETTE {
            assert_eq!(desaturate(c, 0), c);
        }
    }

    #[test]
    fn test_desaturate_full_is_gray() {
        for c in PALETTE {
            let g = desaturate(c, 100);
            assert_eq!(g.r, g.g);
            assert_eq!(g.g, g.b);
        }
    }

    #[test]
    fn test_desaturate_exact() {
        // gray(2C5A5B) = 44*0.299 + 90*0.587 + 91*0.114 = 76.360
        let c = desaturate(Color { r: 0x2C, g: 0x5A, b: 0x5B }, 50);
        assert_eq!(c, Color { r: 60, g: 83, b: 84 });
    }
}
