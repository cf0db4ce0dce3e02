use egui::Color32;
use serde::{Deserialize, Serialize};

/// Corporate colors used by every chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorporatePalette {
    #[serde(with = "hex_color")]
    pub primary: [u8; 4],
    #[serde(with = "hex_color")]
    pub secondary: [u8; 4],
    #[serde(with = "hex_color")]
    pub accent: [u8; 4],
    #[serde(with = "hex_color")]
    pub background: [u8; 4],
    #[serde(with = "hex_color")]
    pub success: [u8; 4],
    #[serde(with = "hex_color")]
    pub warning: [u8; 4],
}

impl Default for CorporatePalette {
    fn default() -> Self {
        Self {
            primary: [44, 62, 80, 255],      // #2C3E50 dark blue
            secondary: [52, 152, 219, 255],  // #3498DB bright blue
            accent: [231, 76, 60, 255],      // #E74C3C red
            background: [236, 240, 241, 255], // #ECF0F1 light gray
            success: [39, 174, 96, 255],     // #27AE60 green
            warning: [243, 156, 18, 255],    // #F39C12 orange
        }
    }
}

impl CorporatePalette {
    pub fn primary(&self) -> Color32 {
        to_color32(self.primary)
    }

    pub fn secondary(&self) -> Color32 {
        to_color32(self.secondary)
    }

    pub fn accent(&self) -> Color32 {
        to_color32(self.accent)
    }

    pub fn background(&self) -> Color32 {
        to_color32(self.background)
    }

    pub fn success(&self) -> Color32 {
        to_color32(self.success)
    }

    pub fn warning(&self) -> Color32 {
        to_color32(self.warning)
    }
}

pub fn to_color32(c: [u8; 4]) -> Color32 {
    Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3])
}

/// Parse `#RRGGBB` or `#RRGGBBAA` into an RGBA array.
pub fn parse_hex(hex: &str) -> Option<[u8; 4]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    let alpha = if digits.len() == 8 { byte(6)? } else { 255 };
    Some([byte(0)?, byte(2)?, byte(4)?, alpha])
}

/// Format an RGBA array as `#RRGGBB`, ignoring alpha.
pub fn to_hex(c: [u8; 4]) -> String {
    format!("#{:02X}{:02X}{:02X}", c[0], c[1], c[2])
}

/// Settings files store colors as `#RRGGBB` strings.
mod hex_color {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &[u8; 4], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<[u8; 4], D::Error> {
        let hex = String::deserialize(deserializer)?;
        super::parse_hex(&hex).ok_or_else(|| D::Error::custom(format!("invalid color `{hex}`")))
    }
}
