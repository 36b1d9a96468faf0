use serde::{Deserialize, Serialize};

/// Identifier of a chat message. Fixtures use small integers, locally
/// authored messages use clock-derived values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MessageId(pub u64);

/// Domain model of a single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: String,
    pub content: String,
    /// Display only, e.g. `"10:30 AM"` or `"Now"`.
    pub timestamp: String,
    pub is_own: bool,
    #[serde(default)]
    pub decoration: Decoration,
}

/// Styling hints. None of these fields affect control flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Shape {
    #[default]
    Torus,
    Sphere,
    Box,
    Octahedron,
    Dodecahedron,
    Cylinder,
    Cone,
    Icosahedron,
    Tetrahedron,
}

impl Shape {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Torus => "torus",
            Self::Sphere => "sphere",
            Self::Box => "box",
            Self::Octahedron => "octahedron",
            Self::Dodecahedron => "dodecahedron",
            Self::Cylinder => "cylinder",
            Self::Cone => "cone",
            Self::Icosahedron => "icosahedron",
            Self::Tetrahedron => "tetrahedron",
        }
    }
}

/// Security label shown on enterprise messages and channels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Classification {
    TopSecret,
    Classified,
    Confidential,
    #[default]
    Unclassified,
}

impl Classification {
    pub const ALL: [Self; 4] = [
        Self::TopSecret,
        Self::Classified,
        Self::Confidential,
        Self::Unclassified,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::TopSecret => "top-secret",
            Self::Classified => "classified",
            Self::Confidential => "confidential",
            Self::Unclassified => "unclassified",
        }
    }

    pub const fn badge_color(self) -> Rgb {
        match self {
            Self::TopSecret => Rgb::hex(0xef4444),
            Self::Classified => Rgb::hex(0xf97316),
            Self::Confidential => Rgb::hex(0xeab308),
            Self::Unclassified => Rgb::hex(0x22c55e),
        }
    }
}

/// Plain RGB triple, kept free of any GUI type so fixtures stay `const`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const TEAL: Self = Self::hex(0x14b8a6);

    pub const fn hex(value: u32) -> Self {
        Self(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }
}

impl From<Rgb> for egui::Color32 {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        Self::from_rgb(r, g, b)
    }
}

/// Priority dot on business channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const fn color(self) -> Rgb {
        match self {
            Self::Urgent => Rgb::hex(0xef4444),
            Self::High => Rgb::hex(0xf97316),
            Self::Medium => Rgb::hex(0xeab308),
            Self::Low => Rgb::hex(0x22c55e),
        }
    }
}

/// An entry of the per-tier sidebar channel list.
#[derive(Debug, Clone, Copy)]
pub struct ChannelEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub last_message: &'static str,
    pub time: &'static str,
    pub unread: u32,
    pub members: Option<u32>,
    pub priority: Option<Priority>,
    pub classification: Option<Classification>,
    pub online: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_hex_splits_channels() {
        assert_eq!(Rgb::hex(0x8b5cf6), Rgb(0x8b, 0x5c, 0xf6));
        assert_eq!(Rgb::TEAL, Rgb(0x14, 0xb8, 0xa6));
    }

    #[test]
    fn decoration_serializes_kebab_case_and_skips_missing() {
        let decoration = Decoration {
            shape: Some(Shape::Dodecahedron),
            classification: Some(Classification::TopSecret),
            ..Decoration::default()
        };
        let json = serde_json::to_value(&decoration).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "shape": "dodecahedron", "classification": "top-secret" })
        );
    }

    #[test]
    fn message_deserializes_without_decoration() {
        let message: ChatMessage = serde_json::from_str(
            r#"{"id":7,"sender":"You","content":"hi","timestamp":"Now","is_own":true}"#,
        )
        .unwrap();
        assert_eq!(message.id, MessageId(7));
        assert_eq!(message.decoration, Decoration::default());
    }
}
