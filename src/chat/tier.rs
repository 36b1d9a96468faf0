use serde::{Deserialize, Serialize};

use crate::common::{ChannelEntry, Classification, Decoration, Rgb, Shape};

use super::fixtures::{
    BUSINESS_CHANNELS, BUSINESS_MESSAGES, ENTERPRISE_CHANNELS, ENTERPRISE_MESSAGES, FREE_CHANNELS,
    FREE_MESSAGES, FixtureMessage, PRO_CHANNELS, PRO_MESSAGES,
};

/// Plan tier of a chat page. Each tier is an independent variant with its
/// own fixtures.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    #[default]
    Free,
    Pro,
    Business,
    Enterprise,
}

impl Tier {
    pub const ALL: [Self; 4] = [Self::Free, Self::Pro, Self::Business, Self::Enterprise];

    pub const fn title(self) -> &'static str {
        match self {
            Self::Free => "Free",
            Self::Pro => "Pro",
            Self::Business => "Business",
            Self::Enterprise => "Enterprise",
        }
    }

    pub const fn plan_label(self) -> &'static str {
        match self {
            Self::Free => "Free Plan",
            Self::Pro => "Pro Plan",
            Self::Business => "Business Plan",
            Self::Enterprise => "Enterprise Plan",
        }
    }

    pub const fn fixtures(self) -> &'static [FixtureMessage] {
        match self {
            Self::Free => FREE_MESSAGES,
            Self::Pro => PRO_MESSAGES,
            Self::Business => BUSINESS_MESSAGES,
            Self::Enterprise => ENTERPRISE_MESSAGES,
        }
    }

    pub const fn channels(self) -> &'static [ChannelEntry] {
        match self {
            Self::Free => FREE_CHANNELS,
            Self::Pro => PRO_CHANNELS,
            Self::Business => BUSINESS_CHANNELS,
            Self::Enterprise => ENTERPRISE_CHANNELS,
        }
    }

    /// Channel highlighted when the page opens. The free plan has a single
    /// current chat and no selection.
    pub const fn default_channel(self) -> Option<&'static str> {
        match self {
            Self::Free => None,
            Self::Pro => Some("ai-assistant"),
            Self::Business => Some("team-alpha"),
            Self::Enterprise => Some("global-ops"),
        }
    }

    pub const fn accent(self) -> Rgb {
        match self {
            Self::Free | Self::Pro => Rgb::TEAL,
            Self::Business => Rgb::hex(0x3b82f6),
            Self::Enterprise => Rgb::hex(0x8b5cf6),
        }
    }

    pub const fn has_daily_quota(self) -> bool {
        matches!(self, Self::Free)
    }

    /// Decoration stamped on messages sent from this tier. Only the free
    /// plan leaves the color to the renderer default.
    pub fn outgoing_decoration(self, security_level: Classification) -> Decoration {
        Decoration {
            shape: Some(Shape::Torus),
            color: (!matches!(self, Self::Free)).then_some(self.accent()),
            role: None,
            classification: matches!(self, Self::Enterprise).then_some(security_level),
        }
    }
}
