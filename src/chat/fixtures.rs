//! Seed data for the chat pages. Every page copies these into its own state.

use crate::common::{
    ChannelEntry, ChatMessage, Classification, Decoration, MessageId, Priority, Rgb, Shape,
};

#[derive(Debug, Clone, Copy)]
pub struct FixtureMessage {
    pub id: u64,
    pub sender: &'static str,
    pub content: &'static str,
    pub time: &'static str,
    pub is_own: bool,
    pub shape: Option<Shape>,
    pub color: Option<Rgb>,
    pub role: Option<&'static str>,
    pub classification: Option<Classification>,
}

impl FixtureMessage {
    const fn plain(id: u64, sender: &'static str, content: &'static str, time: &'static str) -> Self {
        Self {
            id,
            sender,
            content,
            time,
            is_own: false,
            shape: None,
            color: None,
            role: None,
            classification: None,
        }
    }

    const fn own(mut self) -> Self {
        self.is_own = true;
        self
    }

    const fn shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    const fn color(mut self, color: u32) -> Self {
        self.color = Some(Rgb::hex(color));
        self
    }

    const fn role(mut self, role: &'static str) -> Self {
        self.role = Some(role);
        self
    }

    const fn classification(mut self, classification: Classification) -> Self {
        self.classification = Some(classification);
        self
    }

    pub fn to_message(&self) -> ChatMessage {
        ChatMessage {
            id: MessageId(self.id),
            sender: self.sender.to_string(),
            content: self.content.to_string(),
            timestamp: self.time.to_string(),
            is_own: self.is_own,
            decoration: Decoration {
                shape: self.shape,
                color: self.color,
                role: self.role.map(str::to_string),
                classification: self.classification,
            },
        }
    }
}

pub const FREE_MESSAGES: &[FixtureMessage] = &[
    FixtureMessage::plain(
        1,
        "AI Assistant",
        "Welcome to ChatFlow! How can I help you today?",
        "10:30 AM",
    )
    .shape(Shape::Torus),
    FixtureMessage::plain(2, "You", "I need help with 3D modeling", "10:32 AM")
        .own()
        .shape(Shape::Sphere),
    FixtureMessage::plain(
        3,
        "AI Assistant",
        "I'd be happy to help with 3D modeling! What specific aspect would you like to explore?",
        "10:33 AM",
    )
    .shape(Shape::Box),
];

pub const PRO_MESSAGES: &[FixtureMessage] = &[
    FixtureMessage::plain(
        1,
        "AI Pro",
        "Welcome to ChatFlow Pro! I can help you with advanced 3D modeling, animations, and more.",
        "10:30 AM",
    )
    .shape(Shape::Octahedron)
    .color(0x8b5cf6),
    FixtureMessage::plain(2, "You", "Can you help me create a complex 3D scene?", "10:32 AM")
        .own()
        .shape(Shape::Dodecahedron)
        .color(0x14b8a6),
    FixtureMessage::plain(
        3,
        "AI Pro",
        "I can generate advanced 3D models, lighting setups, and even animations. What type of scene are you envisioning?",
        "10:33 AM",
    )
    .shape(Shape::Sphere)
    .color(0xf59e0b),
];

pub const BUSINESS_MESSAGES: &[FixtureMessage] = &[
    FixtureMessage::plain(
        1,
        "Business AI",
        "Welcome to ChatFlow Business! I can help with team collaboration, project management, and business analytics.",
        "2:50 PM",
    )
    .role("AI Assistant")
    .shape(Shape::Cylinder)
    .color(0x3b82f6),
    FixtureMessage::plain(
        2,
        "You",
        "Can you help analyze our team's 3D project progress?",
        "2:52 PM",
    )
    .own()
    .shape(Shape::Octahedron)
    .color(0x8b5cf6),
    FixtureMessage::plain(
        3,
        "Business AI",
        "I can provide detailed analytics on project timelines, resource allocation, and team performance metrics.",
        "2:53 PM",
    )
    .role("AI Assistant")
    .shape(Shape::Cone)
    .color(0x10b981),
];

pub const ENTERPRISE_MESSAGES: &[FixtureMessage] = &[
    FixtureMessage::plain(
        1,
        "Enterprise AI",
        "Secure connection established. Welcome to ChatFlow Enterprise Command Center.",
        "3:55 PM",
    )
    .role("AI System")
    .classification(Classification::Classified)
    .shape(Shape::Icosahedron)
    .color(0x8b5cf6),
    FixtureMessage::plain(2, "You", "Requesting global operations status report", "3:56 PM")
        .own()
        .classification(Classification::Confidential)
        .shape(Shape::Tetrahedron)
        .color(0xec4899),
    FixtureMessage::plain(
        3,
        "Security Chief",
        "All global systems operational. Security protocols active across 47 regions.",
        "3:57 PM",
    )
    .role("Security")
    .classification(Classification::TopSecret)
    .shape(Shape::Octahedron)
    .color(0xef4444),
];

const fn channel(
    id: &'static str,
    name: &'static str,
    last_message: &'static str,
    time: &'static str,
    unread: u32,
) -> ChannelEntry {
    ChannelEntry {
        id,
        name,
        last_message,
        time,
        unread,
        members: None,
        priority: None,
        classification: None,
        online: None,
    }
}

pub const FREE_CHANNELS: &[ChannelEntry] = &[
    channel("tutorial", "3D Model Tutorial", "Learn basic 3D modeling...", "2h ago", 0),
    channel("animation", "Animation Basics", "Understanding keyframes...", "1d ago", 0),
    channel("lighting", "Lighting Setup", "Professional lighting...", "2d ago", 0),
];

pub const PRO_CHANNELS: &[ChannelEntry] = &[
    ChannelEntry {
        online: Some(true),
        ..channel("ai-assistant", "AI Pro Assistant", "Advanced 3D modeling help", "10:33", 0)
    },
    ChannelEntry {
        online: Some(true),
        ..channel("team", "3D Design Team", "New project discussion", "09:45", 2)
    },
    ChannelEntry {
        online: Some(false),
        ..channel("mentor", "Pro Mentor", "Advanced techniques", "Yesterday", 0)
    },
];

pub const BUSINESS_CHANNELS: &[ChannelEntry] = &[
    ChannelEntry {
        members: Some(12),
        priority: Some(Priority::High),
        ..channel("team-alpha", "Team Alpha", "Project analytics ready", "2:53 PM", 3)
    },
    ChannelEntry {
        members: Some(8),
        priority: Some(Priority::Medium),
        ..channel("project-beta", "Project Beta", "Deadline moved to Friday", "1:30 PM", 0)
    },
    ChannelEntry {
        members: Some(5),
        priority: Some(Priority::Urgent),
        ..channel("executives", "Executive Board", "Q4 results discussion", "11:45 AM", 1)
    },
];

pub const ENTERPRISE_CHANNELS: &[ChannelEntry] = &[
    ChannelEntry {
        members: Some(47),
        classification: Some(Classification::Classified),
        ..channel("global-ops", "Global Operations", "Security protocols active", "3:57 PM", 2)
    },
    ChannelEntry {
        members: Some(12),
        classification: Some(Classification::TopSecret),
        ..channel("exec-board", "Executive Board", "Strategic review approved", "2:30 PM", 0)
    },
    ChannelEntry {
        members: Some(23),
        classification: Some(Classification::Classified),
        ..channel("security-ops", "Security Operations", "Threat assessment complete", "1:15 PM", 1)
    },
];

/// Quick prompts offered by the pro assistant panel.
pub const PRO_SUGGESTIONS: &[(&str, &str)] = &[
    ("🎯", "Generate 3D model"),
    ("🎬", "Create animation"),
    ("⚡", "Optimize scene"),
    ("📦", "Export formats"),
];
