use crate::{foundation::core::Rgba8Premul, visual::model::Background};

/// Brand colors shared by every pitch scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Indigo brand color.
    pub primary: Rgba8Premul,
    /// Darker indigo.
    pub primary_dark: Rgba8Premul,
    /// Lighter indigo.
    pub primary_light: Rgba8Premul,
    /// Emerald accent.
    pub accent: Rgba8Premul,
    /// Lighter emerald.
    pub accent_light: Rgba8Premul,
    /// Darkest backdrop.
    pub bg_dark: Rgba8Premul,
    /// Card and panel fill.
    pub bg_card: Rgba8Premul,
    /// Backdrop gradient start.
    pub bg_gradient_start: Rgba8Premul,
    /// Backdrop gradient end.
    pub bg_gradient_end: Rgba8Premul,
    /// Headline text.
    pub text_primary: Rgba8Premul,
    /// Supporting text.
    pub text_secondary: Rgba8Premul,
    /// De-emphasized text.
    pub text_muted: Rgba8Premul,
    /// Chart series colors.
    pub chart: [Rgba8Premul; 5],
}

/// The pitch palette.
pub const COLORS: Colors = Colors {
    primary: Rgba8Premul::from_hex_rgb(0x6366F1),
    primary_dark: Rgba8Premul::from_hex_rgb(0x4F46E5),
    primary_light: Rgba8Premul::from_hex_rgb(0x818CF8),
    accent: Rgba8Premul::from_hex_rgb(0x10B981),
    accent_light: Rgba8Premul::from_hex_rgb(0x34D399),
    bg_dark: Rgba8Premul::from_hex_rgb(0x0F0F23),
    bg_card: Rgba8Premul::from_hex_rgb(0x1A1A2E),
    bg_gradient_start: Rgba8Premul::from_hex_rgb(0x0F0F23),
    bg_gradient_end: Rgba8Premul::from_hex_rgb(0x1E1E3F),
    text_primary: Rgba8Premul::from_hex_rgb(0xFFFFFF),
    text_secondary: Rgba8Premul::from_hex_rgb(0xA0AEC0),
    text_muted: Rgba8Premul::from_hex_rgb(0x6B7280),
    chart: [
        Rgba8Premul::from_hex_rgb(0x6366F1),
        Rgba8Premul::from_hex_rgb(0x10B981),
        Rgba8Premul::from_hex_rgb(0xF59E0B),
        Rgba8Premul::from_hex_rgb(0xEF4444),
        Rgba8Premul::from_hex_rgb(0x8B5CF6),
    ],
};

/// Font stacks the renderer should use per [`crate::TextRole`] family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fonts {
    /// Titles and headings.
    pub title: &'static str,
    /// Body copy.
    pub body: &'static str,
    /// Code and command text.
    pub mono: &'static str,
}

/// The pitch font stacks.
pub const FONTS: Fonts = Fonts {
    title: "Inter, system-ui, sans-serif",
    body: "Inter, system-ui, sans-serif",
    mono: "JetBrains Mono, monospace",
};

/// Diagonal backdrop gradient used behind every scene.
pub fn backdrop() -> Background {
    Background::LinearGradient {
        angle_deg: 135.0,
        from: COLORS.bg_gradient_start,
        to: COLORS.bg_gradient_end,
    }
}

