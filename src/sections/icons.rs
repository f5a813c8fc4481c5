//! Finite icon vocabulary for the content tables.
//!
//! Table rows reference a variant, not a string key, so a row can only
//! name an icon that exists. Resolution to a glyph happens at render time.

/// Every pictogram the site renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertTriangle,
    BarChart,
    Bot,
    Brain,
    Cloud,
    Database,
    FileText,
    Github,
    HandCoins,
    Headset,
    Instagram,
    Lightbulb,
    LineChart,
    Linkedin,
    Mail,
    MessageCircle,
    PieChart,
    Shield,
    Smartphone,
    Target,
    TrendingDown,
    TrendingUp,
    UserPlus,
    Users,
    Wrench,
    Zap,
}

impl Icon {
    /// Display glyph, rendered inside the icon badge.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::AlertTriangle => "⚠",
            Icon::BarChart => "📊",
            Icon::Bot => "🤖",
            Icon::Brain => "🧠",
            Icon::Cloud => "☁",
            Icon::Database => "🗄",
            Icon::FileText => "📄",
            Icon::Github => "🐙",
            Icon::HandCoins => "🪙",
            Icon::Headset => "🎧",
            Icon::Instagram => "📷",
            Icon::Lightbulb => "💡",
            Icon::LineChart => "〽",
            Icon::Linkedin => "💼",
            Icon::Mail => "✉",
            Icon::MessageCircle => "💬",
            Icon::PieChart => "◔",
            Icon::Shield => "🛡",
            Icon::Smartphone => "📱",
            Icon::Target => "🎯",
            Icon::TrendingDown => "📉",
            Icon::TrendingUp => "📈",
            Icon::UserPlus => "🙋",
            Icon::Users => "👥",
            Icon::Wrench => "🔧",
            Icon::Zap => "⚡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: &[Icon] = &[
        Icon::AlertTriangle,
        Icon::BarChart,
        Icon::Bot,
        Icon::Brain,
        Icon::Cloud,
        Icon::Database,
        Icon::FileText,
        Icon::Github,
        Icon::HandCoins,
        Icon::Headset,
        Icon::Instagram,
        Icon::Lightbulb,
        Icon::LineChart,
        Icon::Linkedin,
        Icon::Mail,
        Icon::MessageCircle,
        Icon::PieChart,
        Icon::Shield,
        Icon::Smartphone,
        Icon::Target,
        Icon::TrendingDown,
        Icon::TrendingUp,
        Icon::UserPlus,
        Icon::Users,
        Icon::Wrench,
        Icon::Zap,
    ];

    #[test]
    fn test_every_icon_has_a_glyph() {
        for icon in ALL {
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_glyphs_are_distinct() {
        let glyphs: HashSet<_> = ALL.iter().map(|icon| icon.glyph()).collect();
        assert_eq!(glyphs.len(), ALL.len());
    }
}
