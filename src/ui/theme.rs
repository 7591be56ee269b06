use crate::app::state::Tone;
use ratatui::style::{Color, Modifier, Style};

/// Named design tokens. Widgets reference these by name; the raw values
/// are local fallbacks onto the terminal palette.
pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;
    pub const TEXT: Color = Color::White;
    pub const DIM: Color = Color::DarkGray;
    pub const DISABLED: Color = Color::Red;

    // Counter accents by tone
    pub const LUCKY_GREEN: Color = Color::Green;
    pub const BLACKJACK_BLUE: Color = Color::LightBlue;
    pub const BOUNDARY_YELLOW: Color = Color::Yellow;

    pub fn border() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::TEXT).add_modifier(Modifier::BOLD)
    }

    /// Counter display color, keyed off the reflected tone.
    pub fn counter(tone: Tone) -> Style {
        let color = match tone {
            Tone::Lucky => Self::LUCKY_GREEN,
            Tone::Blackjack => Self::BLACKJACK_BLUE,
            Tone::Boundary => Self::BOUNDARY_YELLOW,
            Tone::Neutral => Self::TEXT,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn button() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn button_focused() -> Style {
        Style::default().fg(Self::ACCENT).add_modifier(Modifier::BOLD)
    }

    pub fn button_disabled() -> Style {
        Style::default().fg(Self::DISABLED).add_modifier(Modifier::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Color::DarkGray)
    }

    pub fn hint_key() -> Style {
        Style::default().fg(Self::ACCENT).bg(Color::DarkGray)
    }
}
