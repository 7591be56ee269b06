use crate::app::state::{AppState, COUNTER_MAX};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    let hints = [
        ("+", state.localizer.text("increase", "increase")),
        ("-", state.localizer.text("decrease", "decrease")),
        ("Tab", "focus"),
        ("Enter", "press"),
        ("q", state.localizer.text("quit", "quit")),
    ];
    for (key, label) in hints {
        parts.push(Span::styled(format!(" {} ", key), Theme::hint_key()));
        parts.push(Span::styled(format!("{} ", label), Theme::status_bar()));
    }

    // Right-aligned value readout, colored like the counter itself; the
    // active locale tag shows which bundle is loaded
    let readout = match state.localizer.active() {
        Some(tag) => format!(" {} · {}/{} ", tag, state.counter.value(), COUNTER_MAX),
        None => format!(" {}/{} ", state.counter.value(), COUNTER_MAX),
    };
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + readout.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        readout,
        Theme::counter(state.tone).bg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(parts)).style(Theme::status_bar());
    frame.render_widget(paragraph, area);
}
