use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let paragraph = Paragraph::new(state.title())
        .style(Theme::title())
        .centered();
    frame.render_widget(paragraph, area);
}
