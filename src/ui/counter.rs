use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default().padding(Padding::top(area.height.saturating_sub(1) / 2));
    let paragraph = Paragraph::new(state.counter.value().to_string())
        .style(Theme::counter(state.tone))
        .centered()
        .block(block);
    frame.render_widget(paragraph, area);
}
