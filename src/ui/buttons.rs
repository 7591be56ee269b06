use crate::app::state::{AppState, Control};
use crate::ui::layout::AppLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &AppLayout, state: &AppState) {
    button(
        frame,
        layout.decrement,
        "-1",
        state.focus == Control::Decrement,
        state.counter.at_min(),
    );
    button(
        frame,
        layout.increment,
        "+1",
        state.focus == Control::Increment,
        state.counter.at_max(),
    );
}

fn button(frame: &mut Frame, area: Rect, label: &str, focused: bool, disabled: bool) {
    let (border_style, label_style) = if disabled {
        (Theme::button_disabled(), Theme::button_disabled())
    } else if focused {
        (Theme::border_focused(), Theme::button_focused())
    } else {
        (Theme::border(), Theme::button())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(label).style(label_style).centered();
    frame.render_widget(paragraph, inner);
}
