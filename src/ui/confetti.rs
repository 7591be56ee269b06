use crate::app::state::AppState;
use ratatui::layout::Position;
use ratatui::prelude::*;

/// Paint live confetti over whatever was already rendered in `area`.
/// Drawn last so particles fly above the card.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if !state.confetti.is_active() {
        return;
    }
    let buf = frame.buffer_mut();
    for (x, y, glyph, color) in state.confetti.cells() {
        if x < 0 || y < 0 {
            continue;
        }
        let pos = Position::new(x as u16, y as u16);
        if !area.contains(pos) {
            continue;
        }
        if let Some(cell) = buf.cell_mut(pos) {
            cell.set_char(glyph);
            cell.set_fg(color);
        }
    }
}
