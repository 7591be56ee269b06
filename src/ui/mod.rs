mod buttons;
mod confetti;
mod counter;
pub mod layout;
mod status_bar;
mod theme;
mod title_bar;

use crate::app::state::AppState;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders};
use theme::Theme;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    title_bar::render(frame, app_layout.title_bar, state);

    let card = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());
    frame.render_widget(card, app_layout.card);

    counter::render(frame, app_layout.counter, state);
    buttons::render(frame, &app_layout, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Overlay goes last so particles land on top of the card.
    confetti::render(frame, app_layout.content, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Counter, Tone};
    use crate::config::AppConfig;
    use crate::effects::ConfettiAssets;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::layout::{Position, Rect};
    use ratatui::Terminal;

    fn state() -> AppState {
        AppState::new(AppConfig::default())
    }

    fn draw(state: &AppState) -> Buffer {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.cell(Position::new(x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    fn text_in(buf: &Buffer, rect: Rect) -> String {
        let mut out = String::new();
        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                out.push_str(buf.cell(Position::new(x, y)).unwrap().symbol());
            }
        }
        out
    }

    fn force_value(state: &mut AppState, value: u8) {
        state.counter = Counter::with_value(value);
        state.tone = Tone::for_value(value);
    }

    #[test]
    fn default_render_shows_value_title_and_labeled_controls() {
        let buf = draw(&state());
        let text = buffer_text(&buf);
        assert!(text.contains("Counter"));
        assert!(text.contains("16/25"));
        assert!(text.contains("-1"));
        assert!(text.contains("+1"));
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(text_in(&buf, app_layout.counter).trim(), "16");
    }

    #[test]
    fn every_control_carries_a_text_label() {
        // accessibility audit: both interactive controls are labeled and
        // every key binding is named in the status bar
        let buf = draw(&state());
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24));
        assert!(text_in(&buf, app_layout.decrement).contains("-1"));
        assert!(text_in(&buf, app_layout.increment).contains("+1"));
        let hints = text_in(&buf, app_layout.status_bar);
        for word in ["increase", "decrease", "focus", "press", "quit"] {
            assert!(hints.contains(word), "status bar missing hint {word:?}");
        }
    }

    #[test]
    fn blackjack_render_shows_21_in_its_accent() {
        let mut s = state();
        force_value(&mut s, 21);
        let buf = draw(&s);
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24));
        let counter_rect = app_layout.counter;
        assert_eq!(text_in(&buf, counter_rect).trim(), "21");

        // the digit cells carry the blackjack accent color
        let mut accent_cells = 0;
        for y in counter_rect.top()..counter_rect.bottom() {
            for x in counter_rect.left()..counter_rect.right() {
                let cell = buf.cell(Position::new(x, y)).unwrap();
                if cell.symbol() != " " && cell.fg == Theme::BLACKJACK_BLUE {
                    accent_cells += 1;
                }
            }
        }
        assert_eq!(accent_cells, 2);
    }

    #[test]
    fn floor_render_disables_decrement() {
        let mut s = state();
        force_value(&mut s, 0);
        let buf = draw(&s);
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(text_in(&buf, app_layout.counter).trim(), "0");

        // decrement border is painted with the disabled token
        let corner = buf
            .cell(Position::new(app_layout.decrement.x, app_layout.decrement.y))
            .unwrap();
        assert_eq!(corner.fg, Theme::DISABLED);
        // increment stays live
        let corner = buf
            .cell(Position::new(app_layout.increment.x, app_layout.increment.y))
            .unwrap();
        assert_ne!(corner.fg, Theme::DISABLED);
    }

    #[test]
    fn ceiling_render_disables_increment() {
        let mut s = state();
        force_value(&mut s, 25);
        let buf = draw(&s);
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24));
        let corner = buf
            .cell(Position::new(app_layout.increment.x, app_layout.increment.y))
            .unwrap();
        assert_eq!(corner.fg, Theme::DISABLED);
    }

    #[test]
    fn confetti_overlay_paints_particles() {
        let mut s = state();
        let app_layout = layout::compute_layout(Rect::new(0, 0, 80, 24));
        let origin = (
            app_layout.counter.x as f32 + app_layout.counter.width as f32 / 2.0,
            app_layout.counter.y as f32 + app_layout.counter.height as f32 / 2.0,
        );
        s.confetti.pop(&ConfettiAssets::builtin(), origin);
        let buf = draw(&s);
        // at age zero every particle still sits at the origin cell, which
        // rounds the same way the overlay does
        let origin_cell = buf
            .cell(Position::new(
                origin.0.round() as u16,
                origin.1.round() as u16,
            ))
            .unwrap();
        assert_ne!(origin_cell.symbol(), " ");
    }

    #[test]
    fn localized_title_overrides_configured_one() {
        let mut s = state();
        s.localizer.merge_bundle(
            "es".into(),
            crate::i18n::StringTable::from_json(r#"{"title": "Contador"}"#).unwrap(),
        );
        let text = buffer_text(&draw(&s));
        assert!(text.contains("Contador"));
        assert!(!text.contains("Counter"));
    }
}
