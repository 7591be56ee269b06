use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::ui::layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::EffectsReady { assets } => {
            // One turn behind the trigger by construction: the burst starts
            // against whatever the container looks like now.
            let origin = burst_origin(state);
            state.confetti.pop(&assets, origin);
            state.dirty = true;
            vec![]
        }
        AppEvent::LocaleLoaded { tag, table } => {
            tracing::info!(%tag, strings = table.len(), "locale bundle merged");
            state.localizer.merge_bundle(tag, table);
            state.dirty = true;
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    let dt = state.config.ui.tick_rate_ms as f32 / 1000.0;
    if state.confetti.tick(dt) {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, cevent: CEvent) -> Vec<Action> {
    match cevent {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(w, h) => {
            state.term_size = (w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return vec![Action::Quit];
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right | KeyCode::Up => {
            state.apply_increase().into_iter().collect()
        }
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => {
            state.apply_decrease().into_iter().collect()
        }
        KeyCode::Tab | KeyCode::BackTab => {
            state.cycle_focus();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => activate(state, state.focus),
        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return vec![];
    }
    let (w, h) = state.term_size;
    let app_layout = layout::compute_layout(Rect::new(0, 0, w, h));
    let pos = Position::new(mouse.column, mouse.row);
    if app_layout.decrement.contains(pos) {
        state.focus = Control::Decrement;
        activate(state, Control::Decrement)
    } else if app_layout.increment.contains(pos) {
        state.focus = Control::Increment;
        activate(state, Control::Increment)
    } else {
        vec![]
    }
}

fn activate(state: &mut AppState, control: Control) -> Vec<Action> {
    let action = match control {
        Control::Decrement => state.apply_decrease(),
        Control::Increment => state.apply_increase(),
    };
    action.into_iter().collect()
}

/// Burst origin: center of the counter display, in absolute cells.
fn burst_origin(state: &AppState) -> (f32, f32) {
    let (w, h) = state.term_size;
    let counter = layout::compute_layout(Rect::new(0, 0, w, h)).counter;
    (
        counter.x as f32 + counter.width as f32 / 2.0,
        counter.y as f32 + counter.height as f32 / 2.0,
    )
}
