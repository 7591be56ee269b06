use ratatui::layout::{Constraint, Direction, Layout, Rect};

const CARD_WIDTH: u16 = 44;
const CARD_HEIGHT: u16 = 12;
const BUTTON_WIDTH: u16 = 10;
const BUTTON_GAP: u16 = 4;

pub struct AppLayout {
    pub title_bar: Rect,
    pub content: Rect,
    pub card: Rect,
    pub counter: Rect,
    pub decrement: Rect,
    pub increment: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: title | content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    let title_bar = main_chunks[0];
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    let card = centered(content, CARD_WIDTH, CARD_HEIGHT);

    // Inside the card border: counter display on top, button row below
    let inner = Rect {
        x: card.x + 1,
        y: card.y + 1,
        width: card.width.saturating_sub(2),
        height: card.height.saturating_sub(2),
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(3)])
        .split(inner);

    let counter = rows[0];
    let button_row = rows[1];

    let pair_width = BUTTON_WIDTH * 2 + BUTTON_GAP;
    let bx = button_row.x + button_row.width.saturating_sub(pair_width) / 2;
    let button_width = BUTTON_WIDTH.min(button_row.width / 2);
    let decrement = Rect::new(bx, button_row.y, button_width, button_row.height);
    let increment = Rect::new(
        bx + button_width + BUTTON_GAP.min(button_row.width.saturating_sub(button_width * 2)),
        button_row.y,
        button_width,
        button_row.height,
    );

    AppLayout {
        title_bar,
        content,
        card,
        counter,
        decrement,
        increment,
        status_bar,
    }
}

/// Center a `width` x `height` box inside `area`, shrinking to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
