use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of the task input box, borders included.
pub const INPUT_HEIGHT: u16 = 12;

pub struct AppAreas {
    pub header: Rect,
    pub input: Rect,
    pub submit: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn split(area: Rect) -> AppAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),            // Header
            Constraint::Length(INPUT_HEIGHT), // Task input
            Constraint::Length(2),            // Submit button + hint
            Constraint::Min(0),               // Lifecycle area
            Constraint::Length(1),            // Footer
        ])
        .split(area);

    AppAreas {
        header: chunks[0],
        input: chunks[1],
        submit: chunks[2],
        body: chunks[3],
        footer: chunks[4],
    }
}
