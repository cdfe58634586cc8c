//! Rendering for the terminal UI

mod map;
mod panels;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

/// Draw the whole screen: header, map, current conditions, forecast strip
/// and key hints
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(10),
            Constraint::Length(6),
            Constraint::Length(5),
            Constraint::Length(1),
        ])
        .split(frame.area());

    panels::render_header(frame, app, chunks[0]);
    map::render(frame, app, chunks[1]);
    panels::render_current(frame, app, chunks[2]);
    panels::render_forecast(frame, app, chunks[3]);
    panels::render_footer(frame, chunks[4]);
}
