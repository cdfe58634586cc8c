//! World map canvas centered on the active region

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::{Canvas, Map, MapResolution};
use ratatui::widgets::{Block, Borders};

use crate::app::App;

/// Render the map with a marker at the resolved place, or at the region
/// center while nothing is resolved yet
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let marker = app
        .snapshot
        .as_ref()
        .map_or_else(|| app.region.center(), |snapshot| snapshot.place.position);

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Map"))
        .x_bounds(app.region.x_bounds())
        .y_bounds(app.region.y_bounds())
        .paint(move |ctx| {
            ctx.draw(&Map {
                color: Color::Green,
                resolution: MapResolution::High,
            });
            ctx.print(
                marker.longitude(),
                marker.latitude(),
                Line::styled(
                    "●",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
            );
        });

    frame.render_widget(canvas, area);
}
