//! Header, weather panels and key hints

use application::{DailyWeather, WeatherSnapshot};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, TEMPERATURE_PLACEHOLDER};

/// App name, location line and refresh indicator
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let location_style = if app.error.is_some() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![
        Span::styled(
            "herecast",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.location_label(), location_style),
    ];
    if app.refreshing {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            "refreshing...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Current conditions for the resolved place
pub fn render_current(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Current conditions ({})", app.unit));

    let lines = app.snapshot.as_ref().map_or_else(
        || vec![Line::from(TEMPERATURE_PLACEHOLDER)],
        |snapshot| current_lines(snapshot, app),
    );

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn current_lines(snapshot: &WeatherSnapshot, app: &App) -> Vec<Line<'static>> {
    let Some(day) = snapshot.current() else {
        return vec![Line::from(TEMPERATURE_PLACEHOLDER)];
    };

    let mut conditions = format!(
        "Wind {:.1} mph {}   Humidity {}%   Pressure {:.0} mbar",
        day.wind_speed, day.wind_direction, day.humidity, day.air_pressure
    );
    if let Some(visibility) = day.visibility {
        conditions.push_str(&format!("   Visibility {visibility:.1} mi"));
    }

    vec![
        Line::from(vec![
            Span::styled(
                app.temperature_label(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                "  {} {}",
                day.state.emoji(),
                day.state.description()
            )),
        ]),
        Line::from(format!(
            "High {}   Low {}   Predictability {}%",
            day.temp_max.display(app.unit),
            day.temp_min.display(app.unit),
            day.predictability
        )),
        Line::from(conditions),
        Line::from(format!(
            "Sunrise {}   Sunset {}   {}",
            snapshot.forecast.sun_rise.format("%H:%M"),
            snapshot.forecast.sun_set.format("%H:%M"),
            snapshot.forecast.timezone
        )),
    ]
}

/// Short daily forecast as a row of cards
pub fn render_forecast(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Forecast");

    let days: &[DailyWeather] = app
        .snapshot
        .as_ref()
        .map_or(&[], |snapshot| snapshot.forecast.days.as_slice());

    if days.is_empty() {
        frame.render_widget(Paragraph::new(TEMPERATURE_PLACEHOLDER).block(block), area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let count = days.len().min(6);
    #[allow(clippy::cast_possible_truncation)]
    let denominator = count as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, denominator); count])
        .split(inner);

    for (day, column) in days.iter().take(count).zip(columns.iter()) {
        let lines = vec![
            Line::from(day.date.format("%a").to_string()),
            Line::from(format!(
                "{} {}",
                day.state.emoji(),
                day.state.description()
            )),
            Line::from(format!(
                "{} / {}",
                day.temp_max.display(app.unit),
                day.temp_min.display(app.unit)
            )),
        ];
        frame.render_widget(Paragraph::new(lines).centered(), *column);
    }
}

/// Key hints
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hints = Line::from(vec![
        Span::styled("q", key_style),
        Span::raw(" quit   "),
        Span::styled("u", key_style),
        Span::raw(" toggle unit   "),
        Span::styled("r", key_style),
        Span::raw(" refresh"),
    ]);

    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}
