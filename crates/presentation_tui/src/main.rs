//! herecast terminal UI
//!
//! Geolocates the device by IP, resolves the nearest known place and
//! renders its forecast over a world map.

mod app;
mod ui;

use std::io;
use std::sync::Arc;
use std::time::Duration;

use app::App;
use application::ForecastService;
use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use infrastructure::{AppConfig, GeolocationAdapter, WeatherAdapter};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// herecast terminal weather
#[derive(Parser)]
#[command(name = "herecast")]
#[command(author, version, about = "Local weather over a map, in the terminal", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file name, read as <name>.toml when present
    #[arg(short, long, default_value = "config")]
    config: String,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity, kept on stderr so the
    // alternate screen stays clean
    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = AppConfig::load_from(&cli.config)?;

    let geolocation = GeolocationAdapter::with_config(config.geoip.to_geoip_config())?;
    let weather = WeatherAdapter::with_config(config.weather.to_weather_config())?;
    let service = ForecastService::new(Arc::new(geolocation), Arc::new(weather));

    let region = config.ui.to_map_region()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let mut app = App::new(Arc::new(service), region);
    app.request_refresh();

    // Set up the terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, tick_rate).await;

    // Restore the terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Draw and poll until the user quits
async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    tick_rate: Duration,
) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let ctrl_c = key.modifiers.contains(KeyModifiers::CONTROL)
                        && key.code == KeyCode::Char('c');
                    if ctrl_c || app.handle_key(key) {
                        return Ok(());
                    }
                }
            }
        }

        app.tick();
    }
}
