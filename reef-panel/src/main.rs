//! Reef Panel binary
//!
//! Run: reef-panel [server_url]
//! The server URL can also come from `REEF_SERVER_URL`.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use reef_client::ClientConfig;
use reef_panel::app::App;
use reef_panel::{ui, Panel};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Route tracing into the TUI log pane.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(tui_logger::tracing_subscriber_layer())
        .with(env_filter)
        .init();
    tui_logger::init_logger(log::LevelFilter::Info).ok();
    tui_logger::set_default_level(log::LevelFilter::Info);

    let base_url = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("REEF_SERVER_URL").ok())
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string());
    tracing::info!(base_url = %base_url, "connecting to backend");

    let client = ClientConfig::new(&base_url).build_client();
    let mut panel = Panel::new(client);
    // Initial menu load; a failure shows up in the status line and log pane.
    panel.refresh_dishes().await;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, App::new(panel)).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key).await;
            }
        }
        app.panel.tick(Instant::now());

        if app.should_quit {
            return Ok(());
        }
    }
}
