mod app;
pub mod export;
mod markdown;
mod text;
mod theme;
mod ui;
mod views;

use anyhow::Result;
use app::App;
use crossterm::{
    ExecutableCommand,
    event::{self, Event, KeyEventKind},
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use podview_core::Catalog;
use podview_runtime_config::DisplaySettings;
use ratatui::prelude::*;
use std::io::stdout;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub display: DisplaySettings,
    /// Episode to open instead of the first one.
    pub episode: Option<String>,
    pub model: Option<String>,
}

/// Launch the viewer. Blocks until the user quits.
pub fn run_with_options(catalog: Catalog, options: RunOptions) -> Result<()> {
    let mut app = App::new(catalog, options.display);
    if let Some(id) = options.episode.as_deref() {
        app.controller.select_episode(id);
    }
    if let Some(model) = options.model.as_deref() {
        app.controller.select_model(model);
    }
    app.sync_list_selection();
    tracing::info!(
        episodes = app.catalog().len(),
        episode = %app.controller.state().episode_id,
        "starting viewer"
    );

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.handle_key(key.code) {
                    break;
                }
            }
        }
    }
    Ok(())
}
