mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use featsent_providers::SentimentAnalyzer;
use featsent_runtime::DashboardSession;
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use app::AppState;

/// Interactive dashboard over a `DashboardSession`.
pub struct DashboardTui {
    state: AppState,
}

impl DashboardTui {
    pub fn new(session: DashboardSession, default_csv: PathBuf) -> Self {
        Self {
            state: AppState::new(session, default_csv),
        }
    }

    pub fn run(mut self, analyzer: &dyn SentimentAnalyzer) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = event_loop(&mut terminal, &mut self.state, analyzer);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState,
    analyzer: &dyn SentimentAnalyzer,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while !state.should_quit {
        terminal.draw(|f| ui::draw(f, state))?;

        if !event::poll(tick_rate)? {
            continue;
        }

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                state.should_quit = true;
            }
            KeyCode::Char('d') => state.load_default(),
            KeyCode::Char('r') => {
                if state.begin_analysis() {
                    // Show the running notice before the analyzer blocks.
                    terminal.draw(|f| ui::draw(f, state))?;
                    state.finish_analysis(analyzer);
                }
            }
            KeyCode::Down | KeyCode::Char('j') => state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => state.scroll_up(),
            _ => {}
        }
    }

    Ok(())
}
