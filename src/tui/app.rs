//! Main TUI application.
//!
//! Handles:
//! - Terminal setup and teardown
//! - Input event handling
//! - Polling the submission worker and the startup health probe

use std::io;
use std::sync::mpsc::Receiver;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use crate::adapters::http::HttpRiskService;
use crate::application::{spawn_health_probe, PredictionForm, SubmitOutcome};
use crate::config::AppConfig;
use crate::domain::SubmissionError;
use crate::ports::RiskScoringService;

use super::ui::{
    assessment::render_assessment,
    form::{render_form, FormCursor},
    render_disclaimer, render_footer, render_header, ServiceStatus,
};

/// Main application state
pub struct App<S = HttpRiskService>
where
    S: RiskScoringService + 'static,
{
    /// Whether the app should quit
    should_quit: bool,

    /// The one form instance
    form: PredictionForm<S>,

    /// Selected field
    cursor: FormCursor,

    /// Last known reachability of the service
    service_status: ServiceStatus,

    /// Pending health probe (if running)
    health_rx: Option<Receiver<Result<String, SubmissionError>>>,
}

impl App<HttpRiskService> {
    /// Create the application against the configured HTTP service.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let service = Arc::new(HttpRiskService::new(&config.api_url)?);
        Ok(Self::with_service(service, config.min_loading))
    }
}

impl<S> App<S>
where
    S: RiskScoringService + 'static,
{
    /// Create the application around any scoring service.
    pub fn with_service(service: Arc<S>, min_loading: Duration) -> Self {
        let health_rx = Some(spawn_health_probe(Arc::clone(&service)));
        Self {
            should_quit: false,
            form: PredictionForm::new(service, min_loading),
            cursor: FormCursor::default(),
            service_status: ServiceStatus::Checking,
            health_rx,
        }
    }

    /// Run the main application loop.
    ///
    /// # Errors
    /// Returns error if terminal operations fail.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        // Release any in-flight request so it cannot settle after exit.
        self.form.new_assessment();

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        loop {
            self.poll_health();
            self.form.poll();

            terminal.draw(|f| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(2),  // Header
                        Constraint::Length(21), // Form
                        Constraint::Min(8),     // Status panel
                        Constraint::Length(2),  // Key hints
                        Constraint::Length(2),  // Disclaimer
                    ])
                    .split(f.area());

                render_header(
                    f,
                    chunks[0],
                    self.form.orchestrator().service().endpoint(),
                    &self.service_status,
                );
                render_form(f, chunks[1], self.form.raw(), self.cursor.field());
                render_assessment(f, chunks[2], self.form.state());
                render_footer(f, chunks[3], self.form.state(), self.form.is_ready());
                render_disclaimer(f, chunks[4]);
            })?;

            // Short poll to keep the loading gauge moving
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code, key.modifiers);
                    }
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn poll_health(&mut self) {
        let Some(rx) = self.health_rx.as_ref() else {
            return;
        };
        let Ok(outcome) = rx.try_recv() else {
            return;
        };

        self.service_status = match outcome {
            Ok(greeting) => {
                tracing::info!(greeting = %greeting, "Scoring service reachable");
                ServiceStatus::Online
            }
            Err(e) => {
                tracing::warn!(error = %e, "Scoring service probe failed");
                ServiceStatus::Offline(e.kind().to_string())
            }
        };
        self.health_rx = None;
    }

    fn handle_key(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        if key == KeyCode::Char('q') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        let field = self.cursor.field();
        match key {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::BackTab => self.cursor.prev(),
            KeyCode::Down | KeyCode::Tab => self.cursor.next(),
            KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                self.form.toggle(field);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => self.form.load_sample(),
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.form.new_assessment();
                self.cursor.reset();
            }
            KeyCode::Char(c) => {
                self.form.push_char(field, c);
            }
            KeyCode::Backspace => {
                self.form.pop_char(field);
            }
            KeyCode::Delete => {
                self.form.clear_field(field);
            }
            KeyCode::Enter => match self.form.submit() {
                SubmitOutcome::Started => tracing::debug!("Submission started"),
                SubmitOutcome::Rejected(reason) => {
                    tracing::debug!(reason = reason.code(), "Submission rejected")
                }
                SubmitOutcome::Ignored => tracing::debug!("Submit ignored while in flight"),
            },
            _ => {}
        }
    }
}
