//! TUI Application - terminal lifecycle and the interactive loop.
//!
//! The loop multiplexes two producers: the crossterm key-event stream and
//! the scheduler's watch channel. Key handling therefore never waits on an
//! in-flight refresh; the two only meet at the topic-state cell.

use std::io::{self, Stdout};

use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

use super::banner::{self, BANNER_HEIGHT};
use super::events::{handle_key_event, Action};
use super::theme::Theme;
use crate::dashboard::DashboardHandle;
use crate::environment::Environment;
use crate::render::RenderedOutput;

/// TUI Application
pub struct TuiApp {
    environment: Environment,
    handle: DashboardHandle,
    output_rx: watch::Receiver<RenderedOutput>,
    theme: Theme,
}

impl TuiApp {
    pub fn new(
        environment: Environment,
        handle: DashboardHandle,
        output_rx: watch::Receiver<RenderedOutput>,
    ) -> Self {
        Self {
            environment,
            handle,
            output_rx,
            theme: Theme::new(),
        }
    }

    /// Run until the operator quits.
    pub async fn run(mut self) -> anyhow::Result<()> {
        let mut terminal = self.setup_terminal()?;
        let result = self.main_loop(&mut terminal).await;
        self.restore_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut outputs = WatchStream::new(self.output_rx.clone());
        let mut current = RenderedOutput::starting();

        loop {
            terminal.draw(|frame| self.render(frame, &current))?;

            tokio::select! {
                output = outputs.next() => {
                    match output {
                        Some(output) => current = output,
                        // Scheduler gone means nothing further to display.
                        None => break,
                    }
                }
                event = input.next() => {
                    match event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            match handle_key_event(key) {
                                Action::Quit => break,
                                Action::SwitchTopic(topic) => {
                                    // Rejections are warned inside set_topic;
                                    // the display keeps the old topic.
                                    let _ = self.handle.on_topic_change_request(topic.name());
                                }
                                Action::None => {}
                            }
                        }
                        // Resize and other events just trigger a redraw.
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&self, frame: &mut Frame, output: &RenderedOutput) {
        let area = frame.area();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(BANNER_HEIGHT),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_banner(frame, rows[0]);
        self.render_body(frame, rows[1], output);
        self.render_footer(frame, rows[2]);
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44),
                Constraint::Min(30),
                Constraint::Length(32),
            ])
            .split(area);

        let environment = Paragraph::new(banner::environment_lines(&self.environment, &self.theme))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(self.theme.dimmed())
                    .title(" environment "),
            );
        frame.render_widget(environment, columns[0]);

        let help = Paragraph::new(banner::help_lines(&self.theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.dimmed())
                .title(" topics "),
        );
        frame.render_widget(help, columns[1]);

        let logo = Paragraph::new(banner::logo_lines(&self.theme)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(self.theme.dimmed()),
        );
        frame.render_widget(logo, columns[2]);
    }

    fn render_body(&self, frame: &mut Frame, area: Rect, output: &RenderedOutput) {
        let border_style = if output.stale {
            self.theme.stale()
        } else {
            self.theme.dimmed()
        };

        let body: Vec<Line> = output
            .body
            .lines()
            .map(|row| Line::from(Span::styled(row.to_string(), self.theme.text())))
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", output.display_title()));

        frame.render_widget(Paragraph::new(body).block(block), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Line::from(vec![
            Span::styled(" topic ", self.theme.dimmed()),
            Span::styled(self.handle.active_topic().name(), self.theme.accent()),
            Span::styled(
                format!(
                    "  refresh {}s  [Q] quit",
                    self.environment.refresh_period().as_secs()
                ),
                self.theme.dimmed(),
            ),
        ]);
        frame.render_widget(Paragraph::new(footer), area);
    }
}
