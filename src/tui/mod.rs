pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;

use crate::interaction::Interaction;
use crate::layout::StripLayout;
use crate::render::Chrome;

use widgets::{StatusBar, StripWidget};

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const STATUS_ROWS: u16 = 1;

/// State for the interactive TUI application.
pub struct TuiApp {
    pub interaction: Interaction,
    pub chrome: Chrome,
    should_quit: bool,
    strip_area: Rect,
}

impl TuiApp {
    pub fn new(interaction: Interaction, chrome: Chrome) -> Self {
        Self {
            interaction,
            chrome,
            should_quit: false,
            strip_area: Rect::default(),
        }
    }

    /// Split the terminal into the strip view and the status row, and
    /// resize the interaction layout to match.
    fn resize(&mut self, area: Rect) -> (Rect, Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(STATUS_ROWS)])
            .split(area);
        self.strip_area = chunks[0];
        self.interaction.set_layout(StripLayout::new(
            chunks[0].width as f32,
            chunks[0].height as f32,
        ));
        (chunks[0], chunks[1])
    }

    /// Cell centre in surface coordinates.
    fn surface_point(&self, column: u16, row: u16) -> (f32, f32) {
        (
            column as f32 - self.strip_area.x as f32 + 0.5,
            row as f32 - self.strip_area.y as f32 + 0.5,
        )
    }

    fn handle_key(&mut self, code: KeyCode) {
        let state = &mut self.interaction;
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('m') => {
                state.toggle_cost_model();
            }
            KeyCode::Char('l') => {
                state.toggle_companion_mode();
            }
            KeyCode::Char('s') => {
                state.toggle_swap();
            }
            KeyCode::Left => {
                let hue = state.selection().role1_hue - 1.0;
                state.set_role1_hue(hue);
            }
            KeyCode::Right => {
                let hue = state.selection().role1_hue + 1.0;
                state.set_role1_hue(hue);
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (x, y) = self.surface_point(mouse.column, mouse.row);
        let state = &mut self.interaction;
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                state.pointer_down(x, y);
            }
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                state.pointer_move(x, y);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                state.pointer_up();
            }
            MouseEventKind::ScrollDown => {
                state.scroll(1);
            }
            MouseEventKind::ScrollUp => {
                state.scroll(-1);
            }
            _ => {}
        }
    }
}

type Term = Terminal<CrosstermBackend<io::Stdout>>;

/// Launch the TUI application.
///
/// The terminal is restored whenever raw mode was entered, including when
/// the rest of the setup fails.
pub fn run(mut app: TuiApp) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let result = setup_terminal().and_then(|mut terminal| {
        log::info!("tui started");
        let result = event_loop(&mut terminal, &mut app);
        terminal.show_cursor()?;
        result
    });
    let restored = restore_terminal();
    result.and(restored)
}

fn setup_terminal() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("failed to enter the alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal")
}

/// Leave raw mode and the alternate screen. Safe to call when setup only
/// got partway.
fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
        .context("failed to leave the alternate screen")?;
    Ok(())
}

fn event_loop(terminal: &mut Term, app: &mut TuiApp) -> Result<()> {
    loop {
        terminal.draw(|f| {
            let (strip, status) = app.resize(f.area());
            f.render_widget(StripWidget::new(&app.interaction, app.chrome), strip);
            f.render_widget(StatusBar::new(&app.interaction, app.chrome), status);
        })?;

        // Drain everything queued so a fast drag redraws once.
        if event::poll(POLL_INTERVAL)? {
            loop {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                    Event::Mouse(mouse) => app.handle_mouse(mouse),
                    _ => {}
                }
                if app.should_quit || !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
