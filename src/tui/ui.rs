use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::constants::UI_REFRESH_INTERVAL_MS;
use crate::tui::input::{InputAction, InputHandler};
use crate::tui::render::render_ui;
use crate::tui::App;
use crate::utils::{set_tui_active, WaitlistError};

/// Run the terminal UI, returning the app so callers can inspect the final state
pub fn run_ui(mut app: App) -> Result<App> {
    // Check if we have an interactive terminal
    if !crossterm::tty::IsTty::is_tty(&io::stdout()) {
        return Err(WaitlistError::Ui(
            "the signup form needs an interactive terminal; use `waitlist join <EMAIL>` instead"
                .to_string(),
        )
        .into());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    set_tui_active(true);
    let res = run_app(&mut terminal, &mut app);
    set_tui_active(false);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map(|_| app)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let input = InputHandler::new();

    while app.running {
        terminal.draw(|f| render_ui(f, app))?;

        if event::poll(Duration::from_millis(UI_REFRESH_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    match input.handle_key(key) {
                        InputAction::Submit => {
                            let outcome = app.submit(Instant::now());
                            debug!("Submit -> {}", outcome.label());
                        }
                        InputAction::Quit => {
                            if let Some(outcome) = app.quit() {
                                debug!("Finished submission on quit -> {}", outcome.label());
                            }
                        }
                        InputAction::Insert(c) => app.insert_char(c),
                        InputAction::Delete => app.delete_char(),
                        InputAction::NextVariant => app.cycle_variant(),
                        InputAction::PrevVariant => app.cycle_variant_reverse(),
                        InputAction::None => {}
                    }
                }
            }
        }

        if let Some(outcome) = app.poll_pending(Instant::now()) {
            debug!("Submission finished -> {}", outcome.label());
        }
        app.on_tick();
    }

    Ok(())
}
