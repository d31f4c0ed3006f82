use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::constants::{UI_MAX_WIDTH, UI_SPINNER_FRAMES};
use crate::session::{Phase, SessionView};
use crate::tui::app::App;
use crate::tui::variant::{Palette, Wording};

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &App) {
    let palette = app.variant.palette();
    let wording = app.variant.wording();
    let view = app.view();

    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    let width = area.width.min(UI_MAX_WIDTH);
    let column = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    };

    let chunks = Layout::vertical([
        Constraint::Min(0),    // Top padding
        Constraint::Length(3), // Headline + tagline
        Constraint::Length(1),
        Constraint::Length(5), // Form or confirmation
        Constraint::Length(1), // Count
        Constraint::Min(0),    // Bottom padding
        Constraint::Length(1), // Key hints
    ])
    .split(column);

    render_header(frame, chunks[1], &palette, &wording);

    if view.phase == Phase::Done {
        render_confirmation(frame, chunks[3], &palette, &wording);
    } else {
        render_form(frame, chunks[3], app, &view, &palette, &wording);
        render_count(frame, chunks[4], app, &view, &palette);
    }

    render_hints(frame, chunks[6], app, &palette);
}

fn render_header(frame: &mut Frame, area: Rect, palette: &Palette, wording: &Wording) {
    let text = vec![
        Line::from(Span::styled(
            wording.headline,
            Style::default()
                .fg(palette.foreground)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(wording.tagline, Style::default().fg(palette.muted))),
    ];

    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &SessionView,
    palette: &Palette,
    wording: &Wording,
) {
    let rows = Layout::vertical([
        Constraint::Length(3), // Input + button
        Constraint::Length(2), // Error message
    ])
    .split(area);

    let cols = Layout::horizontal([Constraint::Min(10), Constraint::Length(18)]).split(rows[0]);

    let input_line = if app.input.is_empty() {
        Line::from(Span::styled(wording.placeholder, Style::default().fg(palette.muted)))
    } else {
        Line::from(Span::styled(
            app.input.as_str(),
            Style::default().fg(palette.foreground),
        ))
    };
    let border_color = if view.error_message.is_some() {
        palette.error
    } else {
        palette.border
    };
    frame.render_widget(
        Paragraph::new(input_line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        ),
        cols[0],
    );

    // Spinner replaces the label while the submission is in flight
    let label = if view.phase == Phase::Submitting {
        UI_SPINNER_FRAMES[app.tick % UI_SPINNER_FRAMES.len()].to_string()
    } else {
        wording.button.to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            label,
            Style::default()
                .fg(palette.button_text)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.button))
                .style(Style::default().bg(palette.button)),
        ),
        cols[1],
    );

    if let Some(message) = &view.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(palette.error),
            )),
            rows[1],
        );
    }
}

fn render_count(frame: &mut Frame, area: Rect, app: &App, view: &SessionView, palette: &Palette) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            app.variant.count_line(view.displayed_count),
            Style::default().fg(palette.muted),
        ))
        .alignment(Alignment::Center),
        area,
    );
}

fn render_confirmation(frame: &mut Frame, area: Rect, palette: &Palette, wording: &Wording) {
    frame.render_widget(
        Paragraph::new(Span::styled(
            wording.confirmation,
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.success)),
        ),
        area,
    );
}

fn render_hints(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let hint = format!(
        "Enter submit · Tab style ({}) · Esc quit",
        app.variant.display_name()
    );
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(palette.muted)))
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SubmissionController;
    use crate::storage::MemoryKvStore;
    use crate::tui::Variant;
    use crate::waitlist::WaitlistStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::{Duration, Instant};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app(variant: Variant) -> App {
        let kv = MemoryKvStore::with_entries([("waitlist", r#"["x@example.com"]"#)]);
        let store = WaitlistStore::open(Box::new(kv));
        App::new(SubmissionController::new(store, Duration::ZERO), variant)
    }

    #[test]
    fn test_form_shows_copy_and_count() {
        let app = app(Variant::Midnight);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal.draw(|f| render_ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("Join the waitlist"));
        assert!(text.contains("Enter your email"));
        assert!(text.contains("Join 1 others waiting in line"));
    }

    #[test]
    fn test_confirmation_replaces_form() {
        let mut app = app(Variant::Terminal);
        let now = Instant::now();
        app.input = "a@example.com".to_string();
        app.submit(now);
        app.poll_pending(now);

        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
        let text = buffer_text(&terminal);

        assert!(text.contains("OK: added to queue."));
        assert!(!text.contains("queue.length"));
    }

    #[test]
    fn test_narrow_terminal_does_not_panic() {
        let app = app(Variant::Aurora);
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        terminal.draw(|f| render_ui(f, &app)).unwrap();
    }
}
