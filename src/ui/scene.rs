//! Scene rendering: play field, avatar, obstacles, and overlays.

use crate::constants::{
    AVATAR_SIZE, AVATAR_X, FIELD_HEIGHT, FIELD_WIDTH, GAP_SIZE, PIPE_WIDTH,
};
use crate::game::{RunStatus, Session};
use crate::ui::common::{render_overlay, render_status_bar};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Visual tilt of the avatar in degrees, derived from its velocity.
/// Purely presentational; never feeds back into physics.
pub fn tilt_degrees(velocity: f64) -> f64 {
    (velocity * 3.0).min(90.0)
}

/// Pick the avatar glyph from its tilt angle.
fn avatar_glyph(velocity: f64) -> &'static str {
    let tilt = tilt_degrees(velocity);
    if tilt <= -15.0 {
        "▲"
    } else if tilt >= 45.0 {
        "▼"
    } else {
        "►"
    }
}

/// Render the whole game scene.
pub fn draw(frame: &mut Frame, session: &Session) {
    let area = frame.size();
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Skyhop ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(2)])
        .split(inner);

    render_play_area(frame, chunks[0], session);
    render_status_bar_content(frame, chunks[1], session);

    match session.status {
        RunStatus::Idle => render_start_overlay(frame, chunks[0], session),
        RunStatus::Ended => render_summary_overlay(frame, chunks[0], session),
        RunStatus::Active => {}
    }
}

/// Render the play field, scaling field units to terminal cells.
fn render_play_area(frame: &mut Frame, area: Rect, session: &Session) {
    let width = area.width as usize;
    let height = area.height as usize;
    if width == 0 || height == 0 {
        return;
    }

    // Avatar drawn as a single glyph at its scaled center
    let avatar_col =
        ((AVATAR_X + AVATAR_SIZE / 2.0) * width as f64 / FIELD_WIDTH).round() as usize;
    let avatar_row =
        ((session.avatar_y + AVATAR_SIZE / 2.0) * height as f64 / FIELD_HEIGHT).round() as usize;

    let mut lines = Vec::with_capacity(height);
    for display_row in 0..height {
        let field_y = (display_row as f64 + 0.5) * FIELD_HEIGHT / height as f64;
        let mut spans = Vec::with_capacity(width);

        for display_col in 0..width {
            if display_row == avatar_row && display_col == avatar_col {
                spans.push(Span::styled(
                    avatar_glyph(session.avatar_vel),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                continue;
            }

            let field_x = (display_col as f64 + 0.5) * FIELD_WIDTH / width as f64;
            let in_barrier = session.obstacles.iter().any(|o| {
                field_x >= o.x
                    && field_x < o.x + PIPE_WIDTH
                    && (field_y < o.gap_top || field_y >= o.gap_top + GAP_SIZE)
            });

            if in_barrier {
                spans.push(Span::styled("█", Style::default().fg(Color::Green)));
            } else {
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, session: &Session) {
    match session.status {
        RunStatus::Active => render_status_bar(
            frame,
            area,
            &format!("Score: {}", session.score),
            Color::Green,
            &[
                ("[Space/Up/Enter]", "Flap"),
                ("[R]", "Restart"),
                ("[Q]", "Quit"),
            ],
        ),
        RunStatus::Idle | RunStatus::Ended => render_status_bar(
            frame,
            area,
            "Press Space to play",
            Color::Yellow,
            &[("[Space]", "Play"), ("[Q]", "Quit")],
        ),
    }
}

fn render_start_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let mut body = vec![Line::from(Span::styled(
        "Flap through the gaps!",
        Style::default().fg(Color::White),
    ))];
    if session.best_score > 0 {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(
            format!("Best: {}", session.best_score),
            Style::default().fg(Color::Cyan),
        )));
    }
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        "[Press Space]",
        Style::default().fg(Color::DarkGray),
    )));

    render_overlay(frame, area, "SKYHOP", Color::Yellow, &body);
}

fn render_summary_overlay(frame: &mut Frame, area: Rect, session: &Session) {
    let new_best = session.score > 0 && session.score == session.best_score;
    let mut body = vec![Line::from(vec![
        Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.score),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])];
    body.push(Line::from(vec![
        Span::styled("Best:  ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}", session.best_score),
            Style::default().fg(Color::Cyan),
        ),
    ]));
    if new_best {
        body.push(Line::from(Span::styled(
            "New best!",
            Style::default().fg(Color::Green),
        )));
    }
    body.push(Line::from(""));
    body.push(Line::from(Span::styled(
        "[Space to retry]",
        Style::default().fg(Color::DarkGray),
    )));

    render_overlay(frame, area, "CRASH!", Color::Red, &body);
}
