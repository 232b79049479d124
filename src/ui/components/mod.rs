pub mod form;
pub mod result;
pub mod status_bar;

use crate::app::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn render(f: &mut Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // URL input
            Constraint::Length(3), // Short URL / error
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_title(f, state, chunks[0]);
    form::render(f, state, chunks[1]);
    result::render(f, state, chunks[2]);
    status_bar::render(f, state, chunks[4]);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

fn render_title(f: &mut Frame, state: &AppState, area: Rect) {
    let title = Paragraph::new("URL Shortener — paste a long URL, get a short shareable link")
        .style(Style::default().fg(state.theme.accent));
    f.render_widget(title, area);
}

fn render_help_overlay(f: &mut Frame, state: &AppState) {
    let help_text = r#"
    sniplink Help

    Insert Mode:
      type                  Edit the long URL
      ←/→ Home/End          Move cursor
      Backspace             Delete character
      Enter                 Shorten
      Esc                   Switch to normal mode

    Normal Mode:
      i or Enter            Back to typing
      s                     Shorten again
      y                     Copy the short URL
      ?                     Toggle help
      q                     Quit

    Ctrl+C quits from anywhere.
    "#;

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
