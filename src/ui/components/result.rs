use crate::app::{AppState, Outcome};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Short URL with its copy hint, or the error line. Only rendered once a
/// submission has resolved; in flight the row shows a progress note.
pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    match &state.outcome {
        Outcome::Success(link) => {
            let line = Line::from(vec![
                Span::styled(link.clone(), Style::default().fg(state.theme.success)),
                Span::styled(
                    "  (Esc then y to copy)",
                    Style::default().fg(state.theme.foreground),
                ),
            ]);
            let widget = Paragraph::new(line).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Short URL "),
            );
            f.render_widget(widget, area);
        }
        Outcome::Error(message) => {
            let widget = Paragraph::new(message.as_str())
                .style(Style::default().fg(state.theme.error));
            f.render_widget(widget, area);
        }
        Outcome::Idle => {
            if state.in_flight {
                let widget = Paragraph::new("Shortening…")
                    .style(Style::default().fg(state.theme.foreground));
                f.render_widget(widget, area);
            }
        }
    }
}
