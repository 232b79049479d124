use crate::app::{AppState, Mode};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let border_style = if state.mode == Mode::Insert {
        Style::default().fg(state.theme.accent)
    } else {
        Style::default().fg(state.theme.foreground)
    };

    let input = Paragraph::new(state.long_url.as_str())
        .style(Style::default().fg(state.theme.foreground))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Long URL "),
        );

    f.render_widget(input, area);

    if state.mode == Mode::Insert {
        // Terminal cursor sits at the edit position inside the border.
        let cursor_x = state.long_url[..state.input_cursor].width() as u16;
        f.set_cursor_position(Position::new(area.x + 1 + cursor_x, area.y + 1));
    }
}
