use crate::app::AppState;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn render(f: &mut Frame, state: &AppState, area: Rect) {
    let mode_text = format!("{}", state.mode);
    let flight_indicator = if state.in_flight { " [shortening]" } else { "" };

    let left_content = match &state.status_message {
        Some((message, _)) => format!(" {mode_text}{flight_indicator} | {message}"),
        None => format!(" {mode_text}{flight_indicator}"),
    };

    let nav_hint = "? help  q quit";
    let version_text = format!("v{VERSION}");

    let padding = area
        .width
        .saturating_sub(left_content.len() as u16 + nav_hint.len() as u16 + version_text.len() as u16 + 3);

    let base_style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status_line = format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    );

    let status = Paragraph::new(Line::from(vec![Span::styled(status_line, base_style)]));

    f.render_widget(status, area);
}
