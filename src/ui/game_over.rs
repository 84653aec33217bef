use crate::core::game_state::GameState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Terminal screen. No input other than quit is accepted from here.
pub fn draw_game_over(frame: &mut Frame, area: Rect, state: &GameState) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "G A M E   O V E R",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "You survived {} moves and explored {} cells.",
            state.moves,
            state.map.visited_cells.len()
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Q to quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let top = inner.y + inner.height.saturating_sub(lines.len() as u16) / 2;
    let text_area = Rect::new(inner.x, top, inner.width, inner.height.min(lines.len() as u16));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
}
