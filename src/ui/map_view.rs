//! Fog-of-war grid.

use crate::core::constants::GRID_SIZE;
use crate::core::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Display text and color for a cell. Each cell is 2 chars wide.
fn cell_display(state: &GameState, x: u32, y: u32) -> (&'static str, Style) {
    let cell = (x, y);
    if state.map.current_cell() == cell {
        return (
            "@ ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    }
    if !state.map.is_visited(cell) {
        return ("░░", Style::default().fg(Color::DarkGray));
    }
    if state.map.is_question(cell) {
        return ("? ", Style::default().fg(Color::Yellow));
    }
    (". ", Style::default().fg(Color::Gray))
}

pub fn draw_map(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .title(state.variant.title())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let grid_width = (GRID_SIZE * 2) as u16;
    let grid_height = GRID_SIZE as u16;
    let x_offset = inner.x + inner.width.saturating_sub(grid_width) / 2;
    let y_offset = inner.y + inner.height.saturating_sub(grid_height) / 2;

    for y in 0..GRID_SIZE {
        let row = y as u16;
        if row >= inner.height {
            break;
        }
        let spans: Vec<Span> = (0..GRID_SIZE)
            .map(|x| {
                let (text, style) = cell_display(state, x, y);
                Span::styled(text, style)
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(x_offset, y_offset + row, grid_width.min(inner.width), 1),
        );
    }
}
