use crate::core::game_state::GameState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn draw_inventory(frame: &mut Frame, area: Rect, state: &GameState) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(" Inventory [1-9] use  [I] close ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.inventory.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Inventory is empty",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )),
            inner,
        );
        return;
    }

    let lines: Vec<Line> = state
        .inventory
        .items
        .iter()
        .enumerate()
        .map(|(slot, item)| {
            let effect = item.kind.effect();
            Line::from(vec![
                Span::styled(
                    format!("{}. ", slot + 1),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(format!("{} {} ", item.icon(), item.name())),
                Span::styled(
                    format!("x{}", item.quantity),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  (+{} {})",
                        effect.amount,
                        effect.resource.label(state.variant)
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}
