use crate::core::game_state::GameState;
use crate::resources::Resource;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the side panel: resource counters on top, narrative log below.
pub fn draw_info_panel(frame: &mut Frame, area: Rect, state: &GameState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Resource::ALL.len() as u16 + 2), // Resources
            Constraint::Min(4),                                  // Messages
        ])
        .split(area);

    draw_resources(frame, chunks[0], state);
    draw_messages(frame, chunks[1], state);
}

fn draw_resources(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Supplies ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = Resource::ALL
        .iter()
        .map(|&resource| {
            let value = state.resources.get(resource);
            let color = match resource.cap() {
                Some(_) if value == 0 => Color::Red,
                Some(cap) if value * 4 <= cap => Color::Yellow,
                _ => Color::White,
            };
            Line::from(vec![
                Span::raw(format!(
                    "{} {:<8}",
                    resource.icon(state.variant),
                    resource.label(state.variant)
                )),
                Span::styled(
                    value.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_messages(frame: &mut Frame, area: Rect, state: &GameState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Log ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = state
        .messages
        .iter()
        .take(inner.height as usize)
        .enumerate()
        .map(|(i, message)| {
            let color = if i == 0 { Color::White } else { Color::Gray };
            Line::from(Span::styled(message.as_str(), Style::default().fg(color)))
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines).wrap(ratatui::widgets::Wrap { trim: true }),
        inner,
    );
}
