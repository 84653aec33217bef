mod combat_scene;
mod game_over;
mod info_panel;
mod inventory_panel;
mod map_view;

use crate::core::game_state::GameState;
use crate::input::InputMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Main UI drawing function.
pub fn draw_ui(frame: &mut Frame, state: &GameState) {
    let size = frame.size();

    if state.game_over {
        game_over::draw_game_over(frame, size, state);
        return;
    }

    // Map + side panel above, key hints below
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(size);
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(44), Constraint::Length(40)])
        .split(v_chunks[0]);

    map_view::draw_map(frame, h_chunks[0], state);
    info_panel::draw_info_panel(frame, h_chunks[1], state);
    draw_footer(frame, v_chunks[1], state);

    match InputMode::of(state) {
        InputMode::Combat => {
            let area = centered_rect(60, 16, h_chunks[0]);
            combat_scene::draw_combat_scene(frame, area, state);
        }
        InputMode::Prompt => draw_prompt(frame, h_chunks[0], state),
        InputMode::Inventory => {
            let area = centered_rect(50, state.inventory.len() as u16 + 4, h_chunks[0]);
            inventory_panel::draw_inventory(frame, area, state);
        }
        InputMode::Explore | InputMode::GameOver => {}
    }
}

fn draw_prompt(frame: &mut Frame, area: Rect, state: &GameState) {
    let Some(prompt) = &state.map.prompt else {
        return;
    };
    let popup = centered_rect(48, 5, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Explore? ");
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let lines = vec![
        Line::from(format!("You spot {}.", prompt.object_label)),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(" search   "),
            Span::styled("[N]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(" leave it"),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

fn draw_footer(frame: &mut Frame, area: Rect, state: &GameState) {
    let hints = match InputMode::of(state) {
        InputMode::Combat => "[A] attack  [H] heal  [R] retreat  [1-9] use item  [Q] quit",
        InputMode::Prompt => "[Y] explore  [N] decline  [←↑→↓] move on  [I] inventory  [Q] quit",
        InputMode::Inventory => "[1-9] use item  [I/Esc] close  [Q] quit",
        InputMode::Explore | InputMode::GameOver => "[←↑→↓/WASD] move  [I] inventory  [Q] quit",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(
        Paragraph::new(hints)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

/// A `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Variant;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render(state: &GameState) -> String {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw_ui(frame, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(50, 4, area);
        assert_eq!(rect.width, 20);
        assert_eq!(rect.height, 4);
        assert_eq!(rect.y, 3);
    }

    #[test]
    fn test_renders_exploration_view() {
        let state = GameState::new(Variant::Space);
        let screen = render(&state);
        assert!(screen.contains("Supplies"));
        assert!(screen.contains("inventory"));
    }

    #[test]
    fn test_renders_game_over() {
        let mut state = GameState::new(Variant::Survival);
        state.game_over = true;
        let screen = render(&state);
        assert!(screen.contains("G A M E"));
    }
}
