use crate::core::constants::RESOURCE_CAP;
use crate::core::game_state::GameState;
use crate::resources::Resource;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

/// Draws the encounter overlay: both health bars, the combat log and the
/// available actions.
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, state: &GameState) {
    frame.render_widget(Clear, area);
    let combat_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Encounter ");

    let inner = combat_block.inner(area);
    frame.render_widget(combat_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player health
            Constraint::Length(3), // Enemy health
            Constraint::Min(3),    // Combat log
            Constraint::Length(2), // Actions
        ])
        .split(inner);

    draw_player_health(frame, chunks[0], state);
    draw_enemy_health(frame, chunks[1], state);
    draw_combat_log(frame, chunks[2], state);
    draw_actions(frame, chunks[3], state);
}

fn health_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_player_health(frame: &mut Frame, area: Rect, state: &GameState) {
    let health = state.resources.get(Resource::Health);
    let ratio = (health as f64 / RESOURCE_CAP as f64).clamp(0.0, 1.0);
    let label = format!(
        "Health {}/{}   Bullets {}",
        health,
        RESOURCE_CAP,
        state.resources.get(Resource::Bullets)
    );

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("You"))
        .gauge_style(
            Style::default()
                .fg(health_color(ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(label)
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_enemy_health(frame: &mut Frame, area: Rect, state: &GameState) {
    let Some(enemy) = &state.combat.enemy else {
        return;
    };
    let ratio = if enemy.max_health == 0 {
        0.0
    } else {
        (enemy.health as f64 / enemy.max_health as f64).clamp(0.0, 1.0)
    };
    let label = format!("{}/{}", enemy.health, enemy.max_health);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} {}", enemy.icon, enemy.name)),
        )
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(label)
        .ratio(ratio);
    frame.render_widget(gauge, area);
}

fn draw_combat_log(frame: &mut Frame, area: Rect, state: &GameState) {
    let lines: Vec<Line> = state
        .combat
        .log
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if i == 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(entry.as_str(), style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_actions(frame: &mut Frame, area: Rect, state: &GameState) {
    let player_turn = state.combat.is_player_turn();
    let can_attack = player_turn && state.resources.get(Resource::Bullets) > 0;
    let enabled = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let disabled = Style::default().fg(Color::DarkGray);

    let line = if player_turn {
        Line::from(vec![
            Span::styled("[A]ttack", if can_attack { enabled } else { disabled }),
            Span::raw("   "),
            Span::styled("[H]eal", enabled),
            Span::raw("   "),
            Span::styled("[R]etreat", enabled),
        ])
    } else {
        Line::from(vec![
            Span::styled(
                "Enemy is striking...",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::ITALIC),
            ),
            Span::raw("   "),
            Span::styled("[R]etreat", enabled),
        ])
    };
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
