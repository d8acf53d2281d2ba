use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block as BlockWidget, Paragraph, Widget, Wrap},
};

use crate::{
    game::GameSession,
    ui::widgets::{style, tile_color},
};

/// Side panel: turn counter, seed, one entry per player, and the last-move
/// report.
#[derive(Debug)]
pub struct PlayerPanel<'a> {
    session: &'a GameSession,
    block: Option<BlockWidget<'a>>,
}

impl<'a> PlayerPanel<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn lines(&self) -> Vec<Line<'_>> {
        let session = self.session;
        let mut lines = vec![
            Line::from(format!(
                "Turn {} of {}",
                session.turn_number(),
                session.total_moves()
            )),
            Line::styled(format!("Seed {}", session.seed()), style::GOAL),
            Line::default(),
        ];

        for player in session.players() {
            let is_current =
                !session.is_finished() && player.number() == session.current_player().number();
            let marker = if is_current { "▶ " } else { "  " };
            let swatch = Style::new().bg(tile_color(player.goal().colour().rgb()));
            lines.push(Line::from(vec![
                Span::styled(marker, style::MARKER),
                Span::styled("  ", swatch),
                Span::raw(format!(
                    " Player {} ({})",
                    player.number(),
                    player.kind_label()
                )),
                Span::raw(format!("  {} pts", player.score())),
            ]));
            lines.push(Line::styled(format!("     {}", player.goal()), style::GOAL));
        }

        lines.push(Line::default());
        if let Some(report) = session.last_report() {
            lines.push(Line::from(format!(
                "Player {} {} ({} pts)",
                report.player, report.description, report.score
            )));
        }
        if let Some(notice) = session.notice() {
            lines.push(Line::styled(notice, style::NOTICE));
        }
        lines
    }
}

impl Widget for PlayerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &PlayerPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut paragraph = Paragraph::new(Text::from(self.lines()))
            .style(style::DEFAULT)
            .wrap(Wrap { trim: false });
        if let Some(block) = &self.block {
            paragraph = paragraph.block(block.clone());
        }
        paragraph.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;

    fn session() -> GameSession {
        GameSession::new(&GameConfig {
            max_depth: 2,
            humans: 1,
            random: 1,
            smart: Vec::new(),
            turns: 2,
            seed: Some(99),
            turbo: true,
        })
    }

    fn rendered_text(session: &GameSession) -> String {
        let panel = PlayerPanel::new(session);
        panel
            .lines()
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_the_panel_lists_every_player_with_its_goal() {
        let session = session();
        let text = rendered_text(&session);
        assert!(text.contains("Player 1 (human)"));
        assert!(text.contains("Player 2 (random)"));
        assert!(text.contains("Seed 99"));
        assert!(text.contains("Turn 1 of 4"));
        for player in session.players() {
            assert!(text.contains(&player.goal().to_string()));
        }
    }

    #[test]
    fn test_the_current_player_carries_the_marker() {
        let session = session();
        let text = rendered_text(&session);
        let marked: Vec<_> = text
            .lines()
            .filter(|line| line.starts_with('▶'))
            .collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("Player 1 (human)"));
    }

    #[test]
    fn test_a_finished_session_drops_the_marker() {
        let mut session = session();
        session.finish();
        let text = rendered_text(&session);
        assert!(!text.contains('▶'));
    }

    #[test]
    fn test_the_last_report_appears_after_a_move() {
        let mut session = session();
        session.handle_key(crossterm::event::KeyCode::Char('x'));
        let text = rendered_text(&session);
        assert!(text.contains("Player 1 rotated a block clockwise"));
    }
}
