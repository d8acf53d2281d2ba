use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    text::{Line, Text},
    widgets::{Block as BlockWidget, Clear, Paragraph},
};
use ratatui_runtime::{App, Runtime};

use crate::{
    game::GameSession,
    ui::widgets::{BoardDisplay, PlayerPanel, style},
};

const TICK_RATE: f64 = 30.0;

/// The one screen of the game: board on the left, player panel on the
/// right, key help below, and a results popup once the session finishes.
#[derive(Debug)]
pub struct GameApp {
    session: GameSession,
    is_exiting: bool,
}

impl GameApp {
    pub fn new(session: GameSession) -> Self {
        Self {
            session,
            is_exiting: false,
        }
    }

    pub fn into_session(self) -> GameSession {
        self.session
    }

    fn help_text(&self) -> &'static str {
        if self.session.is_finished() {
            "Q / Esc (Close)"
        } else if self.session.is_human_turn() {
            "← ↑ ↓ → (Select) | - + (Level) | Z X (Rotate) | H V (Swap) | S (Smash) | Q (Quit)"
        } else {
            "Q (Quit)"
        }
    }

    fn draw_results(&self, frame: &mut Frame) {
        let mut lines = Vec::new();
        for player in self.session.players() {
            lines.push(Line::from(format!(
                "Player {} ({}): {} pts",
                player.number(),
                player.kind_label(),
                player.score()
            )));
            lines.push(Line::styled(
                format!("  goal: {}", player.goal()),
                style::GOAL,
            ));
        }
        lines.push(Line::default());
        let winner = self.session.winner();
        lines.push(
            Line::from(format!(
                "WINNER: Player {} with {} pts",
                winner.number(),
                winner.score()
            ))
            .centered(),
        );

        let width = lines.iter().map(Line::width).max().unwrap_or(0);
        let width = u16::try_from(width).unwrap_or(u16::MAX).saturating_add(4);
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
        let area = frame
            .area()
            .centered(Constraint::Length(width), Constraint::Length(height));
        let block = BlockWidget::bordered()
            .title(Line::from("RESULTS").centered())
            .style(style::DEFAULT);
        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
    }
}

impl App for GameApp {
    fn init(&mut self, runtime: &mut Runtime) {
        runtime.set_tick_rate(Some(TICK_RATE));
    }

    fn should_exit(&self) -> bool {
        self.is_exiting
    }

    fn handle_event(&mut self, _runtime: &mut Runtime, event: Event) {
        let Some(key) = event.as_key_event() else {
            return;
        };
        if self.session.is_finished() {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                self.is_exiting = true;
            }
        } else if key.code == KeyCode::Char('q') {
            // Quitting mid-game still shows the results, like the last turn.
            self.session.finish();
        } else {
            self.session.handle_key(key.code);
        }
    }

    fn update(&mut self, _runtime: &mut Runtime) {
        self.session.tick();
    }

    fn draw(&self, frame: &mut Frame) {
        let board = BoardDisplay::new(self.session.board()).block(
            BlockWidget::bordered()
                .title(Line::from("BOARD").centered())
                .style(style::DEFAULT),
        );
        let panel = PlayerPanel::new(&self.session).block(
            BlockWidget::bordered()
                .title(Line::from("PLAYERS").centered())
                .style(style::DEFAULT),
        );

        let [main_area, help_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(frame.area());
        let [board_column, panel_area] =
            Layout::horizontal([Constraint::Length(board.width()), Constraint::Min(30)])
                .spacing(1)
                .areas(main_area);
        let [board_area] =
            Layout::vertical([Constraint::Length(board.height())]).areas(board_column);

        frame.render_widget(&board, board_area);
        frame.render_widget(&panel, panel_area);

        let help = Text::from(self.help_text()).style(style::HELP).centered();
        frame.render_widget(help, help_area);

        if self.session.is_finished() {
            self.draw_results(frame);
        }
    }
}
