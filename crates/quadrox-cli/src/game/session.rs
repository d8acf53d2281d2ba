//! The turn loop: one board, a roster of players, and the moves between
//! them.
//!
//! Every player gets the configured number of turns, in roster order. Human
//! turns wait on key events; automated turns resolve on ticks, with the
//! chosen block highlighted for a short delay before the move lands so a
//! spectator can follow along. Quitting mid-game freezes the session the
//! same way the last turn does: final scores are computed and the winner is
//! reported.

use crossterm::event::KeyCode;
use quadrox_engine::Board;
use rand::{Rng as _, SeedableRng as _};
use rand_pcg::Pcg32;

use super::{
    config::GameConfig,
    player::{KeyOutcome, PlannedMove, Player},
};

/// Ticks between highlighting an automated player's block and applying its
/// move: 600 ms at the 30 Hz tick rate.
pub const BOT_MOVE_DELAY_TICKS: u32 = 18;

#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum SessionState {
    Playing,
    Finished,
}

/// A move an automated player has committed to but not yet applied.
#[derive(Debug, Clone)]
struct PendingMove {
    plan: PlannedMove,
    ticks_left: u32,
}

/// One completed move, for the side panel and the end-of-game summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    /// 1-based number of the player who moved.
    pub player: usize,
    pub description: String,
    /// That player's score right after the move.
    pub score: usize,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    players: Vec<Player>,
    rng: Pcg32,
    seed: u64,
    state: SessionState,
    current: usize,
    total_moves: usize,
    moves_left: usize,
    pending: Option<PendingMove>,
    last_report: Option<MoveReport>,
    notice: Option<&'static str>,
    turbo: bool,
}

impl GameSession {
    /// Sets up a fresh game: a random board, then players in human → random
    /// → search order, numbered from 1, each with a random goal.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = Pcg32::seed_from_u64(seed);
        let board = Board::random(config.max_depth, &mut rng);

        let mut players = Vec::with_capacity(config.player_count());
        for _ in 0..config.humans {
            players.push(Player::human(players.len() + 1, rng.random()));
        }
        for _ in 0..config.random {
            players.push(Player::random(players.len() + 1, rng.random()));
        }
        for &difficulty in &config.smart {
            players.push(Player::search(players.len() + 1, rng.random(), difficulty));
        }
        for player in &mut players {
            let score = player.goal().score(&board);
            player.set_score(score);
        }

        let total_moves = config.turns * players.len();
        let mut session = Self {
            board,
            players,
            rng,
            seed,
            state: SessionState::Playing,
            current: 0,
            total_moves,
            moves_left: total_moves,
            pending: None,
            last_report: None,
            notice: None,
            turbo: config.turbo,
        };
        if session.moves_left == 0 {
            session.finish();
        } else {
            session.begin_turn();
        }
        session
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Seed the whole game runs from; shown so any game can be replayed.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// True while the session is waiting on the current (human) player's
    /// keys.
    #[must_use]
    pub fn is_human_turn(&self) -> bool {
        self.state.is_playing() && self.pending.is_none() && self.current_player().is_human()
    }

    /// 1-based number of the move in progress (or, once finished, the
    /// total).
    #[must_use]
    pub fn turn_number(&self) -> usize {
        (self.total_moves - self.moves_left + 1).min(self.total_moves)
    }

    #[must_use]
    pub fn total_moves(&self) -> usize {
        self.total_moves
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&MoveReport> {
        self.last_report.as_ref()
    }

    /// Why the last attempted move was refused, until the next key.
    #[must_use]
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// First player with the maximum score; earlier players keep ties.
    ///
    /// # Panics
    ///
    /// Panics on a session with no players.
    #[must_use]
    pub fn winner(&self) -> &Player {
        let mut best = &self.players[0];
        for player in &self.players[1..] {
            if player.score() > best.score() {
                best = player;
            }
        }
        best
    }

    /// Advances automated play by one tick: plan the current bot's move,
    /// run down the pacing delay, then apply it. Human turns and finished
    /// sessions ignore ticks.
    pub fn tick(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        match self.pending.take() {
            Some(mut pending) if pending.ticks_left > 0 => {
                pending.ticks_left -= 1;
                self.pending = Some(pending);
            }
            Some(pending) => {
                self.board.root_mut().clear_highlights();
                let description = pending.plan.description();
                pending.plan.apply(&mut self.board, &mut self.rng);
                self.complete_move(description);
            }
            None => self.plan_bot_move(),
        }
    }

    /// Routes a key to the current player. Keys are dropped while a bot is
    /// moving and once the session has finished.
    pub fn handle_key(&mut self, code: KeyCode) {
        if !self.state.is_playing() || self.pending.is_some() {
            return;
        }
        let player = &mut self.players[self.current];
        match player.handle_key(&mut self.board, &mut self.rng, code) {
            KeyOutcome::Completed(description) => self.complete_move(description),
            KeyOutcome::Rejected(notice) => self.notice = Some(notice),
            KeyOutcome::Selection => self.notice = None,
            KeyOutcome::Ignored => {}
        }
    }

    /// Freezes the game: drops any pending bot move, clears highlights, and
    /// records every player's final score.
    pub fn finish(&mut self) {
        self.pending = None;
        self.notice = None;
        self.board.root_mut().clear_highlights();
        for player in &mut self.players {
            let score = player.goal().score(&self.board);
            player.set_score(score);
        }
        self.state = SessionState::Finished;
    }

    fn plan_bot_move(&mut self) {
        let player = &self.players[self.current];
        if player.is_human() {
            return;
        }
        match player.plan_move(&mut self.board, &mut self.rng) {
            Some(plan) => {
                self.board
                    .root_mut()
                    .node_at_path_mut(plan.path())
                    .set_highlighted(true);
                let ticks_left = if self.turbo { 0 } else { BOT_MOVE_DELAY_TICKS };
                self.pending = Some(PendingMove { plan, ticks_left });
            }
            None => self.complete_move("found no move to make".to_owned()),
        }
    }

    fn complete_move(&mut self, description: String) {
        self.board.root_mut().clear_highlights();
        self.notice = None;
        let player = &mut self.players[self.current];
        let score = player.goal().score(&self.board);
        player.set_score(score);
        self.last_report = Some(MoveReport {
            player: player.number(),
            description,
            score,
        });
        self.moves_left -= 1;
        if self.moves_left == 0 {
            self.finish();
        } else {
            self.current = (self.current + 1) % self.players.len();
            self.begin_turn();
        }
    }

    fn begin_turn(&mut self) {
        let player = &mut self.players[self.current];
        player.begin_turn(&mut self.board);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bots_config(seed: u64) -> GameConfig {
        GameConfig {
            max_depth: 2,
            humans: 0,
            random: 1,
            smart: vec![1],
            turns: 3,
            seed: Some(seed),
            turbo: true,
        }
    }

    fn human_config(seed: u64) -> GameConfig {
        GameConfig {
            max_depth: 2,
            humans: 1,
            random: 0,
            smart: Vec::new(),
            turns: 2,
            seed: Some(seed),
            turbo: false,
        }
    }

    fn run_to_completion(session: &mut GameSession) {
        for _ in 0..10_000 {
            if session.is_finished() {
                return;
            }
            session.tick();
        }
        panic!("session never finished");
    }

    #[test]
    fn test_a_bot_session_plays_every_turn_and_finishes() {
        let mut session = GameSession::new(&bots_config(11));
        assert!(!session.is_finished());
        run_to_completion(&mut session);

        // Two players, three turns each: the last mover is player 2.
        let report = session.last_report().unwrap();
        assert_eq!(report.player, 2);
        for player in session.players() {
            assert_eq!(player.score(), player.goal().score(session.board()));
        }
    }

    #[test]
    fn test_sessions_replay_identically_from_a_seed() {
        let mut a = GameSession::new(&bots_config(21));
        let mut b = GameSession::new(&bots_config(21));
        run_to_completion(&mut a);
        run_to_completion(&mut b);
        assert_eq!(a.board(), b.board());
        assert_eq!(a.winner().number(), b.winner().number());
    }

    #[test]
    fn test_pacing_highlights_the_block_then_delays_the_move() {
        let mut config = bots_config(31);
        config.turbo = false;
        let mut session = GameSession::new(&config);

        session.tick();
        assert!(session.last_report().is_none());
        for _ in 0..BOT_MOVE_DELAY_TICKS {
            session.tick();
        }
        assert!(session.last_report().is_none());
        session.tick();
        assert!(session.last_report().is_some());
    }

    #[test]
    fn test_turbo_skips_the_pacing_delay() {
        let mut session = GameSession::new(&bots_config(37));
        session.tick();
        session.tick();
        assert!(session.last_report().is_some());
    }

    #[test]
    fn test_ticks_never_advance_a_human_turn() {
        let mut session = GameSession::new(&human_config(41));
        for _ in 0..100 {
            session.tick();
        }
        assert!(session.is_human_turn());
        assert!(session.last_report().is_none());
        assert_eq!(session.turn_number(), 1);
    }

    #[test]
    fn test_a_human_key_move_completes_the_turn() {
        let mut session = GameSession::new(&human_config(43));
        session.handle_key(KeyCode::Char('x'));
        let report = session.last_report().unwrap();
        assert_eq!(report.player, 1);
        assert_eq!(report.description, "rotated a block clockwise");
        assert_eq!(session.turn_number(), 2);

        // The second of two solo turns ends the game.
        session.handle_key(KeyCode::Char('x'));
        assert!(session.is_finished());
    }

    #[test]
    fn test_selection_keys_leave_the_turn_open() {
        let mut session = GameSession::new(&human_config(47));
        session.handle_key(KeyCode::Char('+'));
        session.handle_key(KeyCode::Right);
        assert!(session.last_report().is_none());
        assert!(session.is_human_turn());
    }

    #[test]
    fn test_a_refused_move_raises_a_notice_until_the_next_key() {
        let mut session = GameSession::new(&human_config(49));
        // The root can never be smashed.
        session.handle_key(KeyCode::Char('s'));
        assert!(session.notice().is_some());
        assert!(session.is_human_turn());
        session.handle_key(KeyCode::Char('+'));
        assert!(session.notice().is_none());
    }

    #[test]
    fn test_finish_freezes_the_session_with_final_scores() {
        let mut session = GameSession::new(&human_config(53));
        session.finish();
        assert!(session.is_finished());
        for player in session.players() {
            assert_eq!(player.score(), player.goal().score(session.board()));
        }

        let report_count = session.last_report().cloned();
        session.handle_key(KeyCode::Char('x'));
        session.tick();
        assert_eq!(session.last_report().cloned(), report_count);
    }

    #[test]
    fn test_the_winner_is_the_first_player_with_the_top_score() {
        let mut session = GameSession::new(&bots_config(61));
        session.players[0].set_score(4);
        session.players[1].set_score(4);
        assert_eq!(session.winner().number(), 1);
        session.players[1].set_score(5);
        assert_eq!(session.winner().number(), 2);
    }

    #[test]
    fn test_player_numbers_follow_roster_order() {
        let config = GameConfig {
            max_depth: 2,
            humans: 1,
            random: 1,
            smart: vec![3],
            turns: 1,
            seed: Some(67),
            turbo: true,
        };
        let session = GameSession::new(&config);
        let labels: Vec<_> = session
            .players()
            .iter()
            .map(|player| (player.number(), player.kind_label()))
            .collect();
        assert_eq!(labels, [(1, "human"), (2, "random"), (3, "search")]);
    }
}
