use ratatui_runtime::Runtime;

use crate::{
    game::{GameConfig, GameSession},
    ui::GameApp,
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PlayArg {
    /// Board subdivision depth
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(2..=5))]
    depth: u32,
    /// Number of human players
    #[clap(long, default_value_t = 1)]
    humans: usize,
    /// Number of players that move at random
    #[clap(long, default_value_t = 0)]
    random: usize,
    /// Add a search player with the given difficulty (repeatable)
    #[clap(long, value_name = "DIFFICULTY")]
    smart: Vec<u8>,
    /// Turns per player
    #[clap(long, default_value_t = 30)]
    turns: usize,
    /// Seed for board generation and every automated decision
    #[clap(long)]
    seed: Option<u64>,
}

impl Default for PlayArg {
    fn default() -> Self {
        Self {
            depth: 4,
            humans: 1,
            random: 0,
            smart: Vec::new(),
            turns: 30,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct AutoPlayArg {
    /// Board subdivision depth
    #[clap(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(2..=5))]
    depth: u32,
    /// Number of players that move at random
    #[clap(long, default_value_t = 0)]
    random: usize,
    /// Add a search player with the given difficulty (repeatable)
    #[clap(long, value_name = "DIFFICULTY", default_values_t = [1, 6])]
    smart: Vec<u8>,
    /// Turns per player
    #[clap(long, default_value_t = 10)]
    turns: usize,
    /// Seed for board generation and every automated decision
    #[clap(long)]
    seed: Option<u64>,
    /// Skip the pacing delay between automated moves
    #[clap(long, default_value_t = false)]
    turbo: bool,
}

pub(crate) fn run_play(arg: &PlayArg) -> anyhow::Result<()> {
    run_session(GameConfig {
        max_depth: arg.depth,
        humans: arg.humans,
        random: arg.random,
        smart: arg.smart.clone(),
        turns: arg.turns,
        seed: arg.seed,
        turbo: false,
    })
}

pub(crate) fn run_auto(arg: &AutoPlayArg) -> anyhow::Result<()> {
    run_session(GameConfig {
        max_depth: arg.depth,
        humans: 0,
        random: arg.random,
        smart: arg.smart.clone(),
        turns: arg.turns,
        seed: arg.seed,
        turbo: arg.turbo,
    })
}

fn run_session(config: GameConfig) -> anyhow::Result<()> {
    anyhow::ensure!(config.player_count() > 0, "at least one player is required");

    let mut app = GameApp::new(GameSession::new(&config));
    Runtime::new().run(&mut app)?;

    let session = app.into_session();
    if session.is_finished() {
        print_results(&session);
    }
    Ok(())
}

fn print_results(session: &GameSession) {
    println!("seed: {}", session.seed());
    for player in session.players() {
        println!(
            "player {} ({}): {} points, goal was to {}",
            player.number(),
            player.kind_label(),
            player.score(),
            player.goal(),
        );
    }
    let winner = session.winner();
    println!("winner: player {} with {}", winner.number(), winner.score());
}
