use clap::{Parser, Subcommand};

use self::play::{AutoPlayArg, PlayArg};

mod play;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Play on a random board, one move per player per turn
    #[command(name = "play")]
    Play(#[clap(flatten)] PlayArg),
    /// Watch automated players compete
    #[command(name = "auto-play")]
    AutoPlay(#[clap(flatten)] AutoPlayArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.mode.unwrap_or(Mode::Play(PlayArg::default())) {
        Mode::Play(arg) => play::run_play(&arg),
        Mode::AutoPlay(arg) => play::run_auto(&arg),
    }
}
