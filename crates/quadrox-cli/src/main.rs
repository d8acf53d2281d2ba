mod command;
mod game;
mod ui;

fn main() -> anyhow::Result<()> {
    command::run()
}
