/// Everything a session needs to set itself up, resolved from the command
/// line by the command layer.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Board subdivision depth, `2..=5`.
    pub max_depth: u32,
    /// Number of human players.
    pub humans: usize,
    /// Number of players that move at random.
    pub random: usize,
    /// One search player per entry, at the entry's difficulty.
    pub smart: Vec<u8>,
    /// Turns per player.
    pub turns: usize,
    /// Seed for board generation and every automated decision; `None` seeds
    /// from entropy.
    pub seed: Option<u64>,
    /// Skip the pacing delay between automated moves.
    pub turbo: bool,
}

impl GameConfig {
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.humans + self.random + self.smart.len()
    }
}
