use crossterm::event::Event;
use ratatui::Frame;

use crate::Runtime;

/// What [`Runtime::run`] drives.
///
/// The runtime owns the terminal and the pacing; the application owns all
/// state. Each loop pass calls exactly one of the three handlers, then
/// checks [`App::should_exit`].
pub trait App {
    /// Runs once before the first loop pass. The place to set the tick rate.
    fn init(&mut self, runtime: &mut Runtime);

    /// True once the application wants the terminal back.
    fn should_exit(&self) -> bool;

    /// Receives terminal input: keys, resize, focus changes.
    fn handle_event(&mut self, runtime: &mut Runtime, event: Event);

    /// Advances time-driven state. Called once per tick, never without a
    /// tick rate set.
    fn update(&mut self, runtime: &mut Runtime);

    /// Paints the whole frame. Called whenever something may have changed.
    fn draw(&self, frame: &mut Frame);
}
