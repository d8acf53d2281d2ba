use std::{
    io,
    time::{Duration, Instant},
};

use crossterm::event::{self, Event as CrosstermEvent};

/// What the loop hands the runtime next.
#[derive(Debug, Clone, derive_more::From)]
pub(crate) enum LoopEvent {
    /// A logic step is due.
    Tick,
    /// The screen needs repainting.
    Render,
    /// Terminal input: keys, resize, focus changes.
    Terminal(CrosstermEvent),
}

/// Paces ticks and repaints around blocking terminal polls.
///
/// Ticks fire at a fixed interval once one is set; without one, terminal
/// input is the only wake source. Repaints are demand-driven: construction,
/// every tick, and every terminal event mark the screen dirty, and a pass
/// that finds nothing else due turns the dirty flag into one render.
#[derive(Debug)]
pub(crate) struct EventLoop {
    tick_interval: Option<Duration>,
    last_tick: Instant,
    dirty: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl EventLoop {
    pub(crate) fn new() -> Self {
        Self {
            tick_interval: None,
            last_tick: Instant::now(),
            dirty: true,
        }
    }

    /// Sets the tick interval. `None` disables ticks.
    pub(crate) fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.tick_interval = interval;
    }

    /// Blocks until the next tick, repaint, or terminal event.
    pub(crate) fn next(&mut self) -> io::Result<LoopEvent> {
        loop {
            if let Some(due) = self.pop_due(Instant::now()) {
                return Ok(due);
            }
            if let Some(timeout) = self.wait_budget(Instant::now())
                && !event::poll(timeout)?
            {
                continue;
            }
            self.dirty = true;
            return Ok(event::read()?.into());
        }
    }

    /// Takes the most urgent scheduled event, if one is due at `now`. Ticks
    /// outrank repaints so a stalled terminal cannot starve game logic.
    fn pop_due(&mut self, now: Instant) -> Option<LoopEvent> {
        if let Some(interval) = self.tick_interval
            && now.duration_since(self.last_tick) >= interval
        {
            self.last_tick = now;
            self.dirty = true;
            return Some(LoopEvent::Tick);
        }
        if self.dirty {
            self.dirty = false;
            return Some(LoopEvent::Render);
        }
        None
    }

    /// How long the loop may block on terminal input before the next tick
    /// comes due. `None` means there is no tick to wait for.
    fn wait_budget(&self, now: Instant) -> Option<Duration> {
        let next_tick = self.last_tick + self.tick_interval?;
        Some(next_tick.saturating_duration_since(now))
    }
}
