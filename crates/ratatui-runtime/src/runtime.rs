use std::{io, time::Duration};

use crate::{
    App,
    event_loop::{EventLoop, LoopEvent},
};

/// Drives an [`App`] inside a terminal session.
///
/// Owns the event loop and the terminal lifetime; the application only ever
/// sees its own handler calls.
#[derive(Debug, Default)]
pub struct Runtime {
    events: EventLoop,
}

impl Runtime {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the logic tick rate in ticks per second. `None` disables ticks.
    pub fn set_tick_rate(&mut self, rate: Option<f64>) {
        self.set_tick_interval(rate.map(|rate| Duration::from_secs_f64(1.0 / rate)));
    }

    /// Sets the logic tick interval. `None` disables ticks.
    pub fn set_tick_interval(&mut self, interval: Option<Duration>) {
        self.events.set_tick_interval(interval);
    }

    /// Runs `app` until [`App::should_exit`] reports true.
    ///
    /// Enters the alternate screen for the whole run and restores the
    /// terminal on the way out, then dispatches loop events: ticks to
    /// [`App::update`], repaints to [`App::draw`], input to
    /// [`App::handle_event`].
    pub fn run<A>(mut self, app: &mut A) -> io::Result<()>
    where
        A: App,
    {
        app.init(&mut self);

        ratatui::run(|terminal| {
            while !app.should_exit() {
                match self.events.next()? {
                    LoopEvent::Tick => app.update(&mut self),
                    LoopEvent::Render => {
                        terminal.draw(|frame| app.draw(frame))?;
                    }
                    LoopEvent::Terminal(event) => app.handle_event(&mut self, event),
                }
            }
            Ok(())
        })
    }
}
