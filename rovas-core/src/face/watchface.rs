//! Watchface controller
//!
//! Decides what the face shows in response to clock ticks and button
//! presses. Ticks always show the real time. With debug input enabled, the
//! up and down buttons step a [`DebugClock`] (seeded from the first tick)
//! and show its reading instead, until the next tick.

use super::events::FaceEvent;
use crate::config::FaceConfig;
use crate::debug::DebugClock;
use crate::encoder::WordTime;
use crate::time::{ClockTime, TimeSource};
use rovas_protocol::InputEvent;

/// Watchface state
#[derive(Debug, Clone)]
pub struct Watchface {
    config: FaceConfig,
    debug_clock: DebugClock,
    current: Option<WordTime>,
}

impl Watchface {
    pub fn new(config: FaceConfig) -> Self {
        Self {
            config,
            debug_clock: DebugClock::new(),
            current: None,
        }
    }

    pub fn config(&self) -> &FaceConfig {
        &self.config
    }

    pub fn debug_clock(&self) -> &DebugClock {
        &self.debug_clock
    }

    /// Lines currently on the face, if anything has been shown yet
    pub fn current(&self) -> Option<WordTime> {
        self.current
    }

    /// Face was loaded by the host
    ///
    /// Shows the time from `source` right away when `show_on_load` is set,
    /// so the screen is not blank until the first tick.
    pub fn load<S: TimeSource>(&mut self, source: &S) -> Option<WordTime> {
        if !self.config.show_on_load {
            return None;
        }
        Some(self.show(source.now()))
    }

    /// Process an event
    ///
    /// Returns the lines to draw, or `None` if the event was ignored.
    pub fn handle(&mut self, event: FaceEvent) -> Option<WordTime> {
        match event {
            FaceEvent::Tick(time) => {
                if self.debug_clock.seed(time) {
                    #[cfg(feature = "defmt")]
                    defmt::debug!("debug clock seeded at {}", time);
                }
                Some(self.show(time))
            }
            FaceEvent::Input(input) => self.handle_input(input),
        }
    }

    fn handle_input(&mut self, input: InputEvent) -> Option<WordTime> {
        if !self.config.debug_input || !input.is_step() {
            #[cfg(feature = "defmt")]
            defmt::trace!("ignoring {}", input);
            return None;
        }

        let time = if input == InputEvent::ButtonUp {
            self.debug_clock.increment_hour()
        } else {
            self.debug_clock.increment_minute()
        };
        Some(self.show(time))
    }

    fn show(&mut self, time: ClockTime) -> WordTime {
        let word_time = WordTime::from_time(time);
        #[cfg(feature = "defmt")]
        defmt::trace!("showing {} as {}", time, word_time);
        self.current = Some(word_time);
        word_time
    }
}
