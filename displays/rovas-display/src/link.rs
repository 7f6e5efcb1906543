//! Face side of the serial link to a display terminal
//!
//! Owns the face controller and the screen it draws into. Bytes from the
//! terminal go through [`FaceLink::feed`]: button frames reach the face,
//! heartbeat requests are answered. Whenever the screen changes,
//! [`FaceLink::pending_frames`] yields the frames that bring the terminal
//! up to date.

use rovas_core::config::FaceConfig;
use rovas_core::face::{FaceEvent, Watchface};
use rovas_core::{ClockTime, TimeSource};
use rovas_protocol::{DisplayCommand, FaceMessage, Frame, FrameError, FrameParser};

use crate::present::encode_screen;
use crate::screen::Screen;

/// Face controller wired to a display terminal
pub struct FaceLink {
    face: Watchface,
    screen: Screen,
    parser: FrameParser,
}

impl FaceLink {
    pub fn new(config: FaceConfig) -> Self {
        Self {
            face: Watchface::new(config),
            screen: Screen::new(),
            parser: FrameParser::new(),
        }
    }

    pub fn face(&self) -> &Watchface {
        &self.face
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Face was loaded by the host
    pub fn load<S: TimeSource>(&mut self, source: &S) {
        if let Some(word_time) = self.face.load(source) {
            self.screen.show(&word_time);
        }
    }

    /// Clock tick from the host
    pub fn tick(&mut self, time: ClockTime) {
        self.dispatch(FaceEvent::Tick(time));
    }

    /// Feed one byte received from the terminal
    ///
    /// Returns a frame to send straight back (the answer to a heartbeat),
    /// or `None`. Corrupt frames and unknown commands are reported as
    /// errors; the link stays usable.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Frame>, FrameError> {
        let frame = match self.parser.feed(byte)? {
            Some(frame) => frame,
            None => return Ok(None),
        };

        match DisplayCommand::from_frame(&frame)? {
            DisplayCommand::Ping => {
                #[cfg(feature = "defmt")]
                defmt::trace!("PING received");
                FaceMessage::Pong.to_frame().map(Some)
            }
            DisplayCommand::Input(input) => {
                #[cfg(feature = "defmt")]
                defmt::debug!("Input event: {}", input);
                self.dispatch(FaceEvent::Input(input));
                Ok(None)
            }
        }
    }

    /// Frames for the terminal if the screen changed since the last call
    ///
    /// The screen counts as sent once this returns `Some`.
    pub fn pending_frames(&mut self) -> Option<impl Iterator<Item = Frame> + '_> {
        if !self.screen.is_dirty() {
            return None;
        }
        self.screen.mark_clean();
        Some(encode_screen(&self.screen))
    }

    fn dispatch(&mut self, event: FaceEvent) {
        if let Some(word_time) = self.face.handle(event) {
            self.screen.show(&word_time);
        }
    }
}
