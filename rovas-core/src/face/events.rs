//! Events delivered to the face by its host

use rovas_protocol::InputEvent;

use crate::time::ClockTime;

/// Something the host tells the face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaceEvent {
    /// Periodic clock tick carrying the current wall-clock time
    Tick(ClockTime),
    /// A button was pressed
    Input(InputEvent),
}

impl From<InputEvent> for FaceEvent {
    fn from(event: InputEvent) -> Self {
        FaceEvent::Input(event)
    }
}

impl From<ClockTime> for FaceEvent {
    fn from(time: ClockTime) -> Self {
        FaceEvent::Tick(time)
    }
}
