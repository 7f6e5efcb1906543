//! Button events sent by the display terminal

/// Button input reported by the display terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// Up button, single click
    ButtonUp,
    /// Down button, single click
    ButtonDown,
    /// Select (middle) button, single click
    ButtonSelect,
    /// Back button, single click
    ButtonBack,
}

// Wire format values
const EVENT_BUTTON_UP: u8 = 0x01;
const EVENT_BUTTON_DOWN: u8 = 0x02;
const EVENT_BUTTON_SELECT: u8 = 0x10;
const EVENT_BUTTON_BACK: u8 = 0x11;

impl InputEvent {
    /// Parse an event from its wire format byte
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            EVENT_BUTTON_UP => Some(InputEvent::ButtonUp),
            EVENT_BUTTON_DOWN => Some(InputEvent::ButtonDown),
            EVENT_BUTTON_SELECT => Some(InputEvent::ButtonSelect),
            EVENT_BUTTON_BACK => Some(InputEvent::ButtonBack),
            _ => None,
        }
    }

    /// Convert to wire format byte
    pub fn to_byte(self) -> u8 {
        match self {
            InputEvent::ButtonUp => EVENT_BUTTON_UP,
            InputEvent::ButtonDown => EVENT_BUTTON_DOWN,
            InputEvent::ButtonSelect => EVENT_BUTTON_SELECT,
            InputEvent::ButtonBack => EVENT_BUTTON_BACK,
        }
    }

    /// Returns true for the up/down pair used to step the debug clock
    pub fn is_step(&self) -> bool {
        matches!(self, InputEvent::ButtonUp | InputEvent::ButtonDown)
    }
}
