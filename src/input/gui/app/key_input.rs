use winit::event::ElementState;
use winit::keyboard::Key;

use crate::controllers::interactive::InputEvent;

/// Translates a key press into a controller key event. Only presses count,
/// so the platform's key repeat produces one event per repeat.
#[must_use]
pub fn input_event_for_key(logical_key: &Key, state: ElementState) -> Option<InputEvent> {
    if state != ElementState::Pressed {
        return None;
    }

    match logical_key {
        Key::Character(text) => {
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(key), None) => Some(InputEvent::Key(key)),
                _ => None,
            }
        }
        _ => None,
    }
}
