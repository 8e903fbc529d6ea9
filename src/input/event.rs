/// Platform-agnostic input events.
///
/// The window layer converts its own events into these and feeds them to an
/// [`InputHandler`](super::InputHandler).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Cursor moved to an absolute window position, in whole pixels.
    CursorMoved { x: i32, y: i32 },
    /// Mouse button pressed or released.
    MouseButton { button: MouseButton, pressed: bool },
    /// Key pressed. Releases and repeats are not forwarded.
    Key(Key),
    /// Modifier state changed.
    ModifiersChanged { alt: bool },
}

/// Mouse buttons the viewer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Orbit.
    Left,
    /// Pan.
    Middle,
    /// Zoom.
    Right,
    Other,
}

/// Keys the viewer reacts to. Everything else maps to [`Key::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Escape,
    Enter,
    F1,
    Char(char),
    Other,
}

impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::Left,
            winit::event::MouseButton::Middle => Self::Middle,
            winit::event::MouseButton::Right => Self::Right,
            _ => Self::Other,
        }
    }
}

impl From<&winit::keyboard::Key> for Key {
    fn from(key: &winit::keyboard::Key) -> Self {
        use winit::keyboard::{Key as WinitKey, NamedKey};

        match key {
            WinitKey::Named(NamedKey::Space) => Self::Space,
            WinitKey::Named(NamedKey::Escape) => Self::Escape,
            WinitKey::Named(NamedKey::Enter) => Self::Enter,
            WinitKey::Named(NamedKey::F1) => Self::F1,
            WinitKey::Character(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(' '), None) => Self::Space,
                    (Some('\r' | '\n'), None) => Self::Enter,
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Other,
                }
            }
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::{Key as WinitKey, NamedKey, SmolStr};

    #[test]
    fn named_keys_map_to_viewer_keys() {
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::Space)), Key::Space);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::F1)), Key::F1);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::Escape)), Key::Escape);
        assert_eq!(Key::from(&WinitKey::Named(NamedKey::Tab)), Key::Other);
    }

    #[test]
    fn single_characters_are_kept() {
        assert_eq!(Key::from(&WinitKey::Character(SmolStr::new("q"))), Key::Char('q'));
        assert_eq!(Key::from(&WinitKey::Character(SmolStr::new(" "))), Key::Space);
        assert_eq!(Key::from(&WinitKey::Character(SmolStr::new("ab"))), Key::Other);
    }

    #[test]
    fn extra_mouse_buttons_are_ignored() {
        assert_eq!(MouseButton::from(winit::event::MouseButton::Back), MouseButton::Other);
        assert_eq!(MouseButton::from(winit::event::MouseButton::Middle), MouseButton::Middle);
    }
}
