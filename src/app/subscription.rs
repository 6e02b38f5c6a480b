// SPDX-License-Identifier: MPL-2.0
//! Keyboard shortcuts for the lightbox.

use super::Message;
use crate::lightbox::LightboxKey;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Listens for the lightbox shortcuts.
///
/// Key presses already captured by a widget are dropped. Whether the overlay
/// is shown is checked by the controller, not here.
pub fn keyboard_shortcuts() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }
        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                lightbox_key(&key).map(Message::KeyPressed)
            }
            _ => None,
        }
    })
}

fn lightbox_key(key: &Key) -> Option<LightboxKey> {
    match key {
        Key::Named(Named::Escape) => Some(LightboxKey::Escape),
        Key::Named(Named::ArrowLeft) => Some(LightboxKey::ArrowLeft),
        Key::Named(Named::ArrowRight) => Some(LightboxKey::ArrowRight),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_named_keys() {
        assert_eq!(lightbox_key(&Key::Named(Named::Escape)), Some(LightboxKey::Escape));
        assert_eq!(
            lightbox_key(&Key::Named(Named::ArrowLeft)),
            Some(LightboxKey::ArrowLeft)
        );
        assert_eq!(
            lightbox_key(&Key::Named(Named::ArrowRight)),
            Some(LightboxKey::ArrowRight)
        );
    }

    #[test]
    fn ignores_other_keys() {
        assert_eq!(lightbox_key(&Key::Named(Named::Enter)), None);
        assert_eq!(lightbox_key(&Key::Character("a".into())), None);
    }
}
