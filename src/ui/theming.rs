// SPDX-License-Identifier: MPL-2.0
//! Theme mode selection.

use iced::Theme;
use serde::{Deserialize, Serialize};

/// Theme preference stored in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the desktop setting.
    #[default]
    System,
}

impl ThemeMode {
    /// Concrete iced theme for this preference.
    ///
    /// `System` queries the desktop, which may block; resolve once at startup
    /// and keep the result.
    #[must_use]
    pub fn resolve(self) -> Theme {
        let dark = match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark(),
        };
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

fn system_prefers_dark() -> bool {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => false,
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(?err, "system theme unknown, using dark");
            true
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_modes_resolve_without_detection() {
        assert_eq!(ThemeMode::Dark.resolve(), Theme::Dark);
        assert_eq!(ThemeMode::Light.resolve(), Theme::Light);
    }

    #[test]
    fn system_mode_resolves_to_a_builtin_theme() {
        let theme = ThemeMode::System.resolve();
        assert!(theme == Theme::Dark || theme == Theme::Light);
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let parsed: Wrapper = toml::from_str("mode = \"light\"").expect("valid toml");
        assert_eq!(parsed.mode, ThemeMode::Light);
    }
}
