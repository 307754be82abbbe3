use std::collections::HashMap;
use std::str::FromStr;

use crossterm::event::{KeyCode, KeyModifiers};
use marquee_core::config::KeymapConfig;
use tracing::warn;

use crate::input::Action;

/// A key code with its modifiers, as crossterm reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

/// Vim-style notation: `l`, `L` (shift), `<C-n>`, `<S-Tab>`, `<Tab>`, `<Left>`, `<Space>`...
impl FromStr for KeyBinding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || format!("invalid key binding '{}'", s);

        let Some(inner) = s.strip_prefix('<').and_then(|rest| rest.strip_suffix('>')) else {
            let c = single_char(s).ok_or_else(invalid)?;
            let modifiers = if c.is_ascii_uppercase() {
                KeyModifiers::SHIFT
            } else {
                KeyModifiers::NONE
            };
            return Ok(Self::new(KeyCode::Char(c), modifiers));
        };

        let (modifiers, name) = match inner.split_once('-') {
            Some(("C", name)) if !name.is_empty() => (KeyModifiers::CONTROL, name),
            Some(("S", name)) if !name.is_empty() => (KeyModifiers::SHIFT, name),
            _ => (KeyModifiers::NONE, inner),
        };

        let code = named_key(name).ok_or_else(invalid)?;
        // Terminals report Shift+Tab as BackTab
        let code = match (code, modifiers) {
            (KeyCode::Tab, KeyModifiers::SHIFT) => KeyCode::BackTab,
            (code, _) => code,
        };
        Ok(Self::new(code, modifiers))
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn named_key(name: &str) -> Option<KeyCode> {
    let code = match name.to_ascii_lowercase().as_str() {
        "cr" | "enter" => KeyCode::Enter,
        "esc" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        other => KeyCode::Char(single_char(other)?),
    };
    Some(code)
}

/// Key-to-action lookup built from the `[keymap]` config section
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyBinding, Action>,
}

impl Default for Keymap {
    fn default() -> Self {
        Self::from_config(&KeymapConfig::default())
    }
}

impl Keymap {
    /// Build the keymap. Invalid or conflicting entries are skipped with a
    /// warning; the first binding of a key wins.
    pub fn from_config(config: &KeymapConfig) -> Self {
        let table = [
            (&config.quit, Action::Quit),
            (&config.next_page, Action::NextPage),
            (&config.prev_page, Action::PrevPage),
            (&config.next_card, Action::NextCard),
            (&config.prev_card, Action::PrevCard),
            (&config.next_slide, Action::NextSlide),
            (&config.prev_slide, Action::PrevSlide),
            (&config.toggle_focus, Action::ToggleFocus),
            (&config.scroll_down, Action::ScrollDown),
            (&config.scroll_up, Action::ScrollUp),
        ];

        let mut bindings = HashMap::new();
        for (notation, action) in table {
            let binding = match notation.parse::<KeyBinding>() {
                Ok(binding) => binding,
                Err(e) => {
                    warn!("{}; {:?} left unbound", e, action);
                    continue;
                }
            };
            if let Some(existing) = bindings.get(&binding) {
                warn!("Key '{}' already bound to {:?}, ignoring {:?}", notation, existing, action);
                continue;
            }
            bindings.insert(binding, action);
        }

        // Fixed fallbacks
        bindings.insert(
            KeyBinding::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Action::Quit,
        );
        bindings.entry(KeyBinding::plain(KeyCode::Down)).or_insert(Action::ScrollDown);
        bindings.entry(KeyBinding::plain(KeyCode::Up)).or_insert(Action::ScrollUp);

        Self { bindings }
    }

    pub fn get(&self, binding: &KeyBinding) -> Option<Action> {
        self.bindings.get(binding).copied()
    }
}
