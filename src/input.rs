//! Input boundary
//!
//! The platform polls pressed keys once per tick. [`KeyBindings`] maps them to
//! raw signals, and [`TickInput::try_from`] rejects any poll that does not
//! report every signal the core needs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Physical keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Space,
    Enter,
    Escape,
}

/// Logical per-tick signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Signal {
    Thrust,
    Restart,
    Quit,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::Thrust => "thrust",
            Signal::Restart => "restart",
            Signal::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// Input contract violation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// The poll did not report this signal at all
    #[error("input snapshot is missing the '{0}' signal")]
    MissingSignal(Signal),
}

/// One poll as reported by the platform; `None` means "not reported"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInput {
    pub thrust: Option<bool>,
    pub restart: Option<bool>,
    pub quit: Option<bool>,
}

impl RawInput {
    /// A fully reported poll
    pub fn new(thrust: bool, restart: bool, quit: bool) -> Self {
        Self {
            thrust: Some(thrust),
            restart: Some(restart),
            quit: Some(quit),
        }
    }

    /// Nothing pressed
    pub fn idle() -> Self {
        Self::new(false, false, false)
    }
}

impl TryFrom<RawInput> for TickInput {
    type Error = InputError;

    fn try_from(raw: RawInput) -> Result<Self, Self::Error> {
        Ok(TickInput {
            thrust: raw.thrust.ok_or(InputError::MissingSignal(Signal::Thrust))?,
            restart: raw
                .restart
                .ok_or(InputError::MissingSignal(Signal::Restart))?,
            quit: raw.quit.ok_or(InputError::MissingSignal(Signal::Quit))?,
        })
    }
}

/// Keys bound to each signal (a signal with no keys cannot be reported)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub thrust: Vec<Key>,
    pub restart: Vec<Key>,
    pub quit: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            thrust: vec![Key::Space],
            restart: vec![Key::Enter],
            quit: vec![Key::Escape],
        }
    }
}

impl KeyBindings {
    /// Translate the pressed-key snapshot into raw signals
    pub fn poll(&self, pressed: &[Key]) -> RawInput {
        let read = |keys: &[Key]| {
            (!keys.is_empty()).then(|| keys.iter().any(|k| pressed.contains(k)))
        };
        RawInput {
            thrust: read(&self.thrust),
            restart: read(&self.restart),
            quit: read(&self.quit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        let raw = bindings.poll(&[Key::Space]);
        let input = TickInput::try_from(raw).unwrap();
        assert!(input.thrust);
        assert!(!input.restart);
        assert!(!input.quit);

        let input = TickInput::try_from(bindings.poll(&[Key::Enter, Key::Escape])).unwrap();
        assert!(!input.thrust);
        assert!(input.restart);
        assert!(input.quit);
    }

    #[test]
    fn test_missing_signal_is_rejected() {
        let raw = RawInput {
            thrust: Some(true),
            restart: None,
            quit: Some(false),
        };
        assert_eq!(
            TickInput::try_from(raw),
            Err(InputError::MissingSignal(Signal::Restart))
        );
    }

    #[test]
    fn test_unbound_signal_is_missing() {
        let bindings = KeyBindings {
            quit: Vec::new(),
            ..Default::default()
        };
        let err = TickInput::try_from(bindings.poll(&[])).unwrap_err();
        assert_eq!(err, InputError::MissingSignal(Signal::Quit));
        assert_eq!(
            err.to_string(),
            "input snapshot is missing the 'quit' signal"
        );
    }
}
