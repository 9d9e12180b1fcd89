//! Stopwatch commands and their key bindings

/// Discrete commands accepted from the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    StartStop,
    Reset,
    Exit,
}

/// Keys bound to each command; matching ignores case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub start_stop: char,
    pub reset: char,
    pub exit: char,
}

impl KeyBindings {
    /// Create bindings, rejecting keys that would be ambiguous
    pub fn new(start_stop: char, reset: char, exit: char) -> Result<Self, String> {
        let keys = [start_stop, reset, exit];
        for (i, a) in keys.iter().enumerate() {
            if a.is_control() || a.is_whitespace() {
                return Err(format!("Key {:?} cannot be bound to a command", a));
            }
            for b in &keys[i + 1..] {
                if same_key(*a, *b) {
                    return Err(format!("Key '{}' is bound to more than one command", a));
                }
            }
        }

        Ok(Self { start_stop, reset, exit })
    }

    /// Command bound to `key`, if any
    pub fn command_for(&self, key: char) -> Option<Command> {
        if same_key(key, self.start_stop) {
            Some(Command::StartStop)
        } else if same_key(key, self.reset) {
            Some(Command::Reset)
        } else if same_key(key, self.exit) {
            Some(Command::Exit)
        } else {
            None
        }
    }

    /// The static menu shown before the interactive loop starts
    pub fn menu_lines(&self) -> [String; 3] {
        [
            format!("({}) . Start/Stop", self.start_stop.to_ascii_uppercase()),
            format!("({}) . Reset", self.reset.to_ascii_uppercase()),
            format!("({}) . Exit", self.exit.to_ascii_uppercase()),
        ]
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self { start_stop: 'S', reset: 'R', exit: 'T' }
    }
}

fn same_key(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
