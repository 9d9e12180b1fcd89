//! Translation of terminal key events into commands

use std::future::ready;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::stream::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::commands::{Command, KeyBindings};

/// Command for a key event; Ctrl-C always exits since raw mode swallows SIGINT
pub fn command_for_key(bindings: &KeyBindings, key: &KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            Some(Command::Exit)
        }
        KeyCode::Char(c) => {
            let command = bindings.command_for(c);
            if command.is_none() {
                debug!("Ignoring unbound key {:?}", c);
            }
            command
        }
        _ => None,
    }
}

/// Stream of commands read from the terminal
pub fn command_stream(bindings: KeyBindings) -> impl Stream<Item = Command> + Unpin {
    EventStream::new().filter_map(move |event| {
        ready(match event {
            Ok(Event::Key(key)) => command_for_key(&bindings, &key),
            Ok(_) => None,
            Err(e) => {
                warn!("Failed to read terminal event: {}", e);
                None
            }
        })
    })
}
