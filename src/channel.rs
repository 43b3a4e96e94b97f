//! Output channel abstraction for delivering engine replies.
//!
//! The engine has no knowledge of presentation; it hands each chosen reply
//! to an [`OutputChannel`] and moves on. Delivery is fire-and-forget from
//! the engine's point of view: an I/O failure is logged and never retried.

use std::io::{self, Result as IoResult, Stdout, Write};
use std::sync::{Arc, Mutex};

use crate::message::Message;

/// Abstraction over an output target that consumes engine replies.
///
/// This is the engine's entire contract with the presentation layer.
/// Implementations decide how a reply is rendered: written to a terminal,
/// pushed to a UI widget, appended to a transcript buffer.
pub trait OutputChannel: Send {
    /// Handle one reply message. The channel decides how to render it.
    fn deliver(&mut self, message: &Message) -> IoResult<()>;
}

/// Stdout channel that prints reply content line by line.
pub struct StdOutChannel {
    handle: Stdout,
}

impl Default for StdOutChannel {
    fn default() -> Self {
        Self {
            handle: io::stdout(),
        }
    }
}

impl StdOutChannel {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OutputChannel for StdOutChannel {
    fn deliver(&mut self, message: &Message) -> IoResult<()> {
        writeln!(self.handle, "{}", message.content)?;
        self.handle.flush()
    }
}

/// In-memory channel for testing and transcript snapshots.
#[derive(Clone, Default)]
pub struct MemoryChannel {
    entries: Arc<Mutex<Vec<Message>>>,
}

impl MemoryChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a snapshot of all delivered messages.
    pub fn snapshot(&self) -> Vec<Message> {
        self.entries.lock().unwrap().clone()
    }

    /// Content of the most recently delivered message, if any.
    pub fn last_content(&self) -> Option<String> {
        self.entries
            .lock()
            .unwrap()
            .last()
            .map(|m| m.content.clone())
    }

    /// Number of messages delivered so far.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns true if nothing has been delivered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().unwrap().is_empty()
    }

    /// Clear all captured messages.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

impl OutputChannel for MemoryChannel {
    fn deliver(&mut self, message: &Message) -> IoResult<()> {
        self.entries.lock().unwrap().push(message.clone());
        Ok(())
    }
}
