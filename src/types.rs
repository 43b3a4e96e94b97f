//! Core identifier types for the dialograph engine.
//!
//! This module defines the handle types used throughout the system for
//! referring to conversation states and transitions inside a
//! [`DialogueGraph`](crate::graphs::DialogueGraph). These are the core
//! domain concepts that define what a dialogue *is*.
//!
//! # Key Types
//!
//! - [`NodeId`]: Stable handle to a conversation state in a graph arena
//! - [`EdgeId`]: Stable handle to a keyword-labeled transition
//! - [`SessionId`]: Identity of one conversation session, for log correlation
//!
//! # Handles, not pointers
//!
//! The graph owns all node and edge data in contiguous arenas; everything
//! else refers to that data by ID. IDs are assigned at build time and never
//! reused, so a handle stays valid for the lifetime of the graph it came
//! from. Handles carry no lifetime and are `Copy`, which is what makes a
//! conversation session a small, freely movable value.
//!
//! # Examples
//!
//! ```rust
//! use dialograph::types::NodeId;
//!
//! let root = NodeId(0);
//! assert_eq!(root.index(), 0);
//! assert_eq!(format!("{root}"), "node#0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a conversation state within a [`DialogueGraph`].
///
/// A `NodeId` is an index into the graph's node arena. It is only
/// meaningful together with the graph that issued it; resolving an ID
/// against a different graph is a programming error and is rejected when
/// a session binds or jumps (see
/// [`ConversationEngine::set_current_node`](crate::engine::ConversationEngine::set_current_node)).
///
/// [`DialogueGraph`]: crate::graphs::DialogueGraph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Returns the raw arena index backing this handle.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Stable handle to a transition within a [`DialogueGraph`].
///
/// Edges are stored in the graph's edge arena in insertion order; that
/// order is what the engine's deterministic tie-break is defined over.
///
/// [`DialogueGraph`]: crate::graphs::DialogueGraph
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    /// Returns the raw arena index backing this handle.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// Identity of a single conversation session.
///
/// Multiple sessions may traverse the same shared graph concurrently; the
/// session ID appears in tracing spans so their logs can be told apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    /// Generates a fresh random session identity.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
