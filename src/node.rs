//! Conversation state data for the dialograph engine.
//!
//! A [`DialogueNode`] is one state of a conversation: the scripted replies
//! the engine may announce when a session arrives there, plus the ordered
//! list of outgoing transitions. Nodes are owned by their
//! [`DialogueGraph`](crate::graphs::DialogueGraph) and handed out by
//! reference; sessions refer to them only through [`NodeId`] handles.

use serde::{Deserialize, Serialize};

use crate::types::{EdgeId, NodeId};

/// One conversation state: a set of candidate replies and the transitions
/// leading away from it.
///
/// After compilation every node reachable from the graph root carries at
/// least one reply; a node may have zero outgoing edges, in which case it
/// is an absorbing state and the engine falls back to the root on the next
/// received message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueNode {
    pub(crate) id: NodeId,
    pub(crate) replies: Vec<String>,
    pub(crate) outgoing: Vec<EdgeId>,
}

impl DialogueNode {
    /// The handle this node is stored under in its graph.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// The scripted replies for this state, in configuration order.
    ///
    /// The engine draws uniformly from this list each time the state is
    /// announced.
    #[must_use]
    pub fn replies(&self) -> &[String] {
        &self.replies
    }

    /// Outgoing transitions in configuration order.
    ///
    /// Order matters: the engine's tie-break picks the first edge
    /// enumerated here when distances are equal.
    #[must_use]
    pub fn outgoing(&self) -> &[EdgeId] {
        &self.outgoing
    }

    /// Returns true if this is an absorbing state (no outgoing edges).
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.outgoing.is_empty()
    }
}
