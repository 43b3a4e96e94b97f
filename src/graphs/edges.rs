//! Transition data for dialogue graphs.
//!
//! A [`DialogueEdge`] is a directed, keyword-labeled transition between
//! two conversation states. Edges own no node data; they refer to their
//! endpoints by [`NodeId`], and the graph owns both arenas.

use serde::{Deserialize, Serialize};

use crate::types::{EdgeId, NodeId};

/// A directed transition between two conversation states, labeled with
/// the trigger keywords the engine scores user text against.
///
/// Keywords are matched case-insensitively (the distance metric folds
/// case) and kept in configuration order, which the engine's stable
/// tie-break is defined over. Every compiled edge carries at least one
/// keyword and exactly one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueEdge {
    pub(crate) id: EdgeId,
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) keywords: Vec<String>,
}

impl DialogueEdge {
    /// The handle this edge is stored under in its graph.
    #[must_use]
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// The state this edge departs from.
    #[must_use]
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The state this edge leads to.
    #[must_use]
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Trigger keywords in configuration order.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}
