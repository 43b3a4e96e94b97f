//! The compiled, read-only dialogue graph.

use serde::Serialize;
use std::sync::Arc;

use super::edges::DialogueEdge;
use crate::node::DialogueNode;
use crate::types::{EdgeId, NodeId};

/// An immutable conversation graph: the single owner of all node and edge
/// data.
///
/// The graph is produced by
/// [`GraphBuilder::compile`](crate::graphs::GraphBuilder::compile) and never
/// mutated afterwards. Sessions share it read-only behind an [`Arc`]; a
/// session's notion of "where am I" is just a [`NodeId`] into this arena,
/// so any number of sessions can traverse the same graph concurrently
/// without coordination.
///
/// There is deliberately no way to detach a node or edge from its graph:
/// handles only make sense against the arena that issued them, and cloning
/// a graph clones it wholesale.
///
/// The graph serializes for inspection and snapshots but does not
/// deserialize: the only way to materialize one is
/// [`GraphBuilder::compile`](crate::graphs::GraphBuilder::compile), so
/// structural consistency can never be bypassed by feeding in raw data.
///
/// # Examples
///
/// ```
/// use dialograph::graphs::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// builder.add_node(["Welcome! Ask me about the menu."]);
/// let graph = builder.compile().unwrap();
///
/// let root = graph.root();
/// assert_eq!(graph.node(root).replies().len(), 1);
/// assert!(graph.outgoing(root).is_empty());
/// ```
#[derive(Clone, Debug, Serialize)]
pub struct DialogueGraph {
    pub(crate) nodes: Vec<DialogueNode>,
    pub(crate) edges: Vec<DialogueEdge>,
    pub(crate) root: NodeId,
}

impl DialogueGraph {
    /// The designated start/fallback state.
    ///
    /// Sessions begin here, and the engine returns here whenever the
    /// current state has no outgoing transitions.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Resolves a node handle against this graph's arena.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph. Sessions validate
    /// handles at bind time (see
    /// [`ConversationEngine::set_current_node`](crate::engine::ConversationEngine::set_current_node)),
    /// so traversal never resolves a foreign handle.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &DialogueNode {
        &self.nodes[id.index()]
    }

    /// Resolves an edge handle against this graph's arena.
    ///
    /// # Panics
    ///
    /// Panics if `id` did not come from this graph.
    #[must_use]
    pub fn edge(&self, id: EdgeId) -> &DialogueEdge {
        &self.edges[id.index()]
    }

    /// Outgoing transitions of a node in configuration order. May be empty.
    #[must_use]
    pub fn outgoing(&self, id: NodeId) -> &[EdgeId] {
        &self.nodes[id.index()].outgoing
    }

    /// Returns true if `id` refers to a node of this graph.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Number of conversation states.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of transitions.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Iterate over all nodes in arena order.
    pub fn nodes(&self) -> impl Iterator<Item = &DialogueNode> {
        self.nodes.iter()
    }

    /// Iterate over all edges in arena order.
    pub fn edges(&self) -> impl Iterator<Item = &DialogueEdge> {
        self.edges.iter()
    }

    /// Wraps the graph for read-only sharing across sessions.
    #[must_use]
    pub fn into_shared(self) -> Arc<DialogueGraph> {
        Arc::new(self)
    }
}
