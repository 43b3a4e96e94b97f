//! GraphBuilder implementation for constructing dialogue graphs.
//!
//! The builder records conversation states and keyword transitions as
//! drafts and hands out the stable handles the rest of the system uses.
//! Structural validation happens once, in
//! [`compile`](GraphBuilder::compile); until then any shape can be staged.

use crate::types::{EdgeId, NodeId};

/// Staged conversation state awaiting compilation.
#[derive(Clone, Debug)]
pub(crate) struct NodeDraft {
    pub(crate) replies: Vec<String>,
}

/// Staged transition awaiting compilation.
#[derive(Clone, Debug)]
pub(crate) struct EdgeDraft {
    pub(crate) source: NodeId,
    pub(crate) target: NodeId,
    pub(crate) keywords: Vec<String>,
}

/// Builder for constructing dialogue graphs.
///
/// `GraphBuilder` is the construction surface a loader (or test) uses to
/// assemble a [`DialogueGraph`](crate::graphs::DialogueGraph). Handles are
/// assigned sequentially in insertion order and never reused; the order of
/// `add_edge` calls per source node is the order the engine enumerates
/// transitions in, which pins down the deterministic tie-break.
///
/// The root defaults to the first node added and can be overridden with
/// [`set_root`](Self::set_root).
///
/// # Examples
///
/// ```
/// use dialograph::graphs::GraphBuilder;
///
/// let mut builder = GraphBuilder::new();
/// let welcome = builder.add_node(["Hi! What would you like to order?"]);
/// let pizza = builder.add_node(["One pizza coming up.", "Pizza it is!"]);
/// builder.add_edge(welcome, pizza, ["pizza", "margherita"]);
///
/// let graph = builder.compile().unwrap();
/// assert_eq!(graph.root(), welcome);
/// assert_eq!(graph.outgoing(welcome).len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    pub(crate) nodes: Vec<NodeDraft>,
    pub(crate) edges: Vec<EdgeDraft>,
    pub(crate) root: Option<NodeId>,
}

impl GraphBuilder {
    /// Creates a new, empty graph builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a conversation state with the given candidate replies.
    ///
    /// Returns the stable handle the state will keep in the compiled
    /// graph. Replies are kept in the order given; the engine draws one
    /// uniformly at random each time it announces the state.
    ///
    /// A reachable state must end up with at least one reply or
    /// [`compile`](Self::compile) rejects the graph.
    pub fn add_node<I, S>(&mut self, replies: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeDraft {
            replies: replies.into_iter().map(Into::into).collect(),
        });
        id
    }

    /// Adds a keyword-labeled transition between two states.
    ///
    /// Returns the stable handle of the staged edge. Endpoints are not
    /// checked here; a dangling endpoint or empty keyword list is reported
    /// by [`compile`](Self::compile), so loader errors surface before any
    /// session exists.
    pub fn add_edge<I, S>(&mut self, from: NodeId, to: NodeId, keywords: I) -> EdgeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeDraft {
            source: from,
            target: to,
            keywords: keywords.into_iter().map(Into::into).collect(),
        });
        id
    }

    /// Designates the start/fallback state.
    ///
    /// Without an explicit root the first node added serves as one.
    pub fn set_root(&mut self, id: NodeId) -> &mut Self {
        self.root = Some(id);
        self
    }

    /// Number of states staged so far.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of transitions staged so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
