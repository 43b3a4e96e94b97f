//! Graph compilation logic and validation.
//!
//! Compilation turns staged builder drafts into an immutable
//! [`DialogueGraph`] arena and is the single place structural invariants
//! are enforced. Anything a malformed dialogue definition could get wrong
//! is reported here, before a session is ever bound; traversal itself has
//! no runtime error conditions.

use miette::Diagnostic;
use rustc_hash::FxHashSet;
use thiserror::Error;

use super::edges::DialogueEdge;
use super::graph::DialogueGraph;
use crate::node::DialogueNode;
use crate::types::{EdgeId, NodeId};

/// Structural errors reported when compiling a staged dialogue graph.
///
/// These are collaborator errors: a loader fed the builder a malformed
/// definition. They are surfaced at build time so the engine never has to
/// validate graph well-formedness mid-conversation.
#[derive(Debug, Error, Diagnostic)]
pub enum GraphCompileError {
    /// The builder contained no conversation states at all.
    #[error("dialogue graph has no nodes")]
    #[diagnostic(
        code(dialograph::graphs::empty),
        help("Add at least one node before compiling; the first node becomes the root.")
    )]
    EmptyGraph,

    /// The designated root handle does not belong to this builder.
    #[error("designated root {root} is not a node of this graph")]
    #[diagnostic(
        code(dialograph::graphs::unknown_root),
        help("set_root must be called with a handle returned by add_node on the same builder.")
    )]
    UnknownRoot { root: NodeId },

    /// An edge endpoint refers to a node that was never added.
    #[error("{edge} refers to unknown endpoint {node}")]
    #[diagnostic(
        code(dialograph::graphs::dangling_endpoint),
        help("Edge endpoints must be handles returned by add_node on the same builder.")
    )]
    DanglingEndpoint { edge: EdgeId, node: NodeId },

    /// An edge was staged without any trigger keywords.
    ///
    /// The endpoint field is named `from` rather than `source`: thiserror
    /// reserves `source` for error chaining.
    #[error("{edge} ({from} -> {target}) has no trigger keywords")]
    #[diagnostic(
        code(dialograph::graphs::no_keywords),
        help("Every transition needs at least one keyword for the engine to score.")
    )]
    NoKeywords {
        edge: EdgeId,
        from: NodeId,
        target: NodeId,
    },

    /// A state reachable from the root has no replies to announce.
    #[error("{node} is reachable from the root but has no replies")]
    #[diagnostic(
        code(dialograph::graphs::missing_replies),
        help("Every reachable node needs at least one reply; the engine announces one on arrival.")
    )]
    MissingReplies { node: NodeId },
}

/// Compilation logic for GraphBuilder.
impl super::builder::GraphBuilder {
    /// Compiles the staged drafts into an immutable [`DialogueGraph`].
    ///
    /// Validation checks, in order:
    ///
    /// - the graph has at least one node;
    /// - the designated root (explicit, or the first node) exists;
    /// - every edge endpoint refers to a staged node;
    /// - every edge carries at least one keyword;
    /// - every node reachable from the root has at least one reply.
    ///
    /// # Errors
    ///
    /// Returns the first [`GraphCompileError`] encountered. Errors carry
    /// miette diagnostics with codes and remediation help.
    ///
    /// # Examples
    ///
    /// ```
    /// use dialograph::graphs::GraphBuilder;
    ///
    /// let mut builder = GraphBuilder::new();
    /// let hello = builder.add_node(["Hello there!"]);
    /// let bye = builder.add_node(["See you soon."]);
    /// builder.add_edge(hello, bye, ["bye", "goodbye"]);
    ///
    /// let graph = builder.compile().unwrap();
    /// assert_eq!(graph.node_count(), 2);
    /// ```
    pub fn compile(self) -> Result<DialogueGraph, GraphCompileError> {
        if self.nodes.is_empty() {
            return Err(GraphCompileError::EmptyGraph);
        }

        let root = self.root.unwrap_or(NodeId(0));
        if root.index() >= self.nodes.len() {
            return Err(GraphCompileError::UnknownRoot { root });
        }

        let mut nodes: Vec<DialogueNode> = self
            .nodes
            .into_iter()
            .enumerate()
            .map(|(i, draft)| DialogueNode {
                id: NodeId(i),
                replies: draft.replies,
                outgoing: Vec::new(),
            })
            .collect();

        let mut edges: Vec<DialogueEdge> = Vec::with_capacity(self.edges.len());
        for (i, draft) in self.edges.into_iter().enumerate() {
            let id = EdgeId(i);
            for endpoint in [draft.source, draft.target] {
                if endpoint.index() >= nodes.len() {
                    return Err(GraphCompileError::DanglingEndpoint {
                        edge: id,
                        node: endpoint,
                    });
                }
            }
            if draft.keywords.is_empty() {
                return Err(GraphCompileError::NoKeywords {
                    edge: id,
                    from: draft.source,
                    target: draft.target,
                });
            }
            // Adjacency keeps add_edge order per source node.
            nodes[draft.source.index()].outgoing.push(id);
            edges.push(DialogueEdge {
                id,
                source: draft.source,
                target: draft.target,
                keywords: draft.keywords,
            });
        }

        let graph = DialogueGraph { nodes, edges, root };

        for node in reachable_from(&graph, root) {
            if graph.node(node).replies.is_empty() {
                return Err(GraphCompileError::MissingReplies { node });
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            root = %graph.root(),
            "compiled dialogue graph"
        );

        Ok(graph)
    }
}

/// Depth-first reachability over the compiled arena, in deterministic
/// (stack) order.
fn reachable_from(graph: &DialogueGraph, start: NodeId) -> Vec<NodeId> {
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut stack = vec![start];
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        if !visited.insert(node) {
            continue;
        }
        order.push(node);
        for &edge in graph.outgoing(node) {
            stack.push(graph.edge(edge).target);
        }
    }

    order
}
