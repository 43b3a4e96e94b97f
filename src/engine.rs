//! Conversation engine: per-session traversal over a shared dialogue graph.
//!
//! A [`ConversationEngine`] is one conversation session. It holds a shared
//! read-only handle to a [`DialogueGraph`], its current position as a
//! [`NodeId`], a per-session random generator for reply selection, and the
//! [`OutputChannel`] replies are delivered through. Sessions are
//! independent values: any number of them can traverse the same graph on
//! separate threads without coordination, because traversal never mutates
//! graph data.
//!
//! # Message handling
//!
//! [`receive_message`](ConversationEngine::receive_message) scores every
//! keyword of every outgoing edge of the current state against the user
//! text with [`levenshtein`], follows the edge with the globally minimal
//! distance (stable-first on ties), and announces the destination by
//! delivering one of its replies chosen uniformly at random. A state with
//! no outgoing edges sends the session back to the graph root regardless
//! of input. The operation is total: no text, including the empty string,
//! is ever rejected.
//!
//! # Examples
//!
//! ```
//! use dialograph::channel::MemoryChannel;
//! use dialograph::engine::ConversationEngine;
//! use dialograph::graphs::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let welcome = builder.add_node(["What can I get you?"]);
//! let pizza = builder.add_node(["One pizza, coming right up."]);
//! builder.add_edge(welcome, pizza, ["pizza"]);
//! let graph = builder.compile().unwrap().into_shared();
//!
//! let transcript = MemoryChannel::new();
//! let mut session = ConversationEngine::new(graph, transcript.clone());
//! session.start();
//! session.receive_message("pitza please");
//!
//! assert_eq!(
//!     transcript.last_content().as_deref(),
//!     Some("One pizza, coming right up.")
//! );
//! ```

use std::sync::Arc;

use miette::Diagnostic;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use thiserror::Error;

use crate::channel::OutputChannel;
use crate::distance::levenshtein;
use crate::graphs::DialogueGraph;
use crate::message::Message;
use crate::types::{NodeId, SessionId};

/// Per-session configuration.
///
/// The only tunable is the reply-selection seed: `None` seeds the session
/// generator from OS entropy, `Some(seed)` pins the draw sequence for
/// deterministic replay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionConfig {
    /// Optional seed for the session's reply-selection generator.
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    #[must_use]
    pub fn new(rng_seed: Option<u64>) -> Self {
        Self { rng_seed }
    }
}

/// Errors reported when binding a session position.
///
/// These are collaborator programming errors surfaced at bind time;
/// traversal itself ([`receive_message`](ConversationEngine::receive_message))
/// has no error conditions.
#[derive(Debug, Error, Diagnostic)]
pub enum EngineError {
    /// The handle does not refer to a node of the bound graph.
    #[error("{node} does not belong to the bound dialogue graph")]
    #[diagnostic(
        code(dialograph::engine::foreign_node),
        help("Node handles are only valid against the graph that issued them.")
    )]
    ForeignNode { node: NodeId },

    /// The target state has no replies to announce.
    #[error("{node} has no replies to announce")]
    #[diagnostic(
        code(dialograph::engine::silent_node),
        help("Only root-reachable nodes are validated at compile time; jumping into an \
              unreachable pocket requires its states to carry replies too.")
    )]
    SilentNode { node: NodeId },
}

/// One conversation session over a shared dialogue graph.
///
/// The engine tracks *position*, not data: its current node is a handle
/// into the graph arena, so the session itself is a small value that is
/// cheap to create and free to outlive nothing. Dropping a session drops
/// only its channel and generator; the graph lives for as long as any
/// handle to it does.
pub struct ConversationEngine {
    graph: Arc<DialogueGraph>,
    current: NodeId,
    session_id: SessionId,
    rng: Box<dyn RngCore + Send>,
    channel: Box<dyn OutputChannel>,
}

impl ConversationEngine {
    /// Creates a session bound to `graph`, positioned at the root, with an
    /// entropy-seeded reply generator.
    ///
    /// No message is delivered yet; call [`start`](Self::start) to announce
    /// the opening state.
    #[must_use]
    pub fn new(graph: Arc<DialogueGraph>, channel: impl OutputChannel + 'static) -> Self {
        Self::with_rng(graph, channel, StdRng::from_os_rng())
    }

    /// Creates a session configured by [`SessionConfig`].
    ///
    /// A pinned seed makes the reply draw sequence reproducible, which is
    /// the supported way to replay a conversation in tests.
    #[must_use]
    pub fn with_config(
        graph: Arc<DialogueGraph>,
        channel: impl OutputChannel + 'static,
        config: SessionConfig,
    ) -> Self {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(graph, channel, rng)
    }

    /// Creates a session with a fully injected random generator.
    ///
    /// Intended for tests that need to drive reply selection with a stub
    /// generator (for instance to prove every configured reply is
    /// reachable).
    #[must_use]
    pub fn with_rng(
        graph: Arc<DialogueGraph>,
        channel: impl OutputChannel + 'static,
        rng: impl RngCore + Send + 'static,
    ) -> Self {
        let current = graph.root();
        Self {
            graph,
            current,
            session_id: SessionId::new(),
            rng: Box::new(rng),
            channel: Box::new(channel),
        }
    }

    /// This session's identity, as used in tracing output.
    #[must_use]
    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// The session's current position in the graph.
    #[must_use]
    pub fn current_node(&self) -> NodeId {
        self.current
    }

    /// The shared graph this session traverses.
    #[must_use]
    pub fn graph(&self) -> &Arc<DialogueGraph> {
        &self.graph
    }

    /// Announces the opening state of the conversation.
    ///
    /// Positions the session at the graph root and delivers one of the
    /// root's replies, producing the very first message of the session
    /// before any user input.
    pub fn start(&mut self) {
        let root = self.graph.root();
        self.jump(root);
    }

    /// Receives one user message, advances the session, and delivers a
    /// reply.
    ///
    /// Every keyword of every outgoing edge of the current state is scored
    /// with [`levenshtein`] against `text`; the edge holding the globally
    /// minimal distance wins. Ties resolve to the first pair in
    /// enumeration order (edges in stored order, keywords in stored
    /// order). A state without outgoing edges routes to the root
    /// unconditionally.
    ///
    /// Total over all inputs: the conversation always stays responsive,
    /// so this never fails and never rejects a message.
    pub fn receive_message(&mut self, text: &str) {
        let _span = tracing::debug_span!(
            "turn",
            session = %self.session_id,
            from = %self.current,
        )
        .entered();

        let mut best: Option<(NodeId, usize)> = None;
        for &edge_id in self.graph.outgoing(self.current) {
            let edge = self.graph.edge(edge_id);
            for keyword in edge.keywords() {
                let dist = levenshtein(keyword, text);
                // Strict < keeps the first enumerated pair on ties.
                if best.is_none_or(|(_, d)| dist < d) {
                    best = Some((edge.target(), dist));
                    tracing::trace!(edge = %edge_id, keyword = %keyword, dist, "new best match");
                }
            }
        }

        let destination = match best {
            Some((target, dist)) => {
                tracing::debug!(to = %target, dist, "following best-scoring edge");
                target
            }
            None => {
                let root = self.graph.root();
                tracing::debug!(to = %root, "no outgoing edges, resetting to root");
                root
            }
        };

        self.jump(destination);
    }

    /// Jumps the session to `node` and announces it.
    ///
    /// This is the same entry point traversal uses internally, exposed so
    /// a session layer can reposition a conversation. The handle is
    /// validated here, at bind time: an ID from another graph or a state
    /// with nothing to say is a configuration error and is never surfaced
    /// mid-conversation.
    pub fn set_current_node(&mut self, node: NodeId) -> Result<(), EngineError> {
        if !self.graph.contains_node(node) {
            return Err(EngineError::ForeignNode { node });
        }
        if self.graph.node(node).replies().is_empty() {
            return Err(EngineError::SilentNode { node });
        }
        self.jump(node);
        Ok(())
    }

    /// Moves to `node` and delivers one of its replies, drawn uniformly.
    fn jump(&mut self, node: NodeId) {
        self.current = node;

        let replies = self.graph.node(node).replies();
        // Compile-time validation covers the root-reachable set; a pocket
        // reached from an unvalidated jump target may still be silent.
        if replies.is_empty() {
            tracing::error!(node = %node, "arrived at a state with no replies, skipping announcement");
            return;
        }

        let pick = self.rng.random_range(0..replies.len());
        let reply = Message::assistant(&replies[pick]);

        // Fire-and-forget hand-off; presentation failures are not ours to retry.
        if let Err(err) = self.channel.deliver(&reply) {
            tracing::warn!(session = %self.session_id, %err, "reply delivery failed");
        }
    }
}
