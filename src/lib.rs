//! # Dialograph: Graph-driven Dialogue Traversal Engine
//!
//! Dialograph routes a conversation through a directed graph of scripted
//! states. Each incoming user message is scored against the trigger
//! keywords of the current state's outgoing transitions with a
//! case-insensitive edit distance; the best-scoring transition wins, the
//! session moves there, and one of the destination's replies is delivered
//! through an output channel.
//!
//! ## Core Concepts
//!
//! - **Nodes**: Conversation states holding one or more candidate replies
//! - **Edges**: Directed transitions labeled with trigger keywords
//! - **Arena ownership**: One [`DialogueGraph`](graphs::DialogueGraph)
//!   owns all node/edge data; sessions hold ID handles, never pointers
//! - **Sessions**: A [`ConversationEngine`](engine::ConversationEngine) is
//!   a small per-session value over a shared read-only graph
//!
//! ## Quick Start
//!
//! ```
//! use dialograph::channel::MemoryChannel;
//! use dialograph::engine::ConversationEngine;
//! use dialograph::graphs::GraphBuilder;
//!
//! // Build a tiny menu dialogue.
//! let mut builder = GraphBuilder::new();
//! let welcome = builder.add_node(["Hi! Pizza or salad?"]);
//! let pizza = builder.add_node(["One pizza, coming up."]);
//! let salad = builder.add_node(["One salad, coming up."]);
//! builder.add_edge(welcome, pizza, ["pizza"]);
//! builder.add_edge(welcome, salad, ["salad"]);
//! let graph = builder.compile().unwrap().into_shared();
//!
//! // Run one session against it.
//! let transcript = MemoryChannel::new();
//! let mut session = ConversationEngine::new(graph, transcript.clone());
//! session.start();
//! session.receive_message("a pizza please");
//!
//! assert_eq!(
//!     transcript.last_content().as_deref(),
//!     Some("One pizza, coming up.")
//! );
//! ```
//!
//! ## Determinism
//!
//! Matching is fully deterministic: ties between equally distant keywords
//! resolve to the first pair in configuration order. The only random
//! element is which reply variant a state announces, and that draw comes
//! from a per-session generator that can be seeded (or stubbed outright)
//! for reproducible runs; see
//! [`SessionConfig`](engine::SessionConfig) and
//! [`ConversationEngine::with_rng`](engine::ConversationEngine::with_rng).
//!
//! ## Module Guide
//!
//! - [`distance`] - Case-folded Levenshtein metric used for routing
//! - [`graphs`] - Graph construction, validation, and arena ownership
//! - [`engine`] - Per-session traversal and reply selection
//! - [`channel`] - Output channel contract and stock implementations
//! - [`message`] - Role-tagged message type delivered to channels
//! - [`types`] - Node/edge/session handle types
//! - [`telemetry`] - Opt-in tracing subscriber bootstrap

pub mod channel;
pub mod distance;
pub mod engine;
pub mod graphs;
pub mod message;
pub mod node;
pub mod telemetry;
pub mod types;
