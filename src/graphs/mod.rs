//! Dialogue graph definition and compilation.
//!
//! This module provides the construction and ownership model for
//! conversation graphs. The main entry point is [`GraphBuilder`], which
//! stages states and keyword transitions and compiles them into an
//! immutable, arena-backed [`DialogueGraph`].
//!
//! # Core Concepts
//!
//! - **Nodes**: Conversation states carrying scripted replies
//! - **Edges**: Keyword-labeled transitions between states
//! - **Arena ownership**: The graph owns all node/edge data; everything
//!   else holds [`NodeId`](crate::types::NodeId)/[`EdgeId`](crate::types::EdgeId)
//!   handles, never references into the arena
//! - **Compilation**: One-shot validation producing a read-only graph that
//!   sessions share behind `Arc`
//!
//! # Quick Start
//!
//! ```
//! use dialograph::graphs::GraphBuilder;
//!
//! let mut builder = GraphBuilder::new();
//! let welcome = builder.add_node(["Hi! Pizza or salad?"]);
//! let pizza = builder.add_node(["Great, one pizza."]);
//! let salad = builder.add_node(["Great, one salad."]);
//! builder.add_edge(welcome, pizza, ["pizza"]);
//! builder.add_edge(welcome, salad, ["salad"]);
//!
//! let graph = builder.compile().unwrap().into_shared();
//! assert_eq!(graph.outgoing(welcome).len(), 2);
//! ```
//!
//! # Malformed definitions
//!
//! Structural problems (dangling endpoints, keywordless edges, reachable
//! states without replies) are the loader's errors and are reported by
//! [`GraphBuilder::compile`] as [`GraphCompileError`] diagnostics before a
//! session can be bound. Traversal never validates the graph again.

// Internal module declarations
mod builder;
mod compilation;
mod edges;
mod graph;

// Public re-exports
pub use builder::GraphBuilder;
pub use compilation::GraphCompileError;
pub use edges::DialogueEdge;
pub use graph::DialogueGraph;
