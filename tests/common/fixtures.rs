//! Shared graph fixtures for integration tests.

use std::sync::Arc;

use dialograph::graphs::{DialogueGraph, GraphBuilder};
use dialograph::types::NodeId;

/// Handles into [`menu_graph`], named for readability in assertions.
pub struct MenuGraph {
    pub graph: Arc<DialogueGraph>,
    pub welcome: NodeId,
    pub pizza: NodeId,
    pub salad: NodeId,
    pub farewell: NodeId,
}

/// A small ordering dialogue:
///
/// ```text
/// welcome --{pizza,margherita}--> pizza ---{bye,goodbye}--> farewell
///    \---{salad,greens}--------> salad ---{bye,goodbye}--> farewell
/// ```
///
/// `farewell` is an absorbing state; any message there resets to
/// `welcome`.
pub fn menu_graph() -> MenuGraph {
    let mut builder = GraphBuilder::new();
    let welcome = builder.add_node(["Hi! Pizza or salad?", "Welcome back! Pizza or salad?"]);
    let pizza = builder.add_node(["One pizza, coming up."]);
    let salad = builder.add_node(["One salad, coming up."]);
    let farewell = builder.add_node(["Bye!", "See you next time.", "Take care."]);

    builder.add_edge(welcome, pizza, ["pizza", "margherita"]);
    builder.add_edge(welcome, salad, ["salad", "greens"]);
    builder.add_edge(pizza, farewell, ["bye", "goodbye"]);
    builder.add_edge(salad, farewell, ["bye", "goodbye"]);

    MenuGraph {
        graph: builder.compile().expect("fixture graph compiles").into_shared(),
        welcome,
        pizza,
        salad,
        farewell,
    }
}

/// A hub with two edges whose keywords are identical, so every incoming
/// message scores both edges equally. Used to pin the stable-first
/// tie-break.
pub struct TieGraph {
    pub graph: Arc<DialogueGraph>,
    pub hub: NodeId,
    pub first: NodeId,
    pub second: NodeId,
}

pub fn tie_graph() -> TieGraph {
    let mut builder = GraphBuilder::new();
    let hub = builder.add_node(["Choose."]);
    let first = builder.add_node(["First wins."]);
    let second = builder.add_node(["Second wins."]);
    builder.add_edge(hub, first, ["same"]);
    builder.add_edge(hub, second, ["same"]);

    TieGraph {
        graph: builder.compile().expect("fixture graph compiles").into_shared(),
        hub,
        first,
        second,
    }
}
