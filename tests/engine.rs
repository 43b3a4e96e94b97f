mod common;

use common::*;

use std::sync::Arc;

use dialograph::channel::MemoryChannel;
use dialograph::engine::{ConversationEngine, SessionConfig};
use dialograph::message::Message;
use rustc_hash::FxHashSet;

#[test]
fn start_emits_the_opening_message() {
    let menu = menu_graph();
    let transcript = MemoryChannel::new();
    let mut session = ConversationEngine::with_config(
        menu.graph,
        transcript.clone(),
        SessionConfig::new(Some(0)),
    );
    session.start();

    assert_eq!(session.current_node(), menu.welcome);
    let opening = transcript.last_content().expect("start delivers a reply");
    assert!(opening.contains("Pizza or salad?"));
}

#[test]
fn replies_are_delivered_with_the_assistant_role() {
    let menu = menu_graph();
    let transcript = MemoryChannel::new();
    let mut session = ConversationEngine::new(menu.graph, transcript.clone());
    session.start();

    let messages = transcript.snapshot();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].has_role(Message::ASSISTANT));
}

#[test]
fn exact_keyword_follows_the_edge() {
    let menu = menu_graph();
    let transcript = MemoryChannel::new();
    let mut session = ConversationEngine::new(menu.graph, transcript.clone());
    session.start();
    session.receive_message("salad");

    assert_eq!(session.current_node(), menu.salad);
    assert_eq!(
        transcript.last_content().as_deref(),
        Some("One salad, coming up.")
    );
}

#[test]
fn near_miss_still_matches_fuzzily() {
    // A typo one edit away still follows the edge: the match is the
    // least-bad distance, not an exact hit.
    use dialograph::graphs::GraphBuilder;

    let mut builder = GraphBuilder::new();
    let start = builder.add_node(["Say hello."]);
    let greeted = builder.add_node(["Hello to you too!"]);
    builder.add_edge(start, greeted, ["hello"]);
    let graph = builder.compile().unwrap().into_shared();

    let mut session = ConversationEngine::new(graph, MemoryChannel::new());
    session.receive_message("helo");
    assert_eq!(session.current_node(), greeted);
}

#[test]
fn typo_routes_to_the_closest_keyword() {
    let menu = menu_graph();
    let mut session = ConversationEngine::new(menu.graph, MemoryChannel::new());
    session.receive_message("pitza");
    assert_eq!(session.current_node(), menu.pizza);
}

#[test]
fn matching_is_case_insensitive() {
    let menu = menu_graph();
    let mut session = ConversationEngine::new(menu.graph, MemoryChannel::new());
    session.receive_message("SALAD");
    assert_eq!(session.current_node(), menu.salad);
}

#[test]
fn minimum_is_global_across_edges_and_keywords() {
    // "margherita" lives on the pizza edge as a second keyword; it must
    // win even against the salad edge's first keyword.
    let menu = menu_graph();
    let mut session = ConversationEngine::new(menu.graph, MemoryChannel::new());
    session.receive_message("margherita");
    assert_eq!(session.current_node(), menu.pizza);
}

#[test]
fn empty_message_is_still_routed() {
    // Total over all inputs: the empty string scores every keyword at its
    // own length, so "pizza" and "salad" tie at 5 and the stable-first
    // rule keeps the pizza edge, which was added first.
    let menu = menu_graph();
    let mut session = ConversationEngine::new(menu.graph, MemoryChannel::new());
    session.receive_message("");
    assert_eq!(session.current_node(), menu.pizza);
}

#[test]
fn leaf_state_resets_to_root_on_any_input() {
    let menu = menu_graph();
    let transcript = MemoryChannel::new();
    let mut session = ConversationEngine::new(menu.graph.clone(), transcript.clone());
    session.receive_message("pizza");
    session.receive_message("bye");
    assert_eq!(session.current_node(), menu.farewell);

    session.receive_message("this text is irrelevant");
    assert_eq!(session.current_node(), menu.welcome);

    // The reset also announces the root.
    let root_replies = menu.graph.node(menu.welcome).replies();
    let last = transcript.last_content().unwrap();
    assert!(root_replies.contains(&last));
}

#[test]
fn tie_break_is_stable_first_over_repeated_runs() {
    for _ in 0..50 {
        let tie = tie_graph();
        let mut session = ConversationEngine::new(tie.graph, MemoryChannel::new());
        session.receive_message("same");
        assert_eq!(session.current_node(), tie.first);
    }
}

#[test]
fn every_configured_reply_is_reachable() {
    let menu = menu_graph();
    let farewell_replies: Vec<String> = menu
        .graph
        .node(menu.farewell)
        .replies()
        .to_vec();

    let transcript = MemoryChannel::new();
    let mut session = ConversationEngine::with_rng(
        menu.graph,
        transcript.clone(),
        ScriptedRng::sweeping(farewell_replies.len() * 8),
    );

    // Jump straight to the farewell state repeatedly and collect draws.
    let mut seen: FxHashSet<String> = FxHashSet::default();
    for _ in 0..farewell_replies.len() * 8 {
        session.set_current_node(menu.farewell).unwrap();
        seen.insert(transcript.last_content().unwrap());
    }

    for reply in &farewell_replies {
        assert!(seen.contains(reply), "reply never drawn: {reply}");
    }
}

#[test]
fn sessions_traverse_a_shared_graph_independently() {
    let menu = menu_graph();

    let handles: Vec<_> = ["pizza", "salad"]
        .into_iter()
        .map(|order| {
            let graph = Arc::clone(&menu.graph);
            std::thread::spawn(move || {
                let mut session = ConversationEngine::new(graph, MemoryChannel::new());
                session.start();
                session.receive_message(order);
                session.current_node()
            })
        })
        .collect();

    let positions: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(positions, vec![menu.pizza, menu.salad]);
}

#[test]
fn single_reply_states_never_consult_luck() {
    // Both order states have exactly one reply, so any generator yields
    // the same transcript.
    let menu = menu_graph();
    let transcript = MemoryChannel::new();
    let mut session =
        ConversationEngine::with_rng(menu.graph, transcript.clone(), ScriptedRng::sweeping(3));
    session.receive_message("pizza");
    assert_eq!(
        transcript.last_content().as_deref(),
        Some("One pizza, coming up.")
    );
}
