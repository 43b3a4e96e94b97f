//! Shows how fuzzy keyword scoring routes misspelled input, and how the
//! stable tie-break resolves equally distant keywords.
//!
//! Run with: `RUST_LOG=dialograph=trace cargo run --example fuzzy_routing`

use dialograph::channel::StdOutChannel;
use dialograph::distance::levenshtein;
use dialograph::engine::{ConversationEngine, SessionConfig};
use dialograph::graphs::GraphBuilder;

fn main() -> miette::Result<()> {
    dialograph::telemetry::init();

    for (keyword, text) in [("hello", "helo"), ("pizza", "pitza"), ("salad", "pitza")] {
        println!(
            "levenshtein({keyword:?}, {text:?}) = {}",
            levenshtein(keyword, text)
        );
    }

    let mut builder = GraphBuilder::new();
    let hub = builder.add_node(["Do you want the first door or the second door?"]);
    let first = builder.add_node(["You took the first door."]);
    let second = builder.add_node(["You took the second door."]);
    // Identical keywords: every message ties, and the first edge added wins.
    builder.add_edge(hub, first, ["door"]);
    builder.add_edge(hub, second, ["door"]);
    let graph = builder.compile()?.into_shared();

    let mut session = ConversationEngine::with_config(
        graph,
        StdOutChannel::new(),
        SessionConfig::new(Some(42)),
    );
    session.start();
    session.receive_message("the door, please");

    Ok(())
}
