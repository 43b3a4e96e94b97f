//! Minimal end-to-end session: build a menu dialogue, start a session on
//! stdout, and feed it a few scripted user messages.
//!
//! Run with: `cargo run --example quickstart`

use dialograph::channel::StdOutChannel;
use dialograph::engine::ConversationEngine;
use dialograph::graphs::GraphBuilder;
use dialograph::message::Message;

fn main() -> miette::Result<()> {
    dialograph::telemetry::init();

    let mut builder = GraphBuilder::new();
    let welcome = builder.add_node(["Hi! Pizza or salad?", "Welcome back! Pizza or salad?"]);
    let pizza = builder.add_node(["One pizza, coming up. Anything else?"]);
    let salad = builder.add_node(["One salad, coming up. Anything else?"]);
    let farewell = builder.add_node(["Bye!", "See you next time."]);
    builder.add_edge(welcome, pizza, ["pizza", "margherita"]);
    builder.add_edge(welcome, salad, ["salad", "greens"]);
    builder.add_edge(pizza, farewell, ["no", "bye"]);
    builder.add_edge(salad, farewell, ["no", "bye"]);

    let graph = builder.compile()?.into_shared();

    let mut session = ConversationEngine::new(graph, StdOutChannel::new());
    session.start();

    for text in ["a margherita please", "no thanks", "hello again"] {
        println!("{}: {text}", Message::USER);
        session.receive_message(text);
    }

    Ok(())
}
