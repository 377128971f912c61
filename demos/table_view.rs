//! A dashboard view and a detail view sharing one table store.
//!
//! Run with `RUST_LOG=tablestore=trace cargo run --example table_view` to see
//! the store's own events.

use tablestore::{Item, TableState, TableStore};
use tracing_subscriber::EnvFilter;

const HEADERS: &str = r#"[
    {"title": "Name", "key": "name"},
    {"text": "Age", "value": "age", "align": "end"}
]"#;

const ITEMS: &str = r#"[
    {"name": "x", "age": 10},
    {"name": "y", "age": 20}
]"#;

fn render(state: &TableState) {
    let titles: Vec<&str> = state.headers().iter().map(|h| h.title().unwrap_or_default()).collect();
    println!("| {} |", titles.join(" | "));
    for item in state.items() {
        let cells: Vec<String> = state
            .headers()
            .iter()
            .map(|h| {
                h.key()
                    .and_then(|key| item.get(key))
                    .map(ToString::to_string)
                    .unwrap_or_default()
            })
            .collect();
        println!("| {} |", cells.join(" | "));
    }
    println!();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let store = TableStore::new();

    // Dashboard: re-render on every change.
    let dashboard = store.clone();
    let _rendering = dashboard.subscribe_scoped(render);

    println!("Loading table...");
    store.set_headers_json(HEADERS)?;
    store.set_items_json(ITEMS)?;

    // Detail page for "y": edit the row.
    println!("Editing y...");
    let detail = store.clone();
    detail.update_item(Item::named("y").with("age", 99));

    println!("Editing a row that does not exist...");
    detail.update_item(Item::named("nobody").with("age", 1));

    println!("Final items: {:#?}", store.items());
    Ok(())
}
