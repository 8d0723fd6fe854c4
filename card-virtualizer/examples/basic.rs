// Example: lay out a grid of client cards, expand one, and query the visible window.
use std::collections::HashMap;

use card_virtualizer::{GridOptions, GridVirtualizer, HasId, HasTasks};

struct Client {
    id: String,
    tasks: Vec<String>,
}

impl HasId for Client {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

impl HasTasks for Client {
    fn task_count(&self) -> usize {
        self.tasks.len()
    }

    fn task_descriptions(&self) -> impl Iterator<Item = &str> + '_ {
        self.tasks.iter().map(String::as_str)
    }
}

fn main() {
    let clients: Vec<Client> = (0..10_000)
        .map(|i| Client {
            id: format!("client-{i}"),
            tasks: (0..i % 9).map(|t| format!("follow-up #{t}")).collect(),
        })
        .collect();

    let mut expanded = HashMap::new();
    expanded.insert("client-4".to_string(), true);

    let mut v = match GridVirtualizer::new(GridOptions::new(280, 800, 3)) {
        Ok(v) => v,
        Err(err) => {
            eprintln!("invalid options: {err}");
            return;
        }
    };
    v.relayout(&clients, &expanded);
    println!("total_height={}", v.total_height());
    println!("row 1: {:?}", v.row_span(1));

    v.handle_scroll(120_000);
    let visible = v.visible_items(&clients);
    println!("rows={:?} cards={}", v.visible_row_range(), visible.len());
    if let Some(first) = visible.first() {
        println!("first={} at {:?}", first.item.id, first.virtual_item);
    }

    let off = v.scroll_to_item(9_999);
    println!("after scroll_to_item: offset={off}");
}
