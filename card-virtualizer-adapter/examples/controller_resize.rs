// Example: drive a grid controller through a window resize, an expand toggle and a smooth
// scroll back to the top.
use card_virtualizer::{GridOptions, HasId, HasTasks};
use card_virtualizer_adapter::{Easing, GridController};

struct Client {
    id: u32,
    tasks: Vec<String>,
}

impl HasId for Client {
    type Id = u32;

    fn id(&self) -> &u32 {
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

fn main() -> Result<(), card_virtualizer::GridError> {
    let clients: Vec<Client> = (0..500)
        .map(|id| Client {
            id,
            tasks: vec!["review contract".into(); (id % 5) as usize],
        })
        .collect();

    let mut c = GridController::new(GridOptions::new(280, 600, 3))?;
    c.on_viewport_height(1080)?;
    if c.on_container_width(900)? {
        println!("columns -> {}", c.virtualizer().options().items_per_row);
    }
    c.toggle_expanded(3);
    c.relayout(&clients);
    println!("total_height={}", c.virtualizer().total_height());

    c.on_scroll(5_000);
    println!("show_scroll_to_top={}", c.show_scroll_to_top());

    c.start_smooth_scroll_to_top(0, 300, Easing::EaseOutCubic);
    let mut now_ms = 0;
    while let Some(off) = c.tick(now_ms) {
        println!("t={now_ms}ms offset={off}");
        now_ms += 50;
    }
    Ok(())
}
