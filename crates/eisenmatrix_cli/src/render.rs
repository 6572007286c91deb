use anyhow::Result;
use eisenmatrix_core::{quadrant_descriptors, Board, KvRepository, TaskFilter, Translations};

pub fn board<R: KvRepository>(board: &Board<R>, t: &Translations, filter: TaskFilter) {
    println!("{}", t.app_title);
    println!("{}", t.app_subtitle);
    for descriptor in quadrant_descriptors(t) {
        println!();
        println!(
            "## {} ({}) [{}]",
            descriptor.title, descriptor.subtitle, descriptor.id
        );
        for task in board.store().tasks_for_quadrant_filtered(descriptor.id, filter) {
            let mark = if task.completed { "x" } else { " " };
            println!("  [{mark}] {}  {}", task.id, task.text);
        }
    }
}

pub fn strings(t: &Translations) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(t)?);
    Ok(())
}
