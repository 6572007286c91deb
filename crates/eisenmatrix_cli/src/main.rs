//! Terminal front end for the EisenMatrix board.
//!
//! # Responsibility
//! - Map subcommands onto board intents.
//! - Render the four quadrants with the session locale's labels.

mod cli;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use eisenmatrix_core::{
    init_logging, session_locale, Board, BoardConfig, BoardDispatcher, DragOutcome,
    MutationOutcome, SqliteKvRepository, TaskFilter, TaskId, Translations,
};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = BoardConfig::from_env(cli.global.overrides());

    if let Some(log_dir) = config.log_dir.to_str() {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("warning: logging disabled: {err}");
        }
    }

    let t = session_locale(config.locale.as_deref()).translations();
    let repo = SqliteKvRepository::open(&config.db_path)
        .with_context(|| format!("failed to open board at {}", config.db_path.display()))?;
    let mut board = Board::load(repo);

    match cli.command {
        None => render::board(&board, t, TaskFilter::default()),
        Some(Commands::List { hide_completed }) => {
            render::board(&board, t, TaskFilter { hide_completed })
        }
        Some(Commands::Add { quadrant, text }) => {
            if let Some(id) = board.add(quadrant, &text.join(" ")) {
                println!("{}: {id}", t.task_added);
            }
        }
        Some(Commands::Done { id }) => {
            board.toggle_complete(&TaskId::from(id));
        }
        Some(Commands::Edit { id, text }) => {
            let outcome = board.edit_text(&TaskId::from(id), &text.join(" "));
            report(outcome, t.task_updated);
        }
        Some(Commands::Delete { id }) => {
            report(board.delete(&TaskId::from(id)), t.task_deleted);
        }
        Some(Commands::Move { id, quadrant }) => {
            report(board.move_to_quadrant(&TaskId::from(id), quadrant), t.task_moved);
        }
        Some(Commands::Drag { id, over }) => {
            let id = TaskId::from(id);
            board.drag_start(&id);
            let outcome = board.drag_end(&id, over.as_deref());
            report_drag(&outcome, t);
        }
        Some(Commands::Strings) => render::strings(t)?,
    }

    Ok(())
}

fn report(outcome: MutationOutcome, title: &str) {
    if outcome.is_applied() {
        println!("{title}");
    }
}

fn report_drag(outcome: &DragOutcome, t: &Translations) {
    if let DragOutcome::Reassigned { to, .. } = outcome {
        println!("{} {} {}", t.task_moved, t.move_to, t.quadrants.get(*to).title);
    }
}
