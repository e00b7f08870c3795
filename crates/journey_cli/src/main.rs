//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `journey_core` linkage.
//! - Print the seeded notes, optionally filtered by the first argument.

use journey_core::{init_logging_from_config, CoreConfig, NotesSession};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("journey_core ping={}", journey_core::ping());
    println!("journey_core version={}", journey_core::core_version());

    let config = match CoreConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("config error: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging error: {err}");
        return ExitCode::FAILURE;
    }

    let mut session = if config.seed_sample_notes {
        match NotesSession::with_sample_notes() {
            Ok(session) => session,
            Err(err) => {
                eprintln!("seed error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        NotesSession::empty()
    };

    if let Some(query) = std::env::args().nth(1) {
        session.set_search_query(query);
    }

    let visible = session.visible_notes();
    println!(
        "notes total={} visible={} query={:?}",
        session.note_count(),
        visible.len(),
        session.search_query()
    );
    for note in visible {
        let first_line = note.content.lines().next().unwrap_or_default();
        println!("{} {} {}", note.formatted_date(), note.id, first_line);
    }

    ExitCode::SUCCESS
}
