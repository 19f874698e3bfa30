//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `barky_core` wiring against the configured database.
//! - Print the bookmark list once, ordered by `date_added` or `title`.
//!
//! Usage: `barky_cli [date_added|title]`

use barky_core::{
    init_logging_from_config, BookmarkOrder, BookmarkService, Command, CoreConfig,
    SqliteBookmarkRepository,
};
use log::info;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("barky: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), String> {
    let order = match std::env::args().nth(1) {
        Some(raw) => BookmarkOrder::parse(&raw)
            .ok_or_else(|| format!("unknown order `{raw}`; expected date_added|title"))?,
        None => BookmarkOrder::default(),
    };

    let config = CoreConfig::from_env().map_err(|err| err.to_string())?;
    init_logging_from_config(&config)?;

    println!("barky_core ping={}", barky_core::ping());
    println!("barky_core version={}", barky_core::core_version());

    let repo = SqliteBookmarkRepository::open(&config.db_path)
        .map_err(|err| format!("failed to open `{}`: {err}", config.db_path.display()))?;
    let mut service = BookmarkService::new(repo);
    info!(
        "event=cli_list module=cli status=start order={}",
        order.as_str()
    );

    let output = Command::List(order)
        .execute(&mut service)
        .map_err(|err| err.to_string())?;
    print!("{output}");
    Ok(())
}
