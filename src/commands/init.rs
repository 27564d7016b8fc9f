//! `ontosearch init` command - create an empty corpus database
//!
//! Idempotent: an existing corpus keeps its data and gains any missing tables.

use serde_json::json;

use crate::commands::dispatch::CommandContext;
use crate::commands::format::{print_json_status, print_records_status};
use crate::output_by_format_result;
use ontosearch_core::db::Database;
use ontosearch_core::error::Result;

/// Execute the init command
pub fn execute(ctx: &CommandContext) -> Result<()> {
    let cli = ctx.cli;
    let db = Database::create(&cli.db)?;
    let version = db.schema_version();
    let db_path = ctx.db_display();

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Corpus initialized"),
                &[("db", json!(db_path)), ("schema_version", json!(version))],
            )
        },
        human => {
            if !cli.quiet {
                println!("Initialized corpus database at {}", db_path);
            }
        },
        records => {
            print_records_status("init", &db_path, "status=ok");
        }
    )
}
