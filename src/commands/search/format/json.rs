//! JSON output formatting for search command

use ontosearch_core::error::Result;
use ontosearch_core::term::Hit;

/// Output hits as a JSON array (`[]` when empty)
pub fn output_json(hits: &[Hit]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(hits)?);
    Ok(())
}
