//! Status message formatting helpers

use ontosearch_core::error::Result;
use serde_json::json;

/// Print a JSON status message with optional fields
///
/// # Examples
/// ```ignore
/// print_json_status("ok", Some("Corpus initialized"), &[("db", json!("corpus.db"))])?;
/// ```
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print a records H-line for commands without a query
pub fn print_records_status(mode: &str, db: &str, extra: &str) {
    if extra.is_empty() {
        println!("H ontosearch=1 records=1 db={} mode={}", db, mode);
    } else {
        println!("H ontosearch=1 records=1 db={} mode={} {}", db, mode, extra);
    }
}
