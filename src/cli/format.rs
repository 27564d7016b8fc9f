//! Format output dispatch helpers

/// Dispatch output by format when the json branch returns a `Result` and
/// the human and records branches print directly.
///
/// ```rust,ignore
/// output_by_format_result!(cli.format,
///     json => { print_json(&hits) },
///     human => { print_human(&hits); },
///     records => { print_records(&hits); }
/// )?;
/// ```
#[macro_export]
macro_rules! output_by_format_result {
    ($format:expr, json => $json:expr, human => $human:block, records => $records:block) => {
        match $format {
            $crate::cli::OutputFormat::Json => $json,
            $crate::cli::OutputFormat::Human => {
                $human;
                Ok(())
            }
            $crate::cli::OutputFormat::Records => {
                $records;
                Ok(())
            }
        }
    };
}
