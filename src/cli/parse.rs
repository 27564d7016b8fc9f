use ontosearch_core::format::OutputFormat;
use ontosearch_core::search::Confidence;

/// Parse an output format name (human, json, records)
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse a confidence band (high, medium, low)
pub fn parse_confidence(s: &str) -> std::result::Result<Confidence, String> {
    s.parse::<Confidence>().map_err(|e| e.to_string())
}

/// Parse a result limit; zero is rejected
pub fn parse_limit(s: &str) -> std::result::Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
