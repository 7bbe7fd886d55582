/// Trim whitespace, a leading UTF-8 BOM, and outer quotes left over from a sloppy export.
pub fn clean_header(raw: &str) -> String {
    let trimmed = raw.trim_start_matches('\u{feff}').trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].trim().to_string()
    } else {
        trimmed.to_string()
    }
}

/// A record the CSV reader yields for a line holding only whitespace.
pub fn is_blank_record(record: &csv::StringRecord) -> bool {
    record.len() == 1 && record[0].trim().is_empty()
}
