use crate::address_range::AddressRange;

/// A range file line that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    /// 1-based line number.
    pub line_no: usize,
    pub content: String,
    pub reason: String,
}

/// Result of parsing one range source.
#[derive(Debug, Clone, Default)]
pub struct ParsedRanges {
    pub ranges: Vec<AddressRange>,
    pub rejected: Vec<RejectedLine>,
}

/// Parse one line of a range file.
///
/// - blank line       → None
/// - `10.0.0.0/24`    → Some(Ok)
/// - `10.0.0.9/24`    → Some(Ok), normalized to `10.0.0.0/24`
/// - `192.0.2.1`      → Some(Ok), single host
/// - anything else    → Some(Err)
///
/// There is no comment syntax; `# foo` is a malformed line.
pub fn parse_range_line(line: &str) -> Option<Result<AddressRange, String>> {
    let line = line.trim();

    if line.is_empty() {
        return None;
    }

    Some(AddressRange::parse(line).map_err(|e| e.to_string()))
}

/// Parse a whole range file, keeping file order and collecting rejects.
pub fn parse_range_text(text: &str) -> ParsedRanges {
    let mut parsed = ParsedRanges::default();

    for (idx, line) in text.lines().enumerate() {
        match parse_range_line(line) {
            None => {}
            Some(Ok(range)) => parsed.ranges.push(range),
            Some(Err(reason)) => parsed.rejected.push(RejectedLine {
                line_no: idx + 1,
                content: line.trim().to_string(),
                reason,
            }),
        }
    }

    parsed
}
