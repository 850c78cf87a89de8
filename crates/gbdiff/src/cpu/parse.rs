use std::sync::OnceLock;

use regex::Regex;

use super::RegisterSnapshot;

impl RegisterSnapshot {
    /// Parse a register-snapshot line.
    ///
    /// Handles both logged forms:
    /// - `PC=0100 OP=00 AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE`
    /// - `PC=0100 OP=CB CB=6C AF=01B0 BC=0013 DE=00D8 HL=014D SP=FFFE`
    ///
    /// Hex digits are uppercase at the source. A non-matching line returns
    /// `None`; that is the normal outcome for banner or debug output mixed
    /// into a log, not an error.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let pattern = LINE_PATTERN.get_or_init(|| {
            Regex::new(
                r"^PC=([0-9A-F]+)\s+OP=([0-9A-F]+)(?:\s+CB=([0-9A-F]+))?\s+AF=([0-9A-F]+)\s+BC=([0-9A-F]+)\s+DE=([0-9A-F]+)\s+HL=([0-9A-F]+)\s+SP=([0-9A-F]+)",
            )
            .unwrap()
        });
        let caps = pattern.captures(line)?;

        Some(Self {
            pc: caps.get(1)?.as_str().to_string(),
            op: caps.get(2)?.as_str().to_string(),
            cb: caps.get(3).map(|m| m.as_str().to_string()),
            af: caps.get(4)?.as_str().to_string(),
            bc: caps.get(5)?.as_str().to_string(),
            de: caps.get(6)?.as_str().to_string(),
            hl: caps.get(7)?.as_str().to_string(),
            sp: caps.get(8)?.as_str().to_string(),
            raw: line.trim().to_string(),
        })
    }
}

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();
