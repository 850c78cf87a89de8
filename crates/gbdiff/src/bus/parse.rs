use tracing::debug;

use super::BusWrite;

impl BusWrite {
    /// Parse one bus-log line, trying the current grammar first and
    /// falling back to the legacy one:
    /// - `A:01 F:C-NZ ... SP:DFFB PC:C373 PCMEM:E6,10,C4,AF ADDR:FF00 VAL:1A`
    /// - `PC=C373 ADDR=FF00 VAL=1A`
    ///
    /// Returns `None` for anything that doesn't yield all three of PC,
    /// ADDR, VAL; such lines are skipped, they are not differences.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        parse_labeled(line).or_else(|| parse_legacy(line))
    }
}

/// Current format: colon-labeled tokens embedded in a full state dump.
/// Selected when both `ADDR:` and `VAL:` tokens are present.
fn parse_labeled(line: &str) -> Option<BusWrite> {
    if !(line.contains("ADDR:") && line.contains("VAL:")) {
        return None;
    }
    scan_tokens(line, "PC:", "ADDR:", "VAL:")
}

/// Legacy format: equals-delimited tokens.
fn parse_legacy(line: &str) -> Option<BusWrite> {
    scan_tokens(line, "PC=", "ADDR=", "VAL=")
}

/// Extract the three fields by token prefix. A token whose hex part
/// fails to parse leaves that field unset, which drops the line.
fn scan_tokens(line: &str, pc_tag: &str, addr_tag: &str, val_tag: &str) -> Option<BusWrite> {
    let mut pc = None;
    let mut addr = None;
    let mut val = None;

    for token in line.split_whitespace() {
        if let Some(rest) = token.strip_prefix(pc_tag) {
            if let Ok(v) = u16::from_str_radix(rest, 16) {
                pc = Some(v);
            }
        } else if let Some(rest) = token.strip_prefix(addr_tag) {
            if let Ok(v) = u16::from_str_radix(rest, 16) {
                addr = Some(v);
            }
        } else if let Some(rest) = token.strip_prefix(val_tag) {
            if let Ok(v) = u8::from_str_radix(rest, 16) {
                val = Some(v);
            }
        }
    }

    Some(BusWrite {
        pc: pc?,
        addr: addr?,
        val: val?,
    })
}

/// Parse a whole log into its valid writes, silently skipping
/// everything else.
#[must_use]
pub fn parse_log(lines: &[String]) -> Vec<BusWrite> {
    let writes: Vec<BusWrite> = lines.iter().filter_map(|l| BusWrite::parse(l)).collect();
    debug!(
        lines = lines.len(),
        writes = writes.len(),
        "parsed bus log"
    );
    writes
}
