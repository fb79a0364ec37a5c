//! Script benchmark log parser
//!
//! Sections are announced by a header line and followed by bullet rows:
//!
//! ```text
//!  ✓ bench/e2ee.bench.ts > e2ee handshake 2410ms
//!      name          hz     min     max    mean ...
//!    · client_init  412.31  2.1012  3.0411  2.4253 ...
//! ```

use crate::log_lines;
use bench_types::{ScriptGroup, ScriptRecord, ScriptSection};
use tracing::{debug, trace};

const BULLET: char = '\u{00B7}';
const MIN_FIELDS: usize = 5;

/// What a single log line means to the parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    /// Start of a section
    Section(ScriptSection),
    /// A bullet row with enough columns to form a record
    Row(ScriptRecord),
    /// Anything else, including short bullet rows
    Other,
}

/// Classify one line of script benchmark output
///
/// Section headers are detected on the raw line; rows are detected after
/// trimming and must begin with the `·` bullet.
pub fn classify_script_line(line: &str) -> ScriptLine {
    if let Some(section) = ScriptSection::from_marker_line(line) {
        return ScriptLine::Section(section);
    }

    let line = line.trim();
    if !line.starts_with(BULLET) {
        return ScriptLine::Other;
    }

    let cleaned = line.replace(BULLET, "");
    let fields: Vec<&str> = cleaned.split_whitespace().collect();
    if fields.len() < MIN_FIELDS {
        return ScriptLine::Other;
    }

    ScriptLine::Row(ScriptRecord::new(fields[0], fields[1], fields[4]))
}

/// Parse a full script benchmark log into section buckets
///
/// Rows before the first section header are dropped.
pub fn parse_script(text: &str) -> ScriptGroup {
    let mut group = ScriptGroup::new();
    let mut section: Option<ScriptSection> = None;

    for (lineno, line) in log_lines(text).enumerate() {
        match (classify_script_line(line), section) {
            (ScriptLine::Section(next), _) => section = Some(next),
            (ScriptLine::Row(record), Some(current)) => group.push(current, record),
            (ScriptLine::Row(record), None) => trace!(
                line = lineno + 1,
                name = %record.name,
                "dropping row before first section"
            ),
            (ScriptLine::Other, _) => trace!(line = lineno + 1, "skipping line"),
        }
    }

    debug!(
        handshake = group.get(ScriptSection::Handshake).len(),
        record = group.get(ScriptSection::Record).len(),
        yamux = group.get(ScriptSection::Yamux).len(),
        "parsed script benchmark log"
    );
    group
}
