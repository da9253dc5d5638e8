//! Line-oriented command scripts.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::command::parse_command;
use crate::{Command, Error, Outcome, Quadtree, Result};

/// One non-blank line of a script, with its 1-based line number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptLine {
    pub number: usize,
    pub text: String,
}

impl ScriptLine {
    pub fn command(&self) -> Result<Command> {
        parse_command(&self.text).map_err(|source| Error::Parse {
            line: self.number,
            source,
        })
    }
}

/// Counts from one pass over a script.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    /// Parsed but rejected by the tree.
    pub failed: usize,
    /// Could not be parsed.
    pub skipped: usize,
}

/// Trim a raw line and strip trailing semicolons. Blank lines yield `None`.
pub fn sanitize_line(line: &str) -> Option<&str> {
    let line = line.trim().trim_end_matches(';').trim_end();
    if line.is_empty() {
        None
    } else {
        Some(line)
    }
}

pub fn script_lines(text: &str) -> Vec<ScriptLine> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| {
            sanitize_line(raw).map(|line| ScriptLine {
                number: idx + 1,
                text: line.to_string(),
            })
        })
        .collect()
}

pub fn read_script<P: AsRef<Path>>(path: P) -> Result<Vec<ScriptLine>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = script_lines(&contents);
    debug!(path = %path.display(), lines = lines.len(), "read script");
    Ok(lines)
}

/// Run every line against `tree` in order. Failures are reported through
/// `report` and the run carries on.
pub fn run_script<F>(tree: &mut Quadtree, lines: &[ScriptLine], mut report: F) -> RunSummary
where
    F: FnMut(&ScriptLine, &Result<Outcome>),
{
    let mut summary = RunSummary::default();
    for line in lines {
        let result = line
            .command()
            .and_then(|command| command.execute(tree).map_err(Error::from));
        match &result {
            Ok(_) => summary.executed += 1,
            Err(err @ Error::Parse { .. }) => {
                warn!(line = line.number, error = %err, "skipping command");
                summary.skipped += 1;
            }
            Err(err) => {
                warn!(line = line.number, error = %err, "command failed");
                summary.failed += 1;
            }
        }
        report(line, &result);
    }
    summary
}
