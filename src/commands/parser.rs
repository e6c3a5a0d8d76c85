//! Splitting a prompt line into a command name and its arguments.

/// A command line split on whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Command name, lowercased
    pub command: String,

    /// Positional arguments, as typed
    pub args: Vec<String>,
}

/// Split `line` into a lowercased command name and positional arguments.
///
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedLine> {
    let mut parts = line.split_whitespace();
    let command = parts.next()?.to_lowercase();
    let args = parts.map(str::to_string).collect();
    Some(ParsedLine { command, args })
}
