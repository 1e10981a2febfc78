//! # Input Parser
//!
//! Turns a command address into a namespace path plus command text.
//!
//! An address is either a sequence of segments, used as-is, or a single
//! string. Strings are split before every uppercase letter and every space,
//! so `"factory example"` and `"factoryExample"` both address command
//! `example` in namespace `factory`.

use crate::error::InputError;

/// A command address before parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A camelCase or space-delimited string.
    Text(String),
    /// Already tokenized segments; the last one is the command text.
    Segments(Vec<String>),
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_owned())
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&String> for Input {
    fn from(text: &String) -> Self {
        Input::Text(text.clone())
    }
}

impl From<Vec<String>> for Input {
    fn from(segments: Vec<String>) -> Self {
        Input::Segments(segments)
    }
}

impl From<&[String]> for Input {
    fn from(segments: &[String]) -> Self {
        Input::Segments(segments.to_vec())
    }
}

impl From<&[&str]> for Input {
    fn from(segments: &[&str]) -> Self {
        Input::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Input {
    fn from(segments: [&str; N]) -> Self {
        Input::Segments(segments.iter().map(|s| (*s).to_owned()).collect())
    }
}

/// A parsed command address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    /// Path from the root to the command's parent, outermost first.
    pub namespace: Vec<String>,
    /// The leaf token naming the command.
    pub command: String,
}

/// Split a command address into namespace and command text.
///
/// Returns [`InputError::Empty`] when nothing is left to name a command.
///
/// ```
/// use clade_core::parse_input;
///
/// let parsed = parse_input("factoryExample").unwrap();
/// assert_eq!(parsed.namespace, vec!["factory"]);
/// assert_eq!(parsed.command, "example");
/// ```
pub fn parse_input(input: impl Into<Input>) -> Result<ParsedInput, InputError> {
    let mut segments = match input.into() {
        Input::Segments(segments) => segments,
        Input::Text(text) => tokenize(&text),
    };

    let command = segments.pop().ok_or(InputError::Empty)?;
    if command.is_empty() {
        return Err(InputError::Empty);
    }

    Ok(ParsedInput {
        namespace: segments,
        command,
    })
}

fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if (ch.is_uppercase() || ch == ' ') && !current.is_empty() {
            push_token(&mut tokens, &current);
            current.clear();
        }
        current.push(ch);
    }
    push_token(&mut tokens, &current);

    tokens
}

fn push_token(tokens: &mut Vec<String>, raw: &str) {
    let token = raw.trim().to_lowercase();
    if !token.is_empty() {
        tokens.push(token);
    }
}

/// Where the argument tokens of a run come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgsSource {
    /// An argv whose first two slots are the interpreter and the script path.
    Interpreted(Vec<String>),
    /// A compiled binary's argv; only the program path leads.
    Native(Vec<String>),
    /// Meaningful tokens with nothing to strip.
    Tokens(Vec<String>),
}

impl ArgsSource {
    /// The current process's arguments.
    pub fn from_env() -> Self {
        ArgsSource::Native(std::env::args().collect())
    }

    /// Tokens given directly, e.g. from a test or a REPL line.
    pub fn tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ArgsSource::Tokens(tokens.into_iter().map(Into::into).collect())
    }

    /// The arguments as given, before any slot is stripped.
    pub fn raw(&self) -> &[String] {
        match self {
            ArgsSource::Interpreted(argv) | ArgsSource::Native(argv) => argv,
            ArgsSource::Tokens(tokens) => tokens,
        }
    }
}

/// Normalize an argument source into the segments a lookup expects.
pub fn convert_args_to_input(source: ArgsSource) -> Vec<String> {
    match source {
        ArgsSource::Interpreted(argv) => argv.into_iter().skip(2).collect(),
        ArgsSource::Native(argv) => argv.into_iter().skip(1).collect(),
        ArgsSource::Tokens(tokens) => tokens,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_space_delimited() {
        let parsed = parse_input("factory example").unwrap();
        assert_eq!(parsed.namespace, strings(&["factory"]));
        assert_eq!(parsed.command, "example");
    }

    #[test]
    fn test_camel_case() {
        let parsed = parse_input("factoryExample").unwrap();
        assert_eq!(parsed.namespace, strings(&["factory"]));
        assert_eq!(parsed.command, "example");
    }

    #[test]
    fn test_every_uppercase_and_space_starts_a_token() {
        let parsed = parse_input("namespaceSegment CommandName").unwrap();
        assert_eq!(parsed.namespace, strings(&["namespace", "segment", "command"]));
        assert_eq!(parsed.command, "name");
    }

    #[test]
    fn test_single_token_has_empty_namespace() {
        let parsed = parse_input("test").unwrap();
        assert!(parsed.namespace.is_empty());
        assert_eq!(parsed.command, "test");
    }

    #[test]
    fn test_repeated_whitespace_is_discarded() {
        let parsed = parse_input("  db   Migrate ").unwrap();
        assert_eq!(parsed.namespace, strings(&["db"]));
        assert_eq!(parsed.command, "migrate");
    }

    #[test]
    fn test_only_spaces_separate_tokens() {
        let parsed = parse_input("remote\tadd origin").unwrap();
        assert_eq!(parsed.namespace, strings(&["remote\tadd"]));
        assert_eq!(parsed.command, "origin");
    }

    #[test]
    fn test_segments_are_used_unchanged() {
        let parsed = parse_input(["a", "b", "c"]).unwrap();
        assert_eq!(parsed.namespace, strings(&["a", "b"]));
        assert_eq!(parsed.command, "c");

        let parsed = parse_input(strings(&["Mixed", "Case"])).unwrap();
        assert_eq!(parsed.command, "Case");
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(parse_input(""), Err(InputError::Empty));
        assert_eq!(parse_input("   "), Err(InputError::Empty));
        assert_eq!(parse_input(Vec::<String>::new()), Err(InputError::Empty));
        assert_eq!(parse_input([""]), Err(InputError::Empty));
    }

    #[test]
    fn test_interpreted_argv_strips_two_slots() {
        let argv = strings(&["node", "app.js", "factory", "example"]);
        assert_eq!(
            convert_args_to_input(ArgsSource::Interpreted(argv)),
            strings(&["factory", "example"])
        );
    }

    #[test]
    fn test_native_argv_strips_program() {
        let argv = strings(&["./app", "test"]);
        assert_eq!(
            convert_args_to_input(ArgsSource::Native(argv)),
            strings(&["test"])
        );
    }

    #[test]
    fn test_tokens_pass_through() {
        assert_eq!(
            convert_args_to_input(ArgsSource::tokens(["a", "b"])),
            strings(&["a", "b"])
        );
    }

    #[test]
    fn test_short_argv_yields_nothing() {
        let argv = strings(&["node"]);
        assert!(convert_args_to_input(ArgsSource::Interpreted(argv)).is_empty());
    }

    #[test]
    fn test_raw_keeps_leading_slots() {
        let source = ArgsSource::Native(strings(&["./app", "test"]));
        assert_eq!(source.raw(), strings(&["./app", "test"]).as_slice());
    }
}
