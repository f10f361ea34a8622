/// Input selection: positional argument, piped stdin, or help.
use std::io::{self, IsTerminal, Read};

use crate::literal::has_dictionary_shape;

/// Where a candidate literal can be read from when no argument is given.
pub trait InputSource {
    /// Whether the source is an interactive terminal.
    fn is_interactive(&self) -> bool;

    /// Read the whole source.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error, including invalid UTF-8.
    fn read_all(&mut self) -> io::Result<String>;
}

/// Process standard input.
#[derive(Debug, Default)]
pub struct StdinSource;

impl InputSource for StdinSource {
    fn is_interactive(&self) -> bool {
        io::stdin().is_terminal()
    }

    fn read_all(&mut self) -> io::Result<String> {
        let mut buf = String::new();
        io::stdin().lock().read_to_string(&mut buf)?;
        Ok(buf)
    }
}

/// Why input selection fell back to help.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpReason {
    /// No argument and stdin is a terminal.
    Interactive,
    /// Piped input failed the shape check.
    MalformedStream,
}

/// Outcome of input selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The positional argument, passed on unchecked.
    Argument(String),
    /// Trimmed stdin contents that passed the shape check.
    Stream(String),
    /// Nothing worth parsing.
    Help(HelpReason),
}

/// Decide where the literal comes from.
///
/// An argument always wins and is not shape-checked here; the parser applies
/// the same check downstream. Stdin is read only when it is not a terminal.
///
/// # Errors
///
/// Returns the I/O error if reading stdin fails.
pub fn select(argument: Option<&str>, source: &mut dyn InputSource) -> io::Result<Selection> {
    if let Some(arg) = argument {
        return Ok(Selection::Argument(arg.to_owned()));
    }
    if source.is_interactive() {
        return Ok(Selection::Help(HelpReason::Interactive));
    }

    let raw = source.read_all()?;
    let candidate = raw.trim();
    if has_dictionary_shape(candidate) {
        Ok(Selection::Stream(candidate.to_owned()))
    } else {
        Ok(Selection::Help(HelpReason::MalformedStream))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory source for tests.
    pub(crate) struct FakeSource {
        pub interactive: bool,
        pub data: String,
        pub reads: usize,
    }

    impl FakeSource {
        pub(crate) fn piped(data: &str) -> Self {
            Self {
                interactive: false,
                data: data.to_owned(),
                reads: 0,
            }
        }

        pub(crate) fn terminal() -> Self {
            Self {
                interactive: true,
                data: String::new(),
                reads: 0,
            }
        }
    }

    impl InputSource for FakeSource {
        fn is_interactive(&self) -> bool {
            self.interactive
        }

        fn read_all(&mut self) -> io::Result<String> {
            self.reads += 1;
            Ok(self.data.clone())
        }
    }

    #[test]
    fn test_argument_wins_without_reading_stdin() {
        let mut src = FakeSource::piped("{b=2}");
        let sel = select(Some("not-a-dict"), &mut src).unwrap();
        assert_eq!(sel, Selection::Argument("not-a-dict".to_owned()));
        assert_eq!(src.reads, 0);
    }

    #[test]
    fn test_terminal_without_argument_shows_help() {
        let mut src = FakeSource::terminal();
        assert_eq!(
            select(None, &mut src).unwrap(),
            Selection::Help(HelpReason::Interactive)
        );
        assert_eq!(src.reads, 0);
    }

    #[test]
    fn test_piped_literal_is_trimmed() {
        let mut src = FakeSource::piped("{a={b=1}}\n");
        assert_eq!(
            select(None, &mut src).unwrap(),
            Selection::Stream("{a={b=1}}".to_owned())
        );
    }

    #[test]
    fn test_empty_pipe_shows_help() {
        let mut src = FakeSource::piped("");
        assert_eq!(
            select(None, &mut src).unwrap(),
            Selection::Help(HelpReason::MalformedStream)
        );
    }

    #[test]
    fn test_short_pipe_shows_help() {
        let mut src = FakeSource::piped("{a=}");
        assert_eq!(
            select(None, &mut src).unwrap(),
            Selection::Help(HelpReason::MalformedStream)
        );
    }
}
