/// Command dispatch: routes a parsed `Cli` to help or conversion.
pub mod convert;
pub mod help;

use std::io::Write;

use crate::bridge::DictionaryBridge;
use crate::cli::{Cli, OutputCtx};
use crate::errors::ConvertError;
use crate::input::{self, HelpReason, InputSource, Selection};

/// Dispatch a parsed `Cli` to its handler.
///
/// # Errors
///
/// Returns `ConvertError` on parse, I/O or serialization failure. Input that
/// does not look like a dictionary is not an error: it shows help instead.
pub fn dispatch(
    cli: &Cli,
    ctx: &OutputCtx,
    bridge: &dyn DictionaryBridge,
    source: &mut dyn InputSource,
    out: &mut dyn Write,
) -> Result<(), ConvertError> {
    if cli.help {
        return help::run(out);
    }

    let selection = {
        let _t = ctx.timer("select_input");
        input::select(cli.object.as_deref(), source)?
    };

    match selection {
        Selection::Argument(literal) => {
            ctx.note("input source: argument");
            convert::run(&literal, bridge, ctx, out)
        }
        Selection::Stream(literal) => {
            ctx.note("input source: stdin");
            convert::run(&literal, bridge, ctx, out)
        }
        Selection::Help(HelpReason::Interactive) => {
            ctx.note("no argument and stdin is a terminal; showing help");
            help::run(out)
        }
        Selection::Help(HelpReason::MalformedStream) => {
            ctx.note("stdin is not a dictionary literal; showing help");
            help::run(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::{BridgeError, EmbeddedBridge};
    use crate::input::tests::FakeSource;
    use crate::literal::{Dictionary, LiteralError};
    use clap::Parser;

    fn run(args: &[&str], source: &mut FakeSource) -> (Result<(), ConvertError>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let ctx = OutputCtx::new(cli.output, cli.error_format, false);
        let mut out = Vec::new();
        let result = dispatch(&cli, &ctx, &EmbeddedBridge, source, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_argument_scenario() {
        let (result, out) = run(&["nsd2j", "{name=John; age=30}"], &mut FakeSource::terminal());
        assert!(result.is_ok());
        assert_eq!(out, "{\n    \"name\": \"John\",\n    \"age\": 30\n}\n");
    }

    #[test]
    fn test_piped_scenario() {
        let (result, out) = run(&["nsd2j"], &mut FakeSource::piped("{a={b=1}}\n"));
        assert!(result.is_ok());
        assert_eq!(out, "{\n    \"a\": {\n        \"b\": 1\n    }\n}\n");
    }

    #[test]
    fn test_empty_pipe_prints_help() {
        let (result, out) = run(&["nsd2j"], &mut FakeSource::piped(""));
        assert!(result.is_ok());
        assert_eq!(out, help::manual_page());
    }

    #[test]
    fn test_malformed_argument_prints_help() {
        let (result, out) = run(&["nsd2j", "not-a-dict"], &mut FakeSource::terminal());
        assert!(result.is_ok());
        assert_eq!(out, help::manual_page());
    }

    #[test]
    fn test_interactive_prints_help() {
        let (result, out) = run(&["nsd2j"], &mut FakeSource::terminal());
        assert!(result.is_ok());
        assert_eq!(out, help::manual_page());
    }

    #[test]
    fn test_help_flag_skips_input() {
        let mut src = FakeSource::piped("{a=1}");
        let (result, out) = run(&["nsd2j", "--help", "{a=1}"], &mut src);
        assert!(result.is_ok());
        assert_eq!(out, help::manual_page());
        assert_eq!(src.reads, 0);
    }

    #[test]
    fn test_parse_error_propagates() {
        let (result, out) = run(&["nsd2j", "{a={b=1}"], &mut FakeSource::terminal());
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            ConvertError::Literal(LiteralError::UnexpectedEnd { .. })
        ));
        assert_eq!(err.exit_code(), 65);
        assert!(out.is_empty());
    }

    #[test]
    fn test_compact_output() {
        let (result, out) = run(
            &["nsd2j", "--output", "compact", "{a=(1,2)}"],
            &mut FakeSource::terminal(),
        );
        assert!(result.is_ok());
        assert_eq!(out, "{\"a\":[1,2]}\n");
    }

    struct MissingBridge;

    impl DictionaryBridge for MissingBridge {
        fn name(&self) -> &'static str {
            "native"
        }

        fn probe(&self) -> Result<(), BridgeError> {
            Err(BridgeError::Unavailable {
                name: self.name(),
                hint: "not built for this platform".to_owned(),
            })
        }

        fn parse(&self, _literal: &str) -> Result<Dictionary, LiteralError> {
            unreachable!("probe fails first")
        }
    }

    #[test]
    fn test_unavailable_bridge_is_fatal() {
        let err = ConvertError::from(crate::bridge::ensure_available(&MissingBridge).unwrap_err());
        assert_eq!(err.exit_code(), 1);
        let envelope = crate::types::ErrorOutput::from_convert_error(&err);
        assert_eq!(envelope.error.code, "bridge_unavailable");
        assert!(envelope.error.message.contains("'native'"));
    }
}
