/// The manual-style help page.
use std::io::Write;

use crate::errors::ConvertError;

/// Full text of the help page, trailing newline included.
#[must_use]
pub fn manual_page() -> String {
    format!(
        "\
NSD2J(1)

NAME
    nsd2j - Convert a NSDictionary object to a JSON object

SYNOPSIS
    nsd2j [-h] [--output pretty|compact] [--error-format text|json] [--debug] [OBJECT]

DESCRIPTION
    The nsd2j utility converts an Objective-C NSDictionary description
    (for example {{name = John; age = 30;}}) to a JSON document. Input can be
    passed as a command-line argument or piped on standard input.

    Bare tokens made only of digits become JSON numbers, as do tokens of
    the form digits.digits. Quoted strings, arrays ( a, b ), nested
    dictionaries and <hex> data blobs are supported. Key order is kept.

    Input that does not look like a dictionary (at least 5 characters,
    starting with '{{' and ending with '}}') shows this page instead.

OPTIONS
    -h, --help              Show this help message
    -V, --version           Show the version
    --output FORMAT         pretty (4-space indent, default) or compact
    --error-format FORMAT   text (default) or json
    --debug                 Print input decisions and timing to stderr

EXIT STATUS
    0   JSON written, or this page shown
    1   The dictionary bridge is unavailable
    2   Invalid command-line usage
    65  The dictionary literal could not be parsed
    70  JSON serialization failed
    74  Reading input or writing output failed

EXAMPLES
    nsd2j '{{name = John; age = 30;}}'
    pbpaste | nsd2j --output compact

PROJECT
    This tool comes from the mac-utils repo on GitHub, a collection of
    useful (mostly macOS specific) shell and python scripts.

    GitHub: https://github.com/Soliez/mac-utils

VERSION
    {}
",
        env!("CARGO_PKG_VERSION")
    )
}

/// Write the help page.
///
/// # Errors
///
/// Returns `ConvertError::Io` if writing fails.
pub fn run(out: &mut dyn Write) -> Result<(), ConvertError> {
    out.write_all(manual_page().as_bytes())?;
    Ok(())
}
