/// Conversion: literal → `Dictionary` → JSON on stdout.
use std::io::Write;

use super::help;
use crate::bridge::DictionaryBridge;
use crate::cli::OutputCtx;
use crate::cli::output::render_json;
use crate::errors::ConvertError;

/// Convert one literal and write the JSON document.
///
/// A literal that fails the shape check falls back to the help page.
///
/// # Errors
///
/// Returns `ConvertError::Literal` for parse errors inside a well-shaped
/// literal, or an I/O / serialization error while writing.
pub fn run(
    literal: &str,
    bridge: &dyn DictionaryBridge,
    ctx: &OutputCtx,
    out: &mut dyn Write,
) -> Result<(), ConvertError> {
    let parsed = {
        let _t = ctx.timer("parse");
        bridge.parse(literal)
    };

    let dict = match parsed {
        Ok(dict) => dict,
        Err(err) if err.is_shape() => {
            ctx.note("input is not a dictionary literal; showing help");
            return help::run(out);
        }
        Err(err) => return Err(err.into()),
    };
    if dict.is_empty() {
        ctx.note("parsed an empty dictionary");
    } else {
        ctx.note(&format!(
            "parsed {} top-level entries via '{}' bridge",
            dict.len(),
            bridge.name()
        ));
    }

    let text = {
        let _t = ctx.timer("render_json");
        render_json(&dict, ctx.format)?
    };
    writeln!(out, "{text}")?;
    Ok(())
}
