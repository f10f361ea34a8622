#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! nsd2j — convert `NSDictionary` description literals to JSON.

mod bridge;
mod cli;
mod commands;
mod errors;
mod input;
mod literal;
mod types;

use clap::Parser;

use bridge::{DictionaryBridge, EmbeddedBridge};
use cli::{Cli, OutputCtx, write_error};
use errors::ConvertError;
use input::StdinSource;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    let ctx = OutputCtx::new(cli.output, cli.error_format, cli.debug);
    let dict_bridge = EmbeddedBridge;

    let result = {
        let _t = ctx.timer("bridge_check");
        bridge::ensure_available(&dict_bridge)
    }
    .map_err(ConvertError::from)
    .and_then(|()| {
        ctx.note(&format!("using '{}' dictionary bridge", dict_bridge.name()));
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        commands::dispatch(&cli, &ctx, &dict_bridge, &mut StdinSource, &mut out)
    });

    if let Err(err) = result {
        let error_output = ErrorOutput::from_convert_error(&err);
        write_error(&error_output, ctx.error_format);
        std::process::exit(err.exit_code());
    }
}
