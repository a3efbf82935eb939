// SPDX-License-Identifier: MPL-2.0
use iced_toasts::app::{self, Flags};
use iced_toasts::config::{self, paths};
use iced_toasts::logging;

const HELP: &str = "\
Usage: iced_toasts [OPTIONS]

Options:
  --config-dir <PATH>  Directory holding settings.toml
  --fade-ms <MS>       Fade duration in milliseconds
  --no-fade            Disable fading
  --log <FILTER>       Tracing filter (RUST_LOG takes precedence)
  -h, --help           Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        config_dir: args.opt_value_from_str("--config-dir")?,
        fade_ms: args.opt_value_from_str("--fade-ms")?,
        no_fade: args.contains("--no-fade"),
        log_filter: args.opt_value_from_str("--log")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_override(flags.config_dir.clone());
    let (config, warning) = config::load();

    let filter = flags
        .log_filter
        .clone()
        .or_else(|| config.logging.filter.clone())
        .unwrap_or_else(|| config::DEFAULT_LOG_FILTER.to_string());
    logging::init(&filter);

    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    app::run(flags, config)
}
