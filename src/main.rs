// SPDX-License-Identifier: MPL-2.0
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use ued_gallery::app::{self, paths, App, Flags};

const USAGE: &str = "\
UED Gallery - single-screen photo gallery

USAGE:
    ued_gallery [OPTIONS]

OPTIONS:
    --group <LABEL>       Display label shown after the app name
    --lang <LOCALE>       UI language (en-US, fr, vi)
    --config-dir <PATH>   Directory containing settings.toml
    -h, --help            Print this help

ENVIRONMENT:
    UED_GALLERY_CONFIG_DIR   Same as --config-dir
    RUST_LOG                 Log filter (tracing EnvFilter syntax)
";

fn setup_logging() {
    let default_filter = if cfg!(debug_assertions) {
        "info,ued_gallery=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        group: args.opt_value_from_str("--group")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    setup_logging();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("Error: {err}\n\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());

    let app = match App::new(flags) {
        Ok(app) => app,
        Err(err) => {
            tracing::error!(%err, "failed to start gallery");
            return ExitCode::FAILURE;
        }
    };

    match app::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
