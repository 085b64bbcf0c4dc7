// SPDX-License-Identifier: MPL-2.0
use iced_login::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_login

USAGE:
  iced_login [OPTIONS]

OPTIONS:
  --lang <LOCALE>       Display language (e.g. en-US, fr, ko)
  --config-dir <PATH>   Directory holding settings.toml
  -v, --verbose         Debug logging
  -h, --help            Print this help

ENVIRONMENT:
  ICED_LOGIN_CONFIG_DIR Directory holding settings.toml
  ICED_LOGIN_LOG        Log filter (tracing EnvFilter syntax)
";

/// Environment variable holding the log filter.
const ENV_LOG: &str = "ICED_LOGIN_LOG";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let verbose = args.contains(["-v", "--verbose"]);
    setup_tracing(verbose);

    let flags = Flags {
        lang: opt_value(&mut args, "--lang"),
        config_dir: opt_value(&mut args, "--config-dir"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    app::run(flags)
}

fn opt_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(flag = key, error = %err, "ignoring invalid argument");
        None
    })
}

fn setup_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("iced_login=debug,warn")
        } else {
            EnvFilter::new("iced_login=info,warn")
        }
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
