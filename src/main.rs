// SPDX-License-Identifier: MPL-2.0
use iced_tasks::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_tasks - a small task list

USAGE:
  iced_tasks [OPTIONS]

OPTIONS:
  --lang <LOCALE>        UI language (e.g. en-US, fr)
  --config-dir <DIR>     Directory holding settings.toml
  --log-level <FILTER>   Log filter (e.g. info, iced_tasks=debug); RUST_LOG is used otherwise
  -h, --help             Print this help
";

struct Args {
    flags: Flags,
    log_level: Option<String>,
}

fn parse_args() -> Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let parsed = Args {
        flags: Flags {
            lang: args.opt_value_from_str("--lang")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
        },
        log_level: args.opt_value_from_str("--log-level")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(parsed))
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|err| {
            eprintln!("warning: invalid --log-level {level:?} ({err}), using info");
            EnvFilter::new("info")
        }),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    // Only fails if a global subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn main() -> iced::Result {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    init_tracing(args.log_level.as_deref());
    app::run(args.flags)
}
