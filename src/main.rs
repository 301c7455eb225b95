// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_toast - toast notification playground

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --config-dir <PATH>   Directory holding settings.toml
  --position <ANCHOR>   Anchor for spawned toasts (e.g. top-right or tR)
  --duration <MS>       Countdown for spawned toasts in milliseconds
  -h, --help            Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match Flags::parse(args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
