// SPDX-License-Identifier: MPL-2.0
use gallery_lightbox::app::{self, paths, Flags};
use std::path::PathBuf;

const HELP: &str = "\
gallery_lightbox - browse a handmade-creations catalog in a lightbox

USAGE:
  gallery_lightbox [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml and catalog.toml
  --catalog <FILE>     Catalog file to display
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unexpected arguments");
    }

    paths::init_cli_overrides(
        flags
            .config_dir
            .as_ref()
            .map(|dir| dir.to_string_lossy().into_owned()),
    );

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str::<_, PathBuf>("--config-dir")?,
        catalog_path: args.opt_value_from_str::<_, PathBuf>("--catalog")?,
    })
}
