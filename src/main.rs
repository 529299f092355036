// SPDX-License-Identifier: MPL-2.0
use env_logger::Env;
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
IcedFolio - photo portfolio viewer

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --catalog <path>     Catalog TOML file to show
  --config-dir <dir>   Directory holding settings.toml
  --i18n-dir <dir>     Extra directory of Fluent .ftl files
  -h, --help           Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        catalog_path: args.opt_value_from_str("--catalog")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }

    Ok(flags)
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
