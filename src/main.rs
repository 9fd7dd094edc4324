// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};

const USAGE: &str = "Usage: iced_gallery [ROOT] [--lang <id>] [--config-dir <path>] [--i18n-dir <path>]";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("iced_gallery=info"))
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            log::error!("{err}");
            println!("{USAGE}");
            return Ok(());
        }
    };

    app::run(flags)
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let i18n_dir = args.opt_value_from_str("--i18n-dir")?;
    let root = args.opt_free_from_str()?;

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring extra arguments: {rest:?}");
    }

    Ok(Flags {
        lang,
        root,
        i18n_dir,
        config_dir,
    })
}
