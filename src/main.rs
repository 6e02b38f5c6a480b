// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_lightbox=info,wgpu=warn,iced_wgpu=warn";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang value");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir value");
        None
    });
    let gallery_dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        gallery_dir,
        config_dir,
    })
}
