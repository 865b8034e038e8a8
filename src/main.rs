// SPDX-License-Identifier: MPL-2.0
use pricing_intake::app::{self, paths, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    setup_tracing();

    let mut args = pico_args::Arguments::from_env();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang value");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --config-dir value");
        None
    });
    let files: Vec<PathBuf> = args.finish().into_iter().map(PathBuf::from).collect();

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir,
        files,
    })
}

/// Logs go to stderr, filtered by `RUST_LOG`.
fn setup_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
