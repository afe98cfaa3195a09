use log::LevelFilter;

/// Installs the stderr logger. `RUST_LOG`, when set, overrides the level
/// chosen by `--verbose`.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
