use env_logger::Env;

/// Initializes the global logger. The level and style are taken from the
/// `LOG_LEVEL` and `LOG_STYLE` environment variables.
pub fn setup_logger() {
    env_logger::init_from_env(
        Env::new()
            .filter_or("LOG_LEVEL", "info")
            .write_style_or("LOG_STYLE", "auto"),
    );

    log::info!(target: "init", "Logger initialized.");
}
