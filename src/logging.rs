use log::LevelFilter;

/// Installs the global logger. Log lines go to stderr so stdout only carries messages.
pub fn setup_logger(level: LevelFilter) -> Result<(), String> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .map_err(|err| format!("{}", err))
}
