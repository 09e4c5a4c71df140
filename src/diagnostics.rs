use fern::colors::ColoredLevelConfig;
use log::Level;
use std::io;

/// Install the stderr logger at the given level. Called once by the driver
/// binary; the library itself only logs through the `log` macros.
pub fn init(log_level: log::LevelFilter) {
    let colors = ColoredLevelConfig::new();
    fern::Dispatch::new()
        .format(move |out, message, record| {
            let level_label = match record.level() {
                Level::Error => "error",
                Level::Warn => "warning",
                Level::Info => "info",
                Level::Debug => "debug",
                Level::Trace => "trace",
            };
            out.finish(format_args!(
                "\x1B[{}m{}:\x1B[0m {}",
                colors.get_color(&record.level()).to_fg_str(),
                level_label,
                message,
            ))
        })
        .level(log_level)
        .chain(io::stderr())
        .apply()
        .expect("Could not set up diagnostics");
}
