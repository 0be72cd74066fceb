use fern::colors::{Color, ColoredLevelConfig};
use log::{info, LevelFilter};
use crate::config::structs::configuration::Configuration;
use crate::config::structs::sentry_config::SentryConfig;

pub fn parse_log_level(level: &str) -> Option<LevelFilter>
{
    match level {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    // Unknown levels are rejected by Configuration::validate before we get here.
    let level = parse_log_level(config.log_level.as_str()).unwrap_or(LevelFilter::Info);

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        eprintln!("Failed to initialize logging: {err}");
        return;
    }
    info!("logging initialized.");
}

pub fn sentry_client_options(config: &SentryConfig) -> sentry::ClientOptions
{
    sentry::ClientOptions {
        release: sentry::release_name!(),
        debug: config.debug,
        sample_rate: config.sample_rate,
        max_breadcrumbs: config.max_breadcrumbs,
        attach_stacktrace: config.attach_stacktrace,
        send_default_pii: config.send_default_pii,
        traces_sample_rate: config.traces_sample_rate,
        session_mode: sentry::SessionMode::Request,
        auto_session_tracking: true,
        ..Default::default()
    }
}
