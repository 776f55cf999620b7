use std::sync::Once;

/// How [`init_logging`] picks its filter.
///
/// `filter` uses `env_logger` directive syntax, e.g. `"warpui_geom=trace"` to
/// see every raycast miss. Without it `RUST_LOG` is read, and without that
/// everything at `default_level` or above is shown.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Explicit directives; `RUST_LOG` is ignored.
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self { filter: Some(filter.into()), ..Self::default() }
    }
}

static INIT: Once = Once::new();

/// Installs the global logger on first call.
///
/// Returns `true` only for the call that installed it. Later calls, and calls
/// made after another logger was set (test harnesses), return `false`.
pub fn init_logging(config: LoggingConfig) -> bool {
    let mut installed = false;
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match config.filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => builder.parse_filters(&filter),
            None => builder.filter_level(config.default_level),
        };
        builder.write_style(config.write_style).format_timestamp(None);

        installed = builder.try_init().is_ok();
        if installed {
            log::debug!("warpui logging initialized");
        }
    });
    installed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_call_installs() {
        init_logging(LoggingConfig::with_filter("off"));
        assert!(!init_logging(LoggingConfig::default()));
    }

    #[test]
    fn with_filter_overrides_environment() {
        let cfg = LoggingConfig::with_filter("warpui_geom=trace");
        assert_eq!(cfg.filter.as_deref(), Some("warpui_geom=trace"));
        assert_eq!(cfg.default_level, log::LevelFilter::Info);
    }
}
