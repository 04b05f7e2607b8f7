#[cfg(feature = "std")]
#[cfg(test)]
mod logging_tests {
    use log::LevelFilter;
    use naval_hotseat::{init_logging, parse_log_level, LOG_ENV};

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(None), LevelFilter::Info);
        assert_eq!(parse_log_level(Some("debug")), LevelFilter::Debug);
        assert_eq!(parse_log_level(Some(" TRACE ")), LevelFilter::Trace);
        assert_eq!(parse_log_level(Some("off")), LevelFilter::Off);
        assert_eq!(parse_log_level(Some("loud")), LevelFilter::Info);
    }

    #[test]
    fn test_init_logging_is_repeatable() {
        assert_eq!(LOG_ENV, "NAVAL_LOG");
        init_logging();
        init_logging();
        log::info!("logger installed");
    }
}
