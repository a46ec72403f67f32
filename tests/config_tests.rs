use tint_log::cli::{build_cli, parse_config, parse_message};
use tint_log::internal::config::{
    get_version_info, DEFAULT_STACK_BUFFER_BYTES, MAX_STACK_BUFFER_BYTES,
};
use tint_log::{LoggerConfig, Severity};

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // ==================== defaults ====================

    #[test]
    fn test_default_config() {
        let cfg = LoggerConfig::default();

        assert_eq!(cfg.min_severity, Severity::Debug);
        assert_eq!(cfg.stack_buffer_bytes, DEFAULT_STACK_BUFFER_BYTES);
        assert_eq!(cfg.stack_buffer_bytes, 512);
        assert!(cfg.color);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_builder_methods() {
        let cfg = LoggerConfig::default()
            .with_min_severity(Severity::Warning)
            .with_stack_buffer_bytes(64)
            .with_color(false);

        assert_eq!(cfg.min_severity, Severity::Warning);
        assert_eq!(cfg.stack_buffer_bytes, 64);
        assert!(!cfg.color);
    }

    // ==================== validate() ====================

    #[test]
    fn test_validate_rejects_zero_buffer() {
        let cfg = LoggerConfig::default().with_stack_buffer_bytes(0);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_max_buffer() {
        let cfg = LoggerConfig::default().with_stack_buffer_bytes(MAX_STACK_BUFFER_BYTES);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_buffer_above_max() {
        let cfg = LoggerConfig::default().with_stack_buffer_bytes(MAX_STACK_BUFFER_BYTES + 1);
        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("stack_buffer_bytes"));
    }

    // ==================== load_from() ====================

    #[test]
    fn test_load_without_variables_uses_defaults() {
        let cfg = LoggerConfig::load_from(Some(vars(&[]))).unwrap();
        assert_eq!(cfg, LoggerConfig::default());
    }

    #[test]
    fn test_load_reads_prefixed_variables() {
        let cfg = LoggerConfig::load_from(Some(vars(&[
            ("TINT_LOG_MIN_SEVERITY", "warning"),
            ("TINT_LOG_STACK_BUFFER_BYTES", "64"),
            ("TINT_LOG_COLOR", "false"),
        ])))
        .unwrap();

        assert_eq!(cfg.min_severity, Severity::Warning);
        assert_eq!(cfg.stack_buffer_bytes, 64);
        assert!(!cfg.color);
    }

    #[test]
    fn test_load_accepts_none_threshold() {
        let cfg =
            LoggerConfig::load_from(Some(vars(&[("TINT_LOG_MIN_SEVERITY", "none")]))).unwrap();
        assert_eq!(cfg.min_severity, Severity::ShowNone);
    }

    #[test]
    fn test_load_severity_is_case_insensitive() {
        let cfg =
            LoggerConfig::load_from(Some(vars(&[("TINT_LOG_MIN_SEVERITY", "WARNING")]))).unwrap();
        assert_eq!(cfg.min_severity, Severity::Warning);

        let cfg = LoggerConfig::load_from(Some(vars(&[("TINT_LOG_MIN_SEVERITY", "Warn")]))).unwrap();
        assert_eq!(cfg.min_severity, Severity::Warning);
    }

    #[test]
    fn test_load_ignores_unprefixed_variables() {
        let cfg = LoggerConfig::load_from(Some(vars(&[("MIN_SEVERITY", "error")]))).unwrap();
        assert_eq!(cfg.min_severity, Severity::Debug);
    }

    #[test]
    fn test_load_rejects_unknown_severity() {
        let result = LoggerConfig::load_from(Some(vars(&[("TINT_LOG_MIN_SEVERITY", "fatal")])));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_rejects_invalid_buffer_size() {
        let result =
            LoggerConfig::load_from(Some(vars(&[("TINT_LOG_STACK_BUFFER_BYTES", "0")])));
        assert!(result.is_err());
    }

    // ==================== cli ====================

    #[test]
    fn test_cli_overrides() {
        let matches = build_cli()
            .try_get_matches_from([
                "tint-log",
                "--min-severity",
                "error",
                "--stack-buffer-bytes",
                "128",
                "--no-color",
            ])
            .unwrap();
        let cfg = parse_config(&matches).unwrap();

        assert_eq!(cfg.min_severity, Severity::Error);
        assert_eq!(cfg.stack_buffer_bytes, 128);
        assert!(!cfg.color);
        assert!(parse_message(&matches).unwrap().is_none());
    }

    #[test]
    fn test_cli_rejects_oversized_buffer() {
        let matches = build_cli()
            .try_get_matches_from(["tint-log", "--stack-buffer-bytes", "100000"])
            .unwrap();
        assert!(parse_config(&matches).is_err());
    }

    #[test]
    fn test_cli_rejects_unknown_severity() {
        let result = build_cli().try_get_matches_from(["tint-log", "--min-severity", "fatal"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_message_joins_words() {
        let matches = build_cli()
            .try_get_matches_from(["tint-log", "-s", "warning", "disk", "almost", "full"])
            .unwrap();
        let (severity, message) = parse_message(&matches).unwrap().unwrap();

        assert_eq!(severity, Severity::Warning);
        assert_eq!(message, "disk almost full");
    }

    #[test]
    fn test_cli_message_defaults_to_info() {
        let matches = build_cli()
            .try_get_matches_from(["tint-log", "hello"])
            .unwrap();
        let (severity, _) = parse_message(&matches).unwrap().unwrap();
        assert_eq!(severity, Severity::Info);
    }

    #[test]
    fn test_version_info_mentions_crate_version() {
        assert!(get_version_info().contains(env!("CARGO_PKG_VERSION")));
    }
}
