use tint_log::internal::logger::{LogError, ParseSeverityError, Severity};

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== ordering ====================

    #[test]
    fn test_severity_ordering_is_monotonic() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
        assert!(Severity::Error < Severity::ShowNone);
    }

    #[test]
    fn test_numeric_values() {
        assert_eq!(Severity::Debug.as_u8(), 1);
        assert_eq!(Severity::Info.as_u8(), 2);
        assert_eq!(Severity::Warning.as_u8(), 3);
        assert_eq!(Severity::Error.as_u8(), 4);
        assert_eq!(Severity::ShowNone.as_u8(), 5);
    }

    #[test]
    fn test_only_sentinel_is_not_emittable() {
        for severity in Severity::EMITTABLE {
            assert!(severity.is_emittable());
        }
        assert!(!Severity::ShowNone.is_emittable());
    }

    #[test]
    fn test_default_is_debug() {
        assert_eq!(Severity::default(), Severity::Debug);
    }

    // ==================== labels and styles ====================

    #[test]
    fn test_labels() {
        assert_eq!(Severity::Debug.label(), "debug");
        assert_eq!(Severity::Info.label(), "info");
        assert_eq!(Severity::Warning.label(), "warning");
        assert_eq!(Severity::Error.label(), "error");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[test]
    fn test_styled_label_colored() {
        assert_eq!(
            Severity::Debug.styled(true).to_string(),
            "\x1b[92;1mdebug\x1b[0m"
        );
        assert_eq!(
            Severity::Error.styled(true).to_string(),
            "\x1b[91;1merror\x1b[0m"
        );
    }

    #[test]
    fn test_styled_label_plain() {
        assert_eq!(Severity::Info.styled(false).to_string(), "info");
    }

    #[test]
    fn test_styles_are_distinct() {
        let styles: Vec<&str> = Severity::EMITTABLE.iter().map(|s| s.ansi_style()).collect();
        for (i, a) in styles.iter().enumerate() {
            for b in &styles[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    // ==================== TryFrom<u8> ====================

    #[test]
    fn test_try_from_valid_values() {
        assert_eq!(Severity::try_from(1).unwrap(), Severity::Debug);
        assert_eq!(Severity::try_from(4).unwrap(), Severity::Error);
        assert_eq!(Severity::try_from(5).unwrap(), Severity::ShowNone);
    }

    #[test]
    fn test_try_from_out_of_range() {
        assert!(matches!(
            Severity::try_from(0),
            Err(LogError::InvalidArguments(0))
        ));
        assert!(matches!(
            Severity::try_from(6),
            Err(LogError::InvalidArguments(6))
        ));
    }

    // ==================== FromStr ====================

    #[test]
    fn test_parse_names() {
        assert_eq!("debug".parse::<Severity>().unwrap(), Severity::Debug);
        assert_eq!("INFO".parse::<Severity>().unwrap(), Severity::Info);
        assert_eq!("warn".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" warning ".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!("Error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("none".parse::<Severity>().unwrap(), Severity::ShowNone);
    }

    #[test]
    fn test_parse_fatal_is_rejected() {
        let err = "fatal".parse::<Severity>().unwrap_err();
        assert_eq!(err, ParseSeverityError("fatal".to_string()));
        assert!(err.to_string().contains("fatal"));
    }

    #[test]
    fn test_directives() {
        assert_eq!(Severity::Info.as_directive(), "info");
        assert_eq!(Severity::ShowNone.as_directive(), "off");
    }
}
