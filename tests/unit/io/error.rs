//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use unshred::UnshredError;
    use unshred::io::error::{ErrorContext, WidthFailure, WithContext, invalid_parameter};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = UnshredError::FileSystem {
            path: "/tmp/scan.png".into(),
            operation: "read",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(UnshredError::DegradedReconstruction { cycles: 1 }.source().is_none());
    }

    // Tests width failures explain themselves through the wrapping error
    // Verified by omitting the reason from the message
    #[test]
    fn test_width_detection_failed_message() {
        let degenerate = UnshredError::WidthDetectionFailed {
            reason: WidthFailure::DegenerateDivisor {
                divisor: 1,
                boundaries: vec![7, 12, 3, 20],
            },
        };
        let message = degenerate.to_string();
        assert!(message.contains("Could not determine strip width"));
        assert!(message.contains("[7, 12, 3, 20]"));
        assert!(message.contains("divisor 1"));

        let short = WidthFailure::InsufficientBoundaries {
            required: 4,
            available: 2,
        };
        assert_eq!(
            short.to_string(),
            "4 column boundaries required but only 2 available"
        );
    }

    // Tests strip and column errors name the numbers involved
    // Verified by swapping fields in the format string
    #[test]
    fn test_numeric_error_messages() {
        let count = UnshredError::InvalidStripCount {
            image_width: 30,
            strip_width: 16,
            strip_count: 1,
        };
        let message = count.to_string();
        assert!(message.contains("Strip width 16 yields 1 strip(s)"));
        assert!(message.contains("30 columns"));

        let undefined = UnshredError::DivisionUndefined {
            column_a: 3,
            column_b: 9,
        };
        assert!(undefined.to_string().contains("columns 3 and 9"));

        let degraded = UnshredError::DegradedReconstruction { cycles: 2 };
        assert!(degraded.to_string().contains("2 cyclic"));
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("strip_width", &0, &"must be positive");

        assert_eq!(
            error.to_string(),
            "Invalid parameter 'strip_width' = '0': must be positive"
        );
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = UnshredError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests conversions get their placeholder path replaced by context
    // Verified by overwriting paths that were already known
    #[test]
    fn test_with_path_replaces_placeholder_only() {
        let converted: Result<(), image::ImageError> = Err(image::ImageError::IoError(
            std::io::Error::other("truncated"),
        ));
        match converted.with_path("scan.png") {
            Err(UnshredError::ImageLoad { path, .. }) => {
                assert_eq!(path, PathBuf::from("scan.png"));
            }
            other => unreachable!("Expected ImageLoad, got {other:?}"),
        }

        let known: Result<(), UnshredError> = Err(UnshredError::FileSystem {
            path: PathBuf::from("kept.png"),
            operation: "write",
            source: std::io::Error::other("full"),
        });
        let context = ErrorContext {
            path: Some(PathBuf::from("other.png")),
            operation: Some("export"),
        };
        match known.with_context(context) {
            Err(UnshredError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, PathBuf::from("kept.png"));
                assert_eq!(operation, "export");
            }
            other => unreachable!("Expected FileSystem, got {other:?}"),
        }
    }
}
