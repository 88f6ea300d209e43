//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gridmask::MaskError;
    use gridmask::io::error::{computation_error, invalid_parameter, predicate_error};
    use gridmask::spatial::CoordinateAxis;
    use std::error::Error;
    use std::path::PathBuf;

    // Tests file system errors expose their I/O source
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MaskError::BoundaryLoad {
            path: "/tmp/china.geojson".into(),
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/china.geojson"));
    }

    // Tests empty grid message names the axis
    #[test]
    fn test_empty_grid_error() {
        let error = MaskError::EmptyGrid {
            axis: CoordinateAxis::Y,
        };

        let message = error.to_string();
        assert!(message.contains("y axis"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter helper keeps all fields
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("resolution", &"-0.5", &"must be positive");

        let message = error.to_string();
        assert!(message.contains("resolution"));
        assert!(message.contains("-0.5"));
        assert!(message.contains("must be positive"));
    }

    // Tests predicate failures name the predicate
    #[test]
    fn test_predicate_error() {
        let error = predicate_error("contains", &"ring self-intersects");

        assert!(matches!(
            error,
            MaskError::RegionPredicate {
                predicate: "contains",
                ..
            }
        ));
        assert!(error.to_string().contains("ring self-intersects"));
    }

    // Tests ImageExport error with IO source
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MaskError::ImageExport {
            path: PathBuf::from("/restricted/mask.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/mask.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests shape mismatch reports both shapes as rows x cols
    #[test]
    fn test_shape_mismatch_error() {
        let error = MaskError::ShapeMismatch {
            expected: (3, 4),
            found: (4, 3),
        };

        let message = error.to_string();
        assert!(message.contains("4x3"));
        assert!(message.contains("3x4"));
    }

    // Tests Computation error formatting
    #[test]
    fn test_computation_error() {
        let error = computation_error("subdivision", &"empty window");

        let message = error.to_string();
        assert!(message.contains("subdivision"));
        assert!(message.contains("empty window"));
    }

    // Tests conversion from io::Error
    #[test]
    fn test_from_io_error() {
        let error: MaskError = std::io::Error::other("disk full").into();

        assert!(matches!(error, MaskError::FileSystem { .. }));
        assert!(error.to_string().contains("disk full"));
    }
}
