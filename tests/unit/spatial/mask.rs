//! Tests for mask queries and field masking

#[cfg(test)]
mod tests {
    use gridmask::{Mask, MaskError};
    use ndarray::array;

    // Rows follow y: row 0 is the southernmost
    fn sample_mask() -> Mask {
        Mask::from_array(array![[false, true, true], [false, false, true]])
    }

    // Tests indexing is (column, row)
    #[test]
    fn test_get_and_dimensions() {
        let mask = sample_mask();

        assert_eq!(mask.width(), 3);
        assert_eq!(mask.height(), 2);
        assert_eq!(mask.get(1, 0), Some(true));
        assert_eq!(mask.get(1, 1), Some(false));
        assert_eq!(mask.get(0, 2), None);
        assert_eq!(mask.get(3, 0), None);
    }

    // Tests counting and iteration over inside samples
    #[test]
    fn test_inside_queries() {
        let mask = sample_mask();

        assert_eq!(mask.count_inside(), 3);
        assert!((mask.fraction_inside() - 0.5).abs() < f64::EPSILON);

        let inside: Vec<_> = mask.iter_inside().collect();
        assert_eq!(inside, vec![(1, 0), (2, 0), (2, 1)]);

        assert!(!mask.is_uniform(true));
        assert!(Mask::from_array(array![[true, true]]).is_uniform(true));
    }

    // Tests outside values are replaced by the fill value
    #[test]
    fn test_apply_masks_field() {
        let mask = sample_mask();
        let field = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];

        let masked = mask.apply(&field, f64::NAN).unwrap();

        assert!(masked[[0, 0]].is_nan());
        assert_eq!(masked[[0, 1]], 2.0);
        assert_eq!(masked[[1, 2]], 6.0);
        assert!(masked[[1, 1]].is_nan());
    }

    // Tests fields of the wrong shape are rejected
    #[test]
    fn test_apply_shape_mismatch() {
        let mask = sample_mask();
        let field = array![[1, 2], [3, 4], [5, 6]];

        assert!(matches!(
            mask.apply(&field, 0),
            Err(MaskError::ShapeMismatch {
                expected: (2, 3),
                found: (3, 2)
            })
        ));
    }

    // Tests the raw matrix round trips through the accessors
    #[test]
    fn test_array_access() {
        let cells = array![[true], [false]];
        let mask = Mask::from_array(cells.clone());

        assert_eq!(mask.as_array(), &cells);
        assert_eq!(mask.into_array(), cells);
    }
}
