//! Tests for per-sample masking and outline rings

#[cfg(test)]
mod tests {
    use crate::{BrokenRegion, ClosedDisk, square};
    use geo::Coord;
    use gridmask::algorithm::mask_from_outline;
    use gridmask::{Grid, MaskError, mask_pointwise};

    fn grid() -> Grid {
        let axis: Vec<f64> = (0..5).map(f64::from).collect();
        Grid::new(axis.clone(), axis).unwrap()
    }

    fn triangle() -> Vec<Coord<f64>> {
        vec![
            Coord { x: -0.5, y: -0.5 },
            Coord { x: 4.5, y: -0.5 },
            Coord { x: -0.5, y: 4.5 },
        ]
    }

    // Tests every sample is classified on its own
    #[test]
    fn test_pointwise_square() {
        let mask = mask_pointwise(&square(0.5, 2.5), &grid()).unwrap();

        let inside: Vec<_> = mask.iter_inside().collect();
        assert_eq!(inside, vec![(1, 1), (2, 1), (1, 2), (2, 2)]);
    }

    // Tests closed regions keep samples on their boundary
    #[test]
    fn test_pointwise_closed_disk() {
        let disk = ClosedDisk {
            cx: 2.0,
            cy: 2.0,
            radius: 2.0,
        };

        let mask = mask_pointwise(&disk, &grid()).unwrap();

        assert_eq!(mask.count_inside(), 13);
        assert_eq!(mask.get(0, 2), Some(true));
        assert_eq!(mask.get(0, 0), Some(false));
    }

    // Tests outline rings are closed before masking
    #[test]
    fn test_outline_open_and_closed() {
        let open = triangle();
        let mut closed = triangle();
        closed.push(closed[0]);

        let from_open = mask_from_outline(&open, &grid()).unwrap();
        let from_closed = mask_from_outline(&closed, &grid()).unwrap();

        assert_eq!(from_open, from_closed);
        // Samples with i + j < 4 lie strictly below the hypotenuse
        assert_eq!(from_open.count_inside(), 10);
        assert_eq!(from_open.get(3, 0), Some(true));
        assert_eq!(from_open.get(2, 2), Some(false));
    }

    // Tests rings that cannot enclose an area are rejected
    #[test]
    fn test_outline_too_short() {
        let segment = [Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 }];

        assert!(matches!(
            mask_from_outline(&segment, &grid()),
            Err(MaskError::InvalidOutline { vertices: 2 })
        ));

        let repeated = [
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
        ];
        assert!(matches!(
            mask_from_outline(&repeated, &grid()),
            Err(MaskError::InvalidOutline { vertices: 2 })
        ));
        assert!(matches!(
            mask_from_outline(&[], &grid()),
            Err(MaskError::InvalidOutline { vertices: 0 })
        ));
    }

    // Tests predicate failures surface from the first sample
    #[test]
    fn test_pointwise_error() {
        assert!(matches!(
            mask_pointwise(&BrokenRegion, &grid()),
            Err(MaskError::RegionPredicate {
                predicate: "contains_point",
                ..
            })
        ));
    }
}
