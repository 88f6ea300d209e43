//! Tests for PNG and text mask export

#[cfg(test)]
mod tests {
    use gridmask::Mask;
    use gridmask::io::configuration::{INSIDE_COLOR, OUTSIDE_COLOR};
    use gridmask::io::export::{
        export_mask_as_png, export_mask_as_text, render_mask_image, render_mask_text,
    };
    use ndarray::array;
    use tempfile::TempDir;

    // Row 0 is the southernmost row of the grid
    fn south_heavy_mask() -> Mask {
        Mask::from_array(array![[true, true, true], [false, true, false]])
    }

    // Tests text rendering writes the northern row first
    #[test]
    fn test_render_mask_text_north_up() {
        assert_eq!(render_mask_text(&south_heavy_mask()), "010\n111\n");
    }

    // Tests image rendering flips rows and maps colors
    #[test]
    fn test_render_mask_image_north_up() {
        let img = render_mask_image(&south_heavy_mask()).unwrap();

        assert_eq!(img.dimensions(), (3, 2));
        assert_eq!(img.get_pixel(0, 0).0, OUTSIDE_COLOR);
        assert_eq!(img.get_pixel(1, 0).0, INSIDE_COLOR);
        assert_eq!(img.get_pixel(0, 1).0, INSIDE_COLOR);
        assert_eq!(img.get_pixel(2, 1).0, INSIDE_COLOR);
    }

    // Tests files are written into missing parent directories
    #[test]
    fn test_export_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let png_path = temp_dir.path().join("nested/out/mask.png");
        let txt_path = temp_dir.path().join("nested/out/mask.txt");

        export_mask_as_png(&south_heavy_mask(), &png_path).unwrap();
        export_mask_as_text(&south_heavy_mask(), &txt_path).unwrap();

        let img = image::open(&png_path).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(1, 0).0, INSIDE_COLOR);
        assert_eq!(std::fs::read_to_string(&txt_path).unwrap(), "010\n111\n");
    }

    // Tests export into an unwritable location fails with an error
    #[test]
    fn test_export_into_file_parent_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "file, not directory").unwrap();

        let result = export_mask_as_text(&south_heavy_mask(), &blocker.join("mask.txt"));
        assert!(result.is_err());
    }
}
