use floem_hue::{
    convert, hue_distance, is_close_to_color, locate_color, rasterize_hue_wheel, sample_at,
    wedge_color, Rgb, WheelConfig,
};

fn wheel(size: u32) -> floem_hue::PixelBuffer {
    rasterize_hue_wheel(&WheelConfig::with_size(size)).unwrap()
}

#[test]
fn raster_is_square_rgba() {
    let raster = wheel(80);
    assert_eq!((raster.width(), raster.height()), (80, 80));
    assert_eq!(raster.as_bytes().len(), 80 * 80 * 4);
}

#[test]
fn sampled_hue_follows_angle() {
    let size = 200u32;
    let raster = wheel(size);
    let r = size as f64 / 2.0;
    for degree in (10..360).step_by(30) {
        // Middle of the wedge, two thirds of the way out.
        let a = (degree as f64 + 0.7).to_radians();
        let x = r + 0.66 * r * a.sin() - 0.5;
        let y = r + 0.66 * r * a.cos() - 0.5;
        let c = sample_at(&raster, y, x).unwrap();
        let hue = convert::hue_of(c);
        assert!(
            hue_distance(hue, degree as f64) <= 2.0,
            "{degree}° sampled {c} with hue {hue}"
        );
    }
}

#[test]
fn corners_are_transparent() {
    let raster = wheel(100);
    for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
        assert_eq!(raster.pixel(x, y).map(|p| p[3]), Some(0));
    }
}

#[test]
fn picked_color_can_be_located_again() {
    let config = WheelConfig::with_size(160);
    let raster = rasterize_hue_wheel(&config).unwrap();
    let target = wedge_color(200);
    let spot = locate_color(&raster, target, config.tolerance)
        .expect("wedge color is on the wheel");
    let found = sample_at(&raster, spot.y, spot.x).unwrap();
    assert!(
        hue_distance(convert::hue_of(found), 200.0) <= 3.0,
        "{found}",
    );
}

#[test]
fn hit_test_accepts_neighbor_wedge_within_tolerance() {
    let a = wedge_color(10);
    let b = wedge_color(11);
    assert!(is_close_to_color(a, b, 5));
    assert!(!is_close_to_color(a, wedge_color(20), 5));
}

#[test]
fn every_model_round_trips_through_display_text() {
    let c: Rgb = "rgb(18, 52, 86)".parse().unwrap();
    assert_eq!(c.to_hex(), "123456");
    assert_eq!(Rgb::from_hex(&c.to_css_hex()).unwrap(), c);
    assert_eq!(c.to_hsl().to_rgb(), c);
    assert_eq!(c.to_hsv().to_rgb(), c);
    assert_eq!(c.to_cmyk().to_rgb(), c);
    assert_eq!(c.to_hwb().to_rgb(), c);
}
