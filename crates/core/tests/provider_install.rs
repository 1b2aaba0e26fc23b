//! A provider installed before first use serves every derived-space request
//! for the rest of the process.

use qualpal_core::{install_provider, provider, provider_available, Color, ColorError, ColorMath};

struct ScaledMath;

impl ColorMath for ScaledMath {
    fn hsl_to_rgb(&self, h: f64, s: f64, l: f64) -> [f64; 3] {
        [h / 360.0, s, l]
    }

    fn rgb_to_hsl(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        [r * 360.0, g, b]
    }

    fn rgb_to_xyz(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        [r, g, b]
    }

    fn rgb_to_lab(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        [r * 100.0, g, b]
    }

    fn rgb_to_lch(&self, r: f64, g: f64, b: f64) -> [f64; 3] {
        [r * 100.0, g, b]
    }
}

// Single test: the provider slot is process-wide, so the steps must run in order.
#[test]
fn installed_provider_serves_all_views() {
    install_provider(Box::new(ScaledMath)).unwrap();
    assert!(provider_available());
    assert!(provider().is_some());

    let red = Color::new("#ff0000").unwrap();
    assert_eq!(red.hsl().unwrap(), (360.0, 0.0, 0.0));
    assert_eq!(red.xyz().unwrap(), (1.0, 0.0, 0.0));
    assert_eq!(red.lab().unwrap(), (100.0, 0.0, 0.0));
    assert_eq!(red.lch().unwrap(), (100.0, 0.0, 0.0));

    let from_hsl = Color::from_hsl(180.0, 0.2, 1.0).unwrap();
    assert_eq!(from_hsl.hex(), "#8033ff");

    assert!(matches!(
        Color::from_hsl(0.0, 2.0, 0.5),
        Err(ColorError::OutOfRange { channel: "s", .. })
    ));

    assert!(matches!(
        install_provider(Box::new(ScaledMath)),
        Err(ColorError::ProviderAlreadyResolved)
    ));
    assert!(provider_available());
}

#[test]
fn colors_can_be_shared_across_threads() {
    let red = Color::new("#ff0000").unwrap();
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let red = red.clone();
            std::thread::spawn(move || red.hex().to_string())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "#ff0000");
    }
}
