//! Deterministic layout and override integration tests.

use spot_it::core::{Canvas, SymbolId};
use spot_it::layout::{
    default_angles, layout, CircularLayout, ManualLayout, Overrides, Point, SymbolOverride,
};
use spot_it::SpotError;

fn ids(count: u32) -> Vec<SymbolId> {
    (0..count).map(SymbolId).collect()
}

// =============================================================================
// Circular layout
// =============================================================================

/// Test the default angles and ring positions for four symbols.
#[test]
fn test_four_symbols_on_ring() {
    assert_eq!(default_angles(4), vec![0.0, 90.0, 180.0, 270.0]);

    let circle = CircularLayout::new(Point::new(250.0, 250.0), 200.0, 60.0);
    let placements = circle
        .layout(&ids(4), &[SymbolOverride::default(); 4])
        .unwrap();

    for (placement, angle) in placements.iter().zip(default_angles(4)) {
        let theta = f64::to_radians(angle);
        assert!((placement.center_x - (250.0 + 200.0 * theta.cos())).abs() < 1e-9);
        assert!((placement.center_y - (250.0 + 200.0 * theta.sin())).abs() < 1e-9);
        assert!((placement.center().distance(circle.center) - 200.0).abs() < 1e-9);
    }
}

/// Test the inward and outward rotation offsets.
#[test]
fn test_facing_direction() {
    let center = Point::new(0.0, 0.0);
    let inward = CircularLayout::new(center, 10.0, 5.0);
    let outward = inward.with_face_outward(true);

    assert_eq!(inward.rotation(30.0), -120.0);
    assert_eq!(outward.rotation(30.0), -300.0);
}

/// Test that a short override list is a length mismatch.
#[test]
fn test_short_overrides_rejected() {
    let circle = CircularLayout::new(Point::new(0.0, 0.0), 10.0, 5.0);
    let err = circle
        .layout(&ids(3), &[SymbolOverride::default(); 2])
        .unwrap_err();
    assert!(matches!(
        err,
        SpotError::LengthMismatch { field: "overrides", expected: 3, actual: 2 }
    ));
}

// =============================================================================
// Zip layout
// =============================================================================

/// Test that a short size list is a length mismatch.
#[test]
fn test_zip_rejects_short_sizes() {
    let positions = [Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
    let err = layout(&ids(2), &positions, &[0.0, 0.0], &[10.0]).unwrap_err();
    assert_eq!(err.to_string(), "sizes has 1 entries but the card has 2 symbols");
}

// =============================================================================
// Manual layout and overrides
// =============================================================================

/// Test that manual default positions stay whole pixels inside the margin band.
#[test]
fn test_manual_positions_stay_in_band() {
    let manual = ManualLayout::new(Canvas::new(300.0), 50.0);
    for count in 3..=9 {
        for p in manual.default_positions(count) {
            assert!((20.0..=280.0).contains(&p.x));
            assert!((20.0..=280.0).contains(&p.y));
            assert_eq!(p.x, p.x.trunc());
        }
    }
}

/// Test that JSON overrides load, apply to their card, and round-trip.
#[test]
fn test_overrides_from_json() {
    let json = r#"[
        {"card": 0, "symbol": 1, "position_x": 120.0, "position_y": 140.0},
        {"card": 2, "symbol": 0, "size_modifier": 2.0, "rotation": 30.0}
    ]"#;
    let overrides: Overrides = serde_json::from_str(json).unwrap();
    assert_eq!(overrides.len(), 2);
    assert!(overrides.validate().is_ok());

    let manual = ManualLayout::new(Canvas::new(500.0), 80.0);
    let placements = manual.layout(&ids(3), &overrides.for_card(0, 3)).unwrap();
    assert_eq!(placements[1].center(), Point::new(120.0, 140.0));

    let placements = manual.layout(&ids(3), &overrides.for_card(2, 3)).unwrap();
    assert_eq!(placements[0].edge_size, 160.0);
    assert_eq!(placements[0].rotation_degrees, 30.0);

    let back: Overrides = serde_json::from_str(&serde_json::to_string(&overrides).unwrap()).unwrap();
    assert_eq!(back, overrides);
}

/// Test that a size modifier above 4 is rejected.
#[test]
fn test_out_of_range_modifier() {
    let mut overrides = Overrides::new();
    overrides.set(0, 0, SymbolOverride::default().with_size_modifier(4.5));
    assert!(matches!(overrides.validate(), Err(SpotError::InvalidConfig(_))));
}
