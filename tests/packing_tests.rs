//! Free packing integration tests.
//!
//! These tests check the geometric guarantees of randomized packing and
//! its seed determinism.

use proptest::prelude::*;
use spot_it::core::{LayoutRng, SymbolId};
use spot_it::layout::{BoundingBox, CollisionIndex, FreePacking, Point};
use spot_it::SpotError;

fn symbols(count: u32) -> Vec<SymbolId> {
    (0..count).map(SymbolId).collect()
}

fn card_packing() -> FreePacking {
    // 500px card with a 20px margin
    FreePacking::new(Point::new(250.0, 250.0), 230.0, 80.0)
}

// =============================================================================
// Collision index
// =============================================================================

/// Test that boxes sharing an edge or corner do not collide.
#[test]
fn test_touching_boxes_do_not_collide() {
    let mut index = CollisionIndex::new();
    index.accept(BoundingBox::new(0.0, 0.0, 10.0, 10.0));

    assert!(!index.overlaps(&BoundingBox::new(10.0, 0.0, 20.0, 10.0)));
    assert!(!index.overlaps(&BoundingBox::new(10.0, 10.0, 20.0, 20.0)));
    assert!(index.overlaps(&BoundingBox::new(9.0, 9.0, 20.0, 20.0)));
}

// =============================================================================
// Packing guarantees
// =============================================================================

/// Test that one seed always gives the same layout.
#[test]
fn test_same_seed_same_layout() {
    let a = card_packing().layout(&symbols(8), &mut LayoutRng::new(7)).unwrap();
    let b = card_packing().layout(&symbols(8), &mut LayoutRng::new(7)).unwrap();
    assert_eq!(a, b);
}

/// Test that different seeds give different layouts.
#[test]
fn test_different_seeds_differ() {
    let a = card_packing().layout(&symbols(8), &mut LayoutRng::new(1)).unwrap();
    let b = card_packing().layout(&symbols(8), &mut LayoutRng::new(2)).unwrap();
    assert_ne!(a.placements, b.placements);
}

/// Test that placements follow the card's symbol order.
#[test]
fn test_placements_keep_card_order() {
    let outcome = card_packing().layout(&symbols(6), &mut LayoutRng::new(3)).unwrap();
    let placed: Vec<SymbolId> = outcome.placements.iter().map(|p| p.symbol).collect();
    let mut expected = symbols(6);
    expected.retain(|s| !outcome.dropped.contains(s));
    assert_eq!(placed, expected);
}

/// Test that an overcrowded card drops symbols instead of failing.
#[test]
fn test_overcrowded_card_degrades() {
    let packing = FreePacking::new(Point::new(100.0, 100.0), 60.0, 80.0).with_max_attempts(20);
    let outcome = packing.layout(&symbols(12), &mut LayoutRng::new(42)).unwrap();

    assert!(!outcome.is_complete());
    assert_eq!(outcome.placements.len() + outcome.dropped.len(), 12);
    assert!(outcome.final_size > 20.0);
    assert!(outcome.final_size <= 80.0);
}

/// Test that a shrunk size carries over to later symbols on the card.
#[test]
fn test_shrunk_size_never_grows_back() {
    let packing = card_packing().with_max_attempts(1);
    for seed in 0..50 {
        let outcome = packing.layout(&symbols(9), &mut LayoutRng::new(seed)).unwrap();
        let sizes: Vec<f64> = outcome.placements.iter().map(|p| p.edge_size).collect();
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]), "seed {seed}: {sizes:?}");
    }
}

/// Test that non-finite geometry is an error, not a panic.
#[test]
fn test_infinite_radius_rejected() {
    let packing = FreePacking::new(Point::new(0.0, 0.0), f64::INFINITY, 40.0);
    assert!(matches!(
        packing.layout(&symbols(1), &mut LayoutRng::new(1)),
        Err(SpotError::InvalidConfig(_))
    ));
}

/// Test that zero attempts shrink to the floor and drop every symbol.
#[test]
fn test_zero_attempts_drops_everything() {
    let packing = card_packing().with_max_attempts(0);
    let outcome = packing.layout(&symbols(3), &mut LayoutRng::new(42)).unwrap();
    assert!(outcome.placements.is_empty());
    assert_eq!(outcome.dropped, symbols(3));
    assert_eq!(outcome.final_size, 30.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Packed boxes stay inside the circle and never overlap.
    #[test]
    fn prop_packed_boxes_never_overlap(seed in any::<u64>(), count in 1u32..10) {
        let packing = card_packing();
        let outcome = packing.layout(&symbols(count), &mut LayoutRng::new(seed)).unwrap();
        let boxes: Vec<BoundingBox> = outcome.placements.iter().map(|p| p.bounds()).collect();

        for (i, a) in boxes.iter().enumerate() {
            prop_assert!(a.within_circle(packing.center, packing.radius));
            for b in &boxes[i + 1..] {
                prop_assert!(!a.intersects(b));
            }
        }
    }

    /// Box intersection does not depend on argument order.
    #[test]
    fn prop_intersection_is_symmetric(
        ax in 0.0f64..100.0, ay in 0.0f64..100.0, a_edge in 1.0f64..50.0,
        bx in 0.0f64..100.0, by in 0.0f64..100.0, b_edge in 1.0f64..50.0,
    ) {
        let a = BoundingBox::square(Point::new(ax, ay), a_edge);
        let b = BoundingBox::square(Point::new(bx, by), b_edge);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }
}
