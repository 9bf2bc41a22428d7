//! Symbol layout: where each symbol of a card is drawn.
//!
//! ## Strategies
//!
//! - `FreePacking`: randomized placement inside a circle, with collision
//!   avoidance and shrink-on-failure. Needs an explicit [`LayoutRng`](crate::core::LayoutRng).
//! - `CircularLayout`: symbols on a ring, rotated to face in or out.
//! - `ManualLayout`: caller-chosen positions seeded from a ring.
//!
//! All strategies produce [`Placement`]s. Only free packing guarantees that
//! symbol footprints do not overlap.

pub mod collision;
pub mod deterministic;
pub mod geometry;
pub mod overrides;
pub mod packing;
pub mod placement;

pub use collision::CollisionIndex;
pub use deterministic::{
    default_angles, layout, CircularLayout, ManualLayout, FACE_INWARD_DEGREES, FACE_OUTWARD_DEGREES,
};
pub use geometry::{BoundingBox, Point};
pub use overrides::{OverrideEntry, Overrides, SymbolOverride};
pub use packing::{FreePacking, PackingOutcome};
pub use placement::Placement;
