//! Python bindings for the spot-it deck generator.
//!
//! Lets a Python host (a notebook or a web UI) drive deck generation and
//! layout while keeping image handling on the Python side.
//!
//! # Quick Start
//!
//! ```python
//! import spot_it
//!
//! deck = spot_it.generate_deck(4)          # 13 cards of 4 symbol ids
//! config = spot_it.DeckConfig(order=4, mode="Scatter", seed=7)
//! placements, dropped = spot_it.layout_card(config, deck[0], card_index=0)
//!
//! for p in placements:
//!     print(p.symbol, p.center_x, p.center_y, p.rotation_degrees, p.edge_size)
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::SpotError;

mod py_core;
mod py_layout;

pub use py_core::*;
pub use py_layout::*;

impl From<SpotError> for PyErr {
    fn from(err: SpotError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

/// spot_it: Spot It! deck generation and symbol layout.
///
/// This module provides:
/// - Deck generation and verification
/// - Free packing, circular, and manual layouts
/// - Placement arrays for image compositing
#[pymodule]
fn spot_it(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Core types
    m.add_class::<PyDeckConfig>()?;
    m.add_class::<PyPlacement>()?;

    // Deck
    m.add_function(wrap_pyfunction!(generate_deck, m)?)?;
    m.add_function(wrap_pyfunction!(total_symbols, m)?)?;
    m.add_function(wrap_pyfunction!(verify, m)?)?;

    // Layout
    m.add_function(wrap_pyfunction!(layout_card, m)?)?;
    m.add_function(wrap_pyfunction!(scatter_layout, m)?)?;
    m.add_function(wrap_pyfunction!(circular_layout, m)?)?;
    m.add_function(wrap_pyfunction!(manual_layout, m)?)?;
    m.add_function(wrap_pyfunction!(placements_array, m)?)?;

    Ok(())
}
