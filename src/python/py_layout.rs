//! Deck and layout function bindings for Python.

use numpy::PyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{LayoutRng, SymbolId};
use crate::deck;
use crate::error::SpotError;
use crate::layout::deterministic::check_len;
use crate::layout::{self, CircularLayout, FreePacking, Overrides, Point, SymbolOverride};
use crate::session::layout_symbols;

use super::py_core::{PyDeckConfig, PyPlacement};

fn symbol_ids(symbols: &[u32]) -> Vec<SymbolId> {
    symbols.iter().copied().map(SymbolId).collect()
}

fn wrap(placements: Vec<layout::Placement>) -> Vec<PyPlacement> {
    placements.into_iter().map(PyPlacement).collect()
}

/// Generate the deck of order `n` as lists of symbol ids.
#[pyfunction]
pub fn generate_deck(n: usize) -> PyResult<Vec<Vec<u32>>> {
    let deck = deck::generate(n)?;
    Ok(deck
        .iter()
        .map(|card| card.iter().map(|s| s.0).collect())
        .collect())
}

/// Number of symbols (and cards) for order `n`.
#[pyfunction]
pub fn total_symbols(n: usize) -> usize {
    deck::total_symbols(n)
}

/// Invariant violations of the generated deck of order `n`; empty when valid.
#[pyfunction]
pub fn verify(n: usize) -> PyResult<Vec<String>> {
    let deck = deck::generate(n)?;
    Ok(deck::verify_deck(&deck)
        .iter()
        .map(ToString::to_string)
        .collect())
}

/// Lay out one card with the configuration's mode.
///
/// `overrides_json` is the JSON list form of per-symbol overrides.
#[pyfunction]
#[pyo3(signature = (config, symbols, card_index = 0, overrides_json = None))]
pub fn layout_card(
    config: &PyDeckConfig,
    symbols: Vec<u32>,
    card_index: usize,
    overrides_json: Option<&str>,
) -> PyResult<(Vec<PyPlacement>, Vec<u32>)> {
    let overrides: Overrides = match overrides_json {
        Some(json) => serde_json::from_str(json).map_err(SpotError::from)?,
        None => Overrides::new(),
    };
    overrides.validate()?;
    let (placements, dropped) = layout_symbols(&config.0, card_index, &symbol_ids(&symbols), &overrides)?;
    Ok((wrap(placements), dropped.into_iter().map(|s| s.0).collect()))
}

/// Randomized free packing inside a circle.
///
/// Returns the placements and the ids of symbols that did not fit.
/// Raises `ValueError` for a non-finite or non-positive geometry.
#[pyfunction]
#[pyo3(signature = (symbols, center_x, center_y, radius, symbol_size, seed = 42, max_attempts = 100))]
pub fn scatter_layout(
    symbols: Vec<u32>,
    center_x: f64,
    center_y: f64,
    radius: f64,
    symbol_size: f64,
    seed: u64,
    max_attempts: u32,
) -> PyResult<(Vec<PyPlacement>, Vec<u32>)> {
    let outcome = FreePacking::new(Point::new(center_x, center_y), radius, symbol_size)
        .with_max_attempts(max_attempts)
        .layout(&symbol_ids(&symbols), &mut LayoutRng::new(seed))?;
    Ok((
        wrap(outcome.placements),
        outcome.dropped.into_iter().map(|s| s.0).collect(),
    ))
}

/// Symbols on a ring; `angles` and `size_modifiers` override the defaults.
#[pyfunction]
#[pyo3(signature = (
    symbols, center_x, center_y, radius, symbol_size,
    face_outward = false, angles = None, size_modifiers = None
))]
#[allow(clippy::too_many_arguments)]
pub fn circular_layout(
    symbols: Vec<u32>,
    center_x: f64,
    center_y: f64,
    radius: f64,
    symbol_size: f64,
    face_outward: bool,
    angles: Option<Vec<f64>>,
    size_modifiers: Option<Vec<f64>>,
) -> PyResult<Vec<PyPlacement>> {
    let mut slots = vec![SymbolOverride::default(); symbols.len()];
    if let Some(angles) = angles {
        check_len("angles", symbols.len(), angles.len())?;
        for (slot, angle) in slots.iter_mut().zip(angles) {
            slot.angle = Some(angle);
        }
    }
    if let Some(modifiers) = size_modifiers {
        check_len("size_modifiers", symbols.len(), modifiers.len())?;
        for (slot, modifier) in slots.iter_mut().zip(modifiers) {
            slot.size_modifier = Some(modifier);
        }
    }
    let placements = CircularLayout::new(Point::new(center_x, center_y), radius, symbol_size)
        .with_face_outward(face_outward)
        .layout(&symbol_ids(&symbols), &slots)?;
    Ok(wrap(placements))
}

/// Zip explicit positions, rotations, and sizes into placements.
#[pyfunction]
pub fn manual_layout(
    symbols: Vec<u32>,
    positions: Vec<(f64, f64)>,
    rotations: Vec<f64>,
    sizes: Vec<f64>,
) -> PyResult<Vec<PyPlacement>> {
    let positions: Vec<Point> = positions.into_iter().map(Point::from).collect();
    let placements = layout::layout(&symbol_ids(&symbols), &positions, &rotations, &sizes)?;
    Ok(wrap(placements))
}

/// `(count, 5)` array of `[symbol, x, y, rotation, size]` rows.
#[pyfunction]
pub fn placements_array<'py>(
    py: Python<'py>,
    placements: Vec<PyPlacement>,
) -> PyResult<Bound<'py, PyArray2<f64>>> {
    let rows: Vec<Vec<f64>> = placements.iter().map(|p| p.0.to_row().to_vec()).collect();
    PyArray2::from_vec2_bound(py, &rows).map_err(|e| PyValueError::new_err(e.to_string()))
}
