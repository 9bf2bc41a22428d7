//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{BorderStyle, DeckConfig, LayoutMode};
use crate::layout::Placement;

/// Python wrapper for DeckConfig.
#[pyclass(name = "DeckConfig")]
#[derive(Clone, Debug)]
pub struct PyDeckConfig(pub DeckConfig);

#[pymethods]
impl PyDeckConfig {
    /// Create a deck configuration.
    ///
    /// # Arguments
    /// - order: Symbols per card (n)
    /// - card_size: Card side length in pixels
    /// - symbol_size: Base symbol edge length in pixels
    /// - border_thickness: Border stroke width, 0 for none
    /// - circular_border: Circle outline instead of a rounded rectangle
    /// - mode: "Simple", "Circle", "Advanced" or "Scatter"
    /// - face_outward: Circle mode facing
    /// - seed: RNG seed for Scatter mode
    #[new]
    #[pyo3(signature = (
        order = 4,
        card_size = 500,
        symbol_size = 80,
        border_thickness = 3,
        circular_border = false,
        mode = "Simple",
        face_outward = false,
        seed = 42
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        order: usize,
        card_size: u32,
        symbol_size: u32,
        border_thickness: u32,
        circular_border: bool,
        mode: &str,
        face_outward: bool,
        seed: u64,
    ) -> PyResult<Self> {
        let style = if circular_border {
            BorderStyle::Circle
        } else {
            BorderStyle::RoundedRect
        };
        let config = DeckConfig::default()
            .with_order(order)
            .with_card_size(card_size)
            .with_symbol_size(symbol_size)
            .with_border(border_thickness, style)
            .with_mode(mode.parse::<LayoutMode>()?)
            .with_face_outward(face_outward)
            .with_seed(seed);
        config.validate()?;
        Ok(Self(config))
    }

    #[getter]
    fn order(&self) -> usize {
        self.0.order
    }

    #[getter]
    fn mode(&self) -> String {
        self.0.mode.to_string()
    }

    /// Number of images the deck needs.
    fn total_symbols(&self) -> usize {
        self.0.total_symbols()
    }

    /// JSON form of the configuration.
    fn to_json(&self) -> PyResult<String> {
        Ok(serde_json::to_string(&self.0).map_err(crate::error::SpotError::from)?)
    }

    fn __repr__(&self) -> String {
        format!(
            "DeckConfig(order={}, mode={}, card_size={})",
            self.0.order, self.0.mode, self.0.card_size
        )
    }
}

/// Python wrapper for Placement.
#[pyclass(name = "Placement")]
#[derive(Clone, Debug)]
pub struct PyPlacement(pub Placement);

#[pymethods]
impl PyPlacement {
    #[getter]
    fn symbol(&self) -> u32 {
        self.0.symbol.0
    }

    #[getter]
    fn center_x(&self) -> f64 {
        self.0.center_x
    }

    #[getter]
    fn center_y(&self) -> f64 {
        self.0.center_y
    }

    #[getter]
    fn rotation_degrees(&self) -> f64 {
        self.0.rotation_degrees
    }

    #[getter]
    fn edge_size(&self) -> f64 {
        self.0.edge_size
    }

    /// `(x1, y1, x2, y2)` of the unrotated footprint.
    fn bounds(&self) -> (f64, f64, f64, f64) {
        let b = self.0.bounds();
        (b.x1, b.y1, b.x2, b.y2)
    }

    fn __repr__(&self) -> String {
        format!(
            "Placement(symbol={}, x={:.1}, y={:.1}, rotation={:.1}, size={:.1})",
            self.0.symbol.0,
            self.0.center_x,
            self.0.center_y,
            self.0.rotation_degrees,
            self.0.edge_size
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
