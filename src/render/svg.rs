//! SVG card renderer.
//!
//! Produces a standalone SVG document per card. Symbols are `<image>`
//! elements pointing at the asset path, so no image decoding happens here.

use std::fmt::Write as _;

use super::{Border, CardRenderer, CardSheet};
use crate::core::config::BorderStyle;
use crate::error::{Result, SpotError};
use crate::layout::Placement;

/// Reference [`CardRenderer`] writing SVG text.
#[derive(Clone, Debug)]
pub struct SvgRenderer {
    /// Card background fill.
    pub background: String,
    /// Border stroke colour.
    pub stroke: String,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self {
            background: "white".into(),
            stroke: "black".into(),
        }
    }
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn write_symbol(&self, out: &mut String, placement: &Placement, href: &str) {
        let half = placement.edge_size / 2.0;
        let _ = write!(
            out,
            r#"  <image href="{}" x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet""#,
            escape(href),
            fmt_px(placement.center_x - half),
            fmt_px(placement.center_y - half),
            fmt_px(placement.edge_size),
            fmt_px(placement.edge_size),
        );
        if placement.rotation_degrees != 0.0 {
            // SVG rotates clockwise for positive angles
            let _ = write!(
                out,
                r#" transform="rotate({} {} {})""#,
                fmt_px(-placement.rotation_degrees),
                fmt_px(placement.center_x),
                fmt_px(placement.center_y),
            );
        }
        out.push_str("/>\n");
    }

    fn write_border(&self, out: &mut String, border: &Border, card_size: f64) {
        // Keep the stroke inside the inset box
        let inset = border.margin + f64::from(border.width) / 2.0;
        let extent = card_size - 2.0 * inset;
        match border.style {
            BorderStyle::Circle => {
                let _ = writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    fmt_px(card_size / 2.0),
                    fmt_px(card_size / 2.0),
                    fmt_px(extent / 2.0),
                    escape(&self.stroke),
                    border.width,
                );
            }
            BorderStyle::RoundedRect => {
                let _ = writeln!(
                    out,
                    r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                    fmt_px(inset),
                    fmt_px(inset),
                    fmt_px(extent),
                    fmt_px(extent),
                    fmt_px(border.corner_radius),
                    escape(&self.stroke),
                    border.width,
                );
            }
        }
    }
}

impl CardRenderer for SvgRenderer {
    type Output = String;

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn render(&self, sheet: &CardSheet, assets: &[String]) -> Result<String> {
        let size = fmt_px(sheet.card_size);
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
        );
        let _ = writeln!(
            out,
            r#"  <rect width="{size}" height="{size}" fill="{}"/>"#,
            escape(&self.background)
        );

        for placement in &sheet.placements {
            let href = assets
                .get(placement.symbol.index())
                .ok_or_else(|| SpotError::InsufficientAssets {
                    required: placement.symbol.index() + 1,
                    supplied: assets.len(),
                })?;
            self.write_symbol(&mut out, placement, href);
        }

        if let Some(border) = &sheet.border {
            self.write_border(&mut out, border, sheet.card_size);
        }

        out.push_str("</svg>\n");
        Ok(out)
    }
}

/// Pixel value with at most two decimals and no trailing zeros.
fn fmt_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = format!("{rounded:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
