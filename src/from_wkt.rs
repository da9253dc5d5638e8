//! Read rectangles from Well-Known Text, one geometry per line.
//!
//! Each geometry contributes its envelope as an integer rectangle: the
//! origin is the rounded min corner, width and height are the rounded extent.

use std::str::FromStr;

use wkt::{Geometry, Wkt};

use crate::{Error, Rectangle, Result};

/// Running min/max over every coordinate of a geometry.
#[derive(Copy, Clone, Debug)]
struct Envelope {
    x_min: f64,
    y_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Envelope {
    fn new_empty() -> Self {
        Envelope {
            x_min: f64::NAN,
            y_min: f64::NAN,
            x_max: f64::NAN,
            y_max: f64::NAN,
        }
    }

    fn is_empty(&self) -> bool {
        self.x_min.is_nan() || self.y_min.is_nan() || self.x_max.is_nan() || self.y_max.is_nan()
    }

    // f64::min/max ignore a NaN operand, so the first point seeds the envelope.
    fn expand(&mut self, x: f64, y: f64) {
        self.x_min = self.x_min.min(x);
        self.y_min = self.y_min.min(y);
        self.x_max = self.x_max.max(x);
        self.y_max = self.y_max.max(y);
    }

    fn to_rectangle(&self) -> Option<Rectangle> {
        if self.is_empty() {
            return None;
        }
        let x = self.x_min.round() as i32;
        let y = self.y_min.round() as i32;
        let width = (self.x_max.round() as i32).saturating_sub(x);
        let height = (self.y_max.round() as i32).saturating_sub(y);
        Some(Rectangle::new(x, y, height, width))
    }
}

fn expand_line(env: &mut Envelope, line: &wkt::types::LineString<f64>) {
    for coord in &line.0 {
        env.expand(coord.x, coord.y);
    }
}

fn expand_geometry(env: &mut Envelope, geometry: &Geometry<f64>) {
    match geometry {
        Geometry::Point(point) => {
            if let Some(coord) = &point.0 {
                env.expand(coord.x, coord.y);
            }
        }
        Geometry::LineString(line) => expand_line(env, line),
        Geometry::Polygon(polygon) => {
            for ring in &polygon.0 {
                expand_line(env, ring);
            }
        }
        Geometry::MultiPoint(points) => {
            for coord in points.0.iter().filter_map(|p| p.0.as_ref()) {
                env.expand(coord.x, coord.y);
            }
        }
        Geometry::MultiLineString(lines) => {
            for line in &lines.0 {
                expand_line(env, line);
            }
        }
        Geometry::MultiPolygon(polygons) => {
            for ring in polygons.0.iter().flat_map(|p| p.0.iter()) {
                expand_line(env, ring);
            }
        }
        Geometry::GeometryCollection(collection) => {
            for inner in &collection.0 {
                expand_geometry(env, inner);
            }
        }
    }
}

/// Envelope of a single geometry, or `None` if it has no coordinates.
pub fn envelope_rectangle(geometry: &Geometry<f64>) -> Option<Rectangle> {
    let mut env = Envelope::new_empty();
    expand_geometry(&mut env, geometry);
    env.to_rectangle()
}

pub fn parse_wkt(text: &str) -> std::result::Result<Vec<Geometry<f64>>, String> {
    Wkt::<f64>::from_str(text)
        .map(|wkt| wkt.items)
        .map_err(|e| e.to_string())
}

/// Parse one geometry per non-blank line. Empty geometries are skipped.
pub fn rectangles_from_wkt(text: &str) -> Result<Vec<Rectangle>> {
    let mut rectangles = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let geometries = parse_wkt(line).map_err(|message| Error::Wkt {
            line: idx + 1,
            message,
        })?;
        rectangles.extend(geometries.iter().filter_map(envelope_rectangle));
    }
    Ok(rectangles)
}
