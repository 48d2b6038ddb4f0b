use std::sync::Arc;

use crate::foundation::{
    core::{BezPath, PathEl, Point},
    error::{SlideFxError, SlideFxResult},
};

/// An SVG path descriptor (`d` attribute) together with its morphable geometry.
///
/// Parsing normalizes every segment to a cubic so that two descriptors written with different
/// commands (`h`, `L`, `S`, `Q`, ...) can still be interpolated as long as they describe the
/// same number of segments per subpath.
#[derive(Clone, Debug)]
pub struct Shape {
    d: Arc<str>,
    elements: Arc<[PathEl]>,
}

impl Shape {
    /// Parse an SVG path descriptor.
    pub fn parse(d: &str) -> SlideFxResult<Self> {
        let trimmed = d.trim();
        if trimmed.is_empty() {
            return Err(SlideFxError::shape("path descriptor must be non-empty"));
        }
        let path = BezPath::from_svg(trimmed)
            .map_err(|e| SlideFxError::shape(format!("invalid path descriptor '{trimmed}': {e}")))?;
        let elements = normalize_to_cubics(path.elements());
        if !elements.iter().any(|el| matches!(el, PathEl::CurveTo(..))) {
            return Err(SlideFxError::shape(format!(
                "path descriptor '{trimmed}' has no drawable segments"
            )));
        }
        Ok(Self {
            d: Arc::from(trimmed),
            elements: elements.into(),
        })
    }

    /// The descriptor as given (trimmed).
    pub fn d(&self) -> &str {
        &self.d
    }

    /// Normalized geometry: only `MoveTo`, `CurveTo` and `ClosePath` elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.elements
    }

    /// Normalized geometry as a `BezPath`.
    pub fn to_bez_path(&self) -> BezPath {
        BezPath::from_vec(self.elements.to_vec())
    }

    /// Return `true` when `self` can be morphed into `other`.
    pub fn is_compatible_with(&self, other: &Shape) -> bool {
        same_structure(&self.elements, &other.elements)
    }

    /// Interpolate between two compatible shapes; `t` outside `[0, 1]` extrapolates.
    pub fn lerp(a: &Shape, b: &Shape, t: f64) -> SlideFxResult<BezPath> {
        lerp_elements(&a.elements, &b.elements, t)
            .map(BezPath::from_vec)
            .ok_or_else(|| {
                SlideFxError::shape(format!(
                    "shapes '{}' and '{}' cannot be morphed into each other",
                    a.d, b.d
                ))
            })
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.d == other.d
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.d)
    }
}

impl serde::Serialize for Shape {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.d)
    }
}

impl<'de> serde::Deserialize<'de> for Shape {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let d = String::deserialize(deserializer)?;
        Shape::parse(&d).map_err(serde::de::Error::custom)
    }
}

/// Interpolate two normalized element lists; `None` when their structure differs.
pub(crate) fn lerp_elements(a: &[PathEl], b: &[PathEl], t: f64) -> Option<Vec<PathEl>> {
    if !same_structure(a, b) {
        return None;
    }
    let p = |p0: Point, p1: Point| p0.lerp(p1, t);
    let out = a
        .iter()
        .zip(b)
        .map(|pair| match pair {
            (PathEl::MoveTo(p0), PathEl::MoveTo(p1)) => PathEl::MoveTo(p(*p0, *p1)),
            (PathEl::CurveTo(a1, a2, a3), PathEl::CurveTo(b1, b2, b3)) => {
                PathEl::CurveTo(p(*a1, *b1), p(*a2, *b2), p(*a3, *b3))
            }
            _ => PathEl::ClosePath,
        })
        .collect();
    Some(out)
}

fn same_structure(a: &[PathEl], b: &[PathEl]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| std::mem::discriminant(x) == std::mem::discriminant(y))
}

fn normalize_to_cubics(elements: &[PathEl]) -> Vec<PathEl> {
    let mut out = Vec::with_capacity(elements.len());
    let mut current = Point::ZERO;
    let mut start = Point::ZERO;
    for el in elements {
        match *el {
            PathEl::MoveTo(p) => {
                out.push(PathEl::MoveTo(p));
                current = p;
                start = p;
            }
            PathEl::LineTo(p) => {
                out.push(line_as_cubic(current, p));
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                let c1 = current + (c - current) * (2.0 / 3.0);
                let c2 = p + (c - p) * (2.0 / 3.0);
                out.push(PathEl::CurveTo(c1, c2, p));
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                out.push(PathEl::CurveTo(c1, c2, p));
                current = p;
            }
            PathEl::ClosePath => {
                out.push(PathEl::ClosePath);
                current = start;
            }
        }
    }
    out
}

fn line_as_cubic(from: Point, to: Point) -> PathEl {
    PathEl::CurveTo(from.lerp(to, 1.0 / 3.0), from.lerp(to, 2.0 / 3.0), to)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/shape.rs"]
mod tests;
