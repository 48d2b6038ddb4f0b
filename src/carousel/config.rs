use std::{collections::BTreeMap, path::Path};

use anyhow::Context as _;

use crate::{
    animation::{ease::Ease, shape::Shape},
    carousel::state::MorphDirection,
    foundation::{
        core::Millis,
        error::{SlideFxError, SlideFxResult},
    },
};

/// Default slide duration.
pub const DEFAULT_SPEED: Millis = Millis(500);

/// Default rectangular item outline (80x60 viewBox).
pub const DEFAULT_RECT_PATH: &str = "M33,0h41c0,0,0,9.871,0,29.871C74,49.871,74,60,74,60H32.666h-0.125H6c0,0,0-10,0-30S6,0,6,0H33";

/// Default outline bowed toward the right.
pub const DEFAULT_CURVE_RIGHT_PATH: &str = "M33,0h41c0,0,5,9.871,5,29.871C79,49.871,74,60,74,60H32.666h-0.125H6c0,0,5-10,5-30S6,0,6,0H33";

/// Default outline bowed toward the left.
pub const DEFAULT_CURVE_LEFT_PATH: &str = "M33,0h41c0,0-5,9.871-5,29.871C69,49.871,74,60,74,60H32.666h-0.125H6c0,0-5-10-5-30S6,0,6,0H33";

/// Caller overrides, merged shallowly over the defaults by [`SliderOptions::resolve`].
///
/// A top-level key that is present replaces the default wholesale: overriding `paths` with
/// only `curve` does not inherit the default `rect`, and resolution fails.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct SliderOptions {
    /// Slide duration in milliseconds.
    #[serde(default)]
    pub speed: Option<Millis>,
    /// Easing of the slide transition.
    #[serde(default)]
    pub easing: Option<Ease>,
    /// Shape descriptors.
    #[serde(default)]
    pub paths: Option<PathOptions>,
    /// Keys this crate does not recognize; kept only to be reported.
    #[serde(flatten)]
    pub unknown: BTreeMap<String, serde_json::Value>,
}

/// `paths` override. Every field must be present once `paths` is overridden.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct PathOptions {
    /// Rectangular resting outline.
    #[serde(default)]
    pub rect: Option<String>,
    /// Curved intermediate outlines.
    #[serde(default)]
    pub curve: Option<CurveOptions>,
}

/// `paths.curve` override.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct CurveOptions {
    /// Outline bowed toward the left.
    #[serde(default)]
    pub left: Option<String>,
    /// Outline bowed toward the right.
    #[serde(default)]
    pub right: Option<String>,
}

impl SliderOptions {
    /// Parse overrides from a JSON object.
    pub fn from_json(value: serde_json::Value) -> SlideFxResult<Self> {
        if !value.is_object() {
            return Err(SlideFxError::config("slider options must be a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Merge over the defaults and validate.
    pub fn resolve(self) -> SlideFxResult<SliderConfig> {
        for key in self.unknown.keys() {
            tracing::warn!(key = %key, "ignoring unknown slider option");
        }

        let speed = self.speed.unwrap_or(DEFAULT_SPEED);
        if speed == Millis::ZERO {
            return Err(SlideFxError::config("speed must be > 0"));
        }
        let easing = self.easing.unwrap_or(Ease::Standard);
        if !easing.is_css_timing_function() {
            return Err(SlideFxError::config(format!(
                "easing '{easing}' is not a CSS timing function"
            )));
        }
        let paths = match self.paths {
            None => PathSet::new(
                DEFAULT_RECT_PATH,
                DEFAULT_CURVE_LEFT_PATH,
                DEFAULT_CURVE_RIGHT_PATH,
            )?,
            Some(p) => {
                let rect = p.rect.ok_or_else(|| {
                    SlideFxError::config("paths.rect is required when paths is overridden")
                })?;
                let curve = p.curve.ok_or_else(|| {
                    SlideFxError::config("paths.curve is required when paths is overridden")
                })?;
                let left = curve.left.ok_or_else(|| {
                    SlideFxError::config("paths.curve.left is required when paths is overridden")
                })?;
                let right = curve.right.ok_or_else(|| {
                    SlideFxError::config("paths.curve.right is required when paths is overridden")
                })?;
                PathSet::new(&rect, &left, &right)?
            }
        };

        Ok(SliderConfig {
            speed,
            easing,
            paths,
        })
    }
}

/// Resting and intermediate outlines of every item.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathSet {
    /// Resting outline.
    pub rect: Shape,
    /// Curved outlines shown mid-transition.
    pub curve: CurvePair,
}

/// The two curved outlines.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CurvePair {
    /// Bowed toward the left.
    pub left: Shape,
    /// Bowed toward the right.
    pub right: Shape,
}

impl PathSet {
    /// Parse the three descriptors and check they can morph into each other.
    pub fn new(rect: &str, curve_left: &str, curve_right: &str) -> SlideFxResult<Self> {
        let parse = |name: &str, d: &str| {
            Shape::parse(d).map_err(|e| SlideFxError::config(format!("paths.{name}: {e}")))
        };
        let rect = parse("rect", rect)?;
        let left = parse("curve.left", curve_left)?;
        let right = parse("curve.right", curve_right)?;

        for (name, curve) in [("curve.left", &left), ("curve.right", &right)] {
            if !rect.is_compatible_with(curve) {
                return Err(SlideFxError::config(format!(
                    "paths.{name} must have the same segment structure as paths.rect"
                )));
            }
        }

        Ok(Self {
            rect,
            curve: CurvePair { left, right },
        })
    }

    /// Curved outline used for a transition bowing in `dir`.
    ///
    /// Moving right pulls content from the right, so the outline bows left, and vice versa.
    pub fn curve_for(&self, dir: MorphDirection) -> &Shape {
        match dir {
            MorphDirection::Right => &self.curve.left,
            MorphDirection::Left => &self.curve.right,
        }
    }
}

/// Resolved, validated slider configuration.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SliderConfig {
    /// Slide duration; every orchestration delay scales with it.
    pub speed: Millis,
    /// Easing of the CSS slide transition.
    pub easing: Ease,
    /// Shape descriptors.
    pub paths: PathSet,
}

impl SliderConfig {
    /// The default configuration.
    pub fn new() -> SlideFxResult<Self> {
        SliderOptions::default().resolve()
    }

    /// Resolve a JSON options object against the defaults.
    pub fn from_json(value: serde_json::Value) -> SlideFxResult<Self> {
        SliderOptions::from_json(value)?.resolve()
    }

    /// Read a JSON options file and resolve it.
    pub fn from_path(path: &Path) -> SlideFxResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read slider options '{}'", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&text)?;
        Self::from_json(value)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/config.rs"]
mod tests;
