use crate::foundation::error::{SlideFxError, SlideFxResult};

/// Easing curves mapping normalized animation progress to output progress.
///
/// The CSS-named curves drive the slide transition declaration; `Elastic` and `BackOut` are
/// morph curves that overshoot before settling. All curves parse from and format to the
/// names used in CSS (`ease-in-out`, `cubic-bezier(0.25, 0.1, 0.25, 1)`, ...).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    /// Linear interpolation.
    Linear,
    /// CSS `ease`, i.e. `cubic-bezier(0.25, 0.1, 0.25, 1)`.
    Standard,
    /// CSS `ease-in`.
    EaseIn,
    /// CSS `ease-out`.
    EaseOut,
    /// CSS `ease-in-out`.
    EaseInOut,
    /// Arbitrary CSS cubic bezier; `x1` and `x2` must lie in `[0, 1]`.
    CubicBezier {
        /// First control point x.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
    /// Exponentially decaying sine that overshoots the target before settling.
    Elastic,
    /// Back ease-out: a single overshoot past the target.
    BackOut,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    ///
    /// Inputs are clamped; outputs of overshooting curves may leave `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Standard => UnitBezier::new(0.25, 0.1, 0.25, 1.0).solve(t),
            Self::EaseIn => UnitBezier::new(0.42, 0.0, 1.0, 1.0).solve(t),
            Self::EaseOut => UnitBezier::new(0.0, 0.0, 0.58, 1.0).solve(t),
            Self::EaseInOut => UnitBezier::new(0.42, 0.0, 0.58, 1.0).solve(t),
            Self::CubicBezier { x1, y1, x2, y2 } => UnitBezier::new(x1, y1, x2, y2).solve(t),
            Self::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                2f64.powf(-10.0 * t) * ((t - 0.075) * std::f64::consts::TAU / 0.3).sin() + 1.0
            }
            Self::BackOut => {
                if t == 0.0 {
                    return 0.0;
                }
                let s = 1.70158;
                let n = t - 1.0;
                n * n * ((s + 1.0) * n + s) + 1.0
            }
        }
    }

    /// Return `true` when the curve can produce values outside `[0, 1]`.
    pub fn can_overshoot(self) -> bool {
        match self {
            Self::Elastic | Self::BackOut => true,
            Self::CubicBezier { y1, y2, .. } => {
                !(0.0..=1.0).contains(&y1) || !(0.0..=1.0).contains(&y2)
            }
            _ => false,
        }
    }

    /// Return `true` when the curve is a valid CSS `<easing-function>`.
    ///
    /// `Elastic` and `BackOut` only exist for morphs; a browser drops a `transition` declaration
    /// that names them.
    pub fn is_css_timing_function(self) -> bool {
        !matches!(self, Self::Elastic | Self::BackOut)
    }

    /// CSS-style name of the curve.
    pub fn css_name(self) -> String {
        match self {
            Self::Linear => "linear".to_string(),
            Self::Standard => "ease".to_string(),
            Self::EaseIn => "ease-in".to_string(),
            Self::EaseOut => "ease-out".to_string(),
            Self::EaseInOut => "ease-in-out".to_string(),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
            Self::Elastic => "elastic".to_string(),
            Self::BackOut => "back-out".to_string(),
        }
    }
}

impl std::fmt::Display for Ease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.css_name())
    }
}

impl std::str::FromStr for Ease {
    type Err = SlideFxError;

    fn from_str(s: &str) -> SlideFxResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        match name.as_str() {
            "" => Err(SlideFxError::config("easing must be non-empty")),
            "linear" => Ok(Self::Linear),
            "ease" => Ok(Self::Standard),
            "ease-in" | "easein" => Ok(Self::EaseIn),
            "ease-out" | "easeout" => Ok(Self::EaseOut),
            "ease-in-out" | "easeinout" => Ok(Self::EaseInOut),
            "elastic" => Ok(Self::Elastic),
            "back-out" | "backout" => Ok(Self::BackOut),
            other => match other
                .strip_prefix("cubic-bezier(")
                .and_then(|rest| rest.strip_suffix(')'))
            {
                Some(args) => parse_cubic_bezier(args),
                None => Err(SlideFxError::config(format!("unknown easing '{other}'"))),
            },
        }
    }
}

impl TryFrom<String> for Ease {
    type Error = SlideFxError;

    fn try_from(s: String) -> SlideFxResult<Self> {
        s.parse()
    }
}

impl From<Ease> for String {
    fn from(ease: Ease) -> Self {
        ease.css_name()
    }
}

fn parse_cubic_bezier(args: &str) -> SlideFxResult<Ease> {
    let values = args
        .split(',')
        .map(|v| {
            let v = v.trim();
            v.parse::<f64>().map_err(|_| {
                SlideFxError::config(format!("cubic-bezier argument '{v}' is not a number"))
            })
        })
        .collect::<SlideFxResult<Vec<_>>>()?;

    let [x1, y1, x2, y2] = values[..] else {
        return Err(SlideFxError::config(format!(
            "cubic-bezier takes 4 arguments, got {}",
            values.len()
        )));
    };
    if values.iter().any(|v| !v.is_finite()) {
        return Err(SlideFxError::config("cubic-bezier arguments must be finite"));
    }
    if !(0.0..=1.0).contains(&x1) || !(0.0..=1.0).contains(&x2) {
        return Err(SlideFxError::config(
            "cubic-bezier x coordinates must be within [0, 1]",
        ));
    }
    Ok(Ease::CubicBezier { x1, y1, x2, y2 })
}

/// Cubic bezier from `(0, 0)` to `(1, 1)` solved for `y` given `x`.
#[derive(Clone, Copy, Debug)]
struct UnitBezier {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl UnitBezier {
    const EPSILON: f64 = 1e-7;

    fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        Self {
            ax: 1.0 - cx - bx,
            bx,
            cx,
            ay: 1.0 - cy - by,
            by,
            cy,
        }
    }

    fn sample_x(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    fn sample_y(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    fn sample_dx(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    fn solve(&self, x: f64) -> f64 {
        self.sample_y(self.solve_t(x))
    }

    fn solve_t(&self, x: f64) -> f64 {
        // Newton first, bisection when the slope is too flat to trust.
        let mut t = x;
        for _ in 0..8 {
            let err = self.sample_x(t) - x;
            if err.abs() < Self::EPSILON {
                return t;
            }
            let d = self.sample_dx(t);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        while lo < hi {
            let v = self.sample_x(t);
            if (v - x).abs() < Self::EPSILON {
                return t;
            }
            if x > v {
                lo = t;
            } else {
                hi = t;
            }
            let next = (hi - lo) * 0.5 + lo;
            if next == t {
                break;
            }
            t = next;
        }
        t
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
