use crate::{
    animation::{
        ease::Ease,
        shape::{Shape, lerp_elements},
    },
    foundation::{
        core::{BezPath, Millis, PathEl},
        error::{SlideFxError, SlideFxResult},
    },
};

/// One in-flight shape animation request: morph `item_index` toward `target`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MorphPhase {
    /// Item whose path is animated.
    pub item_index: usize,
    /// Shape the path ends up as.
    pub target: Shape,
    /// Animation length.
    pub duration: Millis,
    /// Progress curve.
    pub ease: Ease,
}

/// Running morph of one item path, sampled against a clock.
///
/// `from` is whatever the path looked like when the morph started, which is how
/// cancel-and-replace picks up from a half-finished animation.
#[derive(Clone, Debug)]
pub struct MorphTrack {
    from: Vec<PathEl>,
    phase: MorphPhase,
    started_at: Millis,
}

impl MorphTrack {
    /// Start `phase` at `started_at` from the given geometry.
    pub fn start(from: &[PathEl], phase: MorphPhase, started_at: Millis) -> SlideFxResult<Self> {
        if lerp_elements(from, phase.target.elements(), 0.0).is_none() {
            return Err(SlideFxError::shape(format!(
                "item {} cannot morph into '{}'",
                phase.item_index, phase.target
            )));
        }
        Ok(Self {
            from: from.to_vec(),
            phase,
            started_at,
        })
    }

    /// The request this track is running.
    pub fn phase(&self) -> &MorphPhase {
        &self.phase
    }

    /// When the morph started.
    pub fn started_at(&self) -> Millis {
        self.started_at
    }

    /// When the morph reaches its target.
    pub fn ends_at(&self) -> Millis {
        self.started_at.saturating_add(self.phase.duration)
    }

    /// Linear progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.phase.duration == Millis::ZERO {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.started_at).as_f64();
        (elapsed / self.phase.duration.as_f64()).clamp(0.0, 1.0)
    }

    /// Return `true` once `now` has reached the end of the morph.
    pub fn is_finished(&self, now: Millis) -> bool {
        now >= self.ends_at()
    }

    /// Geometry at `now`, eased.
    pub fn sample_elements(&self, now: Millis) -> Vec<PathEl> {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return self.phase.target.elements().to_vec();
        }
        let t = self.phase.ease.apply(progress);
        lerp_elements(&self.from, self.phase.target.elements(), t)
            .unwrap_or_else(|| self.from.clone())
    }

    /// Geometry at `now` as a `BezPath`.
    pub fn sample(&self, now: Millis) -> BezPath {
        BezPath::from_vec(self.sample_elements(now))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
