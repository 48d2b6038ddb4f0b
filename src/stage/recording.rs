use std::{cell::RefCell, rc::Rc};

use crate::{
    animation::{
        ease::Ease,
        morph::{MorphPhase, MorphTrack},
        shape::Shape,
    },
    carousel::state::NavControls,
    foundation::core::{BezPath, Millis, PathEl},
    stage::{
        capability::{ShapeMorpher, SlideMover},
        clock::Clock,
    },
};

/// One command received by a [`RecordingStage`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum StageEvent {
    /// A morph was started.
    Morph {
        /// Clock time of the command.
        at: Millis,
        /// Animated item.
        item_index: usize,
        /// Target outline.
        target: Shape,
        /// Morph length.
        duration: Millis,
        /// Morph curve.
        ease: Ease,
        /// An unfinished morph on the same item was cut short.
        replaced: bool,
    },
    /// An outline was replaced without animation.
    SetShape {
        /// Clock time of the command.
        at: Millis,
        /// Affected item.
        item_index: usize,
        /// New outline.
        shape: Shape,
    },
    /// The list was moved.
    Slide {
        /// Clock time of the command.
        at: Millis,
        /// New list offset in percent.
        translate_percent: f64,
        /// Arrow state applied with the move.
        nav: NavControls,
    },
}

impl StageEvent {
    /// Clock time of the command.
    pub fn at(&self) -> Millis {
        match self {
            Self::Morph { at, .. } | Self::SetShape { at, .. } | Self::Slide { at, .. } => *at,
        }
    }
}

#[derive(Debug)]
struct ItemOutline {
    resting: Vec<PathEl>,
    track: Option<MorphTrack>,
}

impl ItemOutline {
    fn sample(&self, now: Millis) -> Vec<PathEl> {
        match &self.track {
            Some(track) => track.sample_elements(now),
            None => self.resting.clone(),
        }
    }
}

struct Inner {
    clock: Box<dyn Clock>,
    items: Vec<ItemOutline>,
    translate_percent: f64,
    nav: Option<NavControls>,
    events: Vec<StageEvent>,
    slides: usize,
}

/// In-memory environment that records every command and tracks item outlines.
///
/// Clones share state, so one stage can be handed to a controller as both its
/// [`SlideMover`] and its [`ShapeMorpher`] and inspected afterwards.
#[derive(Clone)]
pub struct RecordingStage {
    inner: Rc<RefCell<Inner>>,
}

impl RecordingStage {
    /// Stage with `len` items all showing `rest`, reading time from `clock`.
    pub fn new(len: usize, rest: &Shape, clock: impl Clock + 'static) -> Self {
        let items = (0..len)
            .map(|_| ItemOutline {
                resting: rest.elements().to_vec(),
                track: None,
            })
            .collect();
        Self {
            inner: Rc::new(RefCell::new(Inner {
                clock: Box::new(clock),
                items,
                translate_percent: 0.0,
                nav: None,
                events: Vec::new(),
                slides: 0,
            })),
        }
    }

    /// Every command received so far, in order.
    pub fn events(&self) -> Vec<StageEvent> {
        self.inner.borrow().events.clone()
    }

    /// Number of slide commands received so far.
    pub fn slide_count(&self) -> usize {
        self.inner.borrow().slides
    }

    /// Current list offset in percent.
    pub fn translate_percent(&self) -> f64 {
        self.inner.borrow().translate_percent
    }

    /// Arrow state applied by the last slide.
    pub fn nav(&self) -> Option<NavControls> {
        self.inner.borrow().nav
    }

    /// Clock time of the most recent slide command.
    pub fn last_slide_at(&self) -> Option<Millis> {
        self.inner.borrow().events.iter().rev().find_map(|e| match e {
            StageEvent::Slide { at, .. } => Some(*at),
            _ => None,
        })
    }

    /// Outline of `item_index` at the clock's current time.
    pub fn item_path(&self, item_index: usize) -> Option<BezPath> {
        let inner = self.inner.borrow();
        let now = inner.clock.now();
        inner
            .items
            .get(item_index)
            .map(|item| BezPath::from_vec(item.sample(now)))
    }

    /// Morph currently running on `item_index`, if any.
    pub fn active_morph(&self, item_index: usize) -> Option<MorphPhase> {
        let inner = self.inner.borrow();
        let now = inner.clock.now();
        inner
            .items
            .get(item_index)
            .and_then(|item| item.track.as_ref())
            .filter(|track| !track.is_finished(now))
            .map(|track| track.phase().clone())
    }
}

impl SlideMover for RecordingStage {
    fn slide_to(&mut self, translate_percent: f64, nav: NavControls) {
        let mut inner = self.inner.borrow_mut();
        let at = inner.clock.now();
        inner.translate_percent = translate_percent;
        inner.nav = Some(nav);
        inner.slides += 1;
        inner.events.push(StageEvent::Slide {
            at,
            translate_percent,
            nav,
        });
    }
}

impl ShapeMorpher for RecordingStage {
    fn animate(&mut self, phase: &MorphPhase) {
        let mut inner = self.inner.borrow_mut();
        let at = inner.clock.now();
        let Some(item) = inner.items.get_mut(phase.item_index) else {
            tracing::warn!(item = phase.item_index, "morph for unknown item ignored");
            return;
        };

        let current = item.sample(at);
        let replaced = item.track.as_ref().is_some_and(|t| !t.is_finished(at));
        match MorphTrack::start(&current, phase.clone(), at) {
            Ok(track) => {
                item.resting = phase.target.elements().to_vec();
                item.track = Some(track);
            }
            Err(err) => {
                tracing::warn!(
                    item = phase.item_index,
                    %err,
                    "morph not possible, jumping to target"
                );
                item.resting = phase.target.elements().to_vec();
                item.track = None;
            }
        }

        inner.events.push(StageEvent::Morph {
            at,
            item_index: phase.item_index,
            target: phase.target.clone(),
            duration: phase.duration,
            ease: phase.ease,
            replaced,
        });
    }

    /// Replace the outline of an idle item.
    ///
    /// A morph still running on the item keeps control of the outline and ends on its own
    /// target, the same as an SVG animation overwriting a `d` attribute set mid-flight.
    fn set_shape(&mut self, item_index: usize, shape: &Shape) {
        let mut inner = self.inner.borrow_mut();
        let at = inner.clock.now();
        let Some(item) = inner.items.get_mut(item_index) else {
            tracing::warn!(item = item_index, "shape for unknown item ignored");
            return;
        };
        if item.track.as_ref().is_some_and(|t| !t.is_finished(at)) {
            tracing::trace!(item = item_index, "outline owned by running morph");
        } else {
            item.resting = shape.elements().to_vec();
            item.track = None;
        }
        inner.events.push(StageEvent::SetShape {
            at,
            item_index,
            shape: shape.clone(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/recording.rs"]
mod tests;
