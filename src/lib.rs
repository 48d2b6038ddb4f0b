//! slidefx orchestrates carousel transitions that pair a positional slide with an SVG path
//! morph.
//!
//! A [`TransitionController`] owns the navigation state and turns each accepted
//! `navigate(prev|next)` request into a short choreography:
//!
//! 1. **t = 0**: the outgoing item starts pinching into a curved outline, and the incoming item
//!    is switched to that same curve without animation.
//! 2. **t = 0.2 × speed**: the list slides and the navigation arrows are reconciled.
//! 3. **t = 0.5 × speed**: the incoming item springs back to its rectangle with an elastic
//!    overshoot lasting 3 × speed.
//!
//! The controller is busy from the request until the environment reports the end of the slide
//! transition; requests made while busy, or past either end of the list, are dropped and
//! reported as `false`.
//!
//! The environment is injected: a [`SlideMover`], a [`ShapeMorpher`] and a [`Clock`]. The
//! crate ships [`RecordingStage`] and [`ManualClock`] as in-memory implementations, and a
//! [`Simulator`] that runs navigation scripts on a virtual clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod carousel;
mod foundation;
mod stage;

pub use animation::ease::Ease;
pub use animation::morph::{MorphPhase, MorphTrack};
pub use animation::shape::Shape;
pub use carousel::config::{
    CurveOptions, CurvePair, DEFAULT_CURVE_LEFT_PATH, DEFAULT_CURVE_RIGHT_PATH, DEFAULT_RECT_PATH,
    DEFAULT_SPEED, PathOptions, PathSet, SliderConfig, SliderOptions,
};
pub use carousel::controller::TransitionController;
pub use carousel::items::ItemSet;
pub use carousel::layout::{ITEM_VIEW_BOX, ListLayout, css_transform, item_svg_markup};
pub use carousel::plan::{
    INCOMING_MORPH_DELAY, INCOMING_MORPH_DURATION, INCOMING_MORPH_EASE, OUTGOING_MORPH_DURATION,
    OUTGOING_MORPH_EASE, SLIDE_DELAY, ScheduledEffect, StageCommand, plan_navigation,
    translate_percent,
};
pub use carousel::state::{CarouselState, Direction, MorphDirection, NavControls};
pub use foundation::core::{BezPath, Millis, PathEl, Point};
pub use foundation::error::{SlideFxError, SlideFxResult};
pub use stage::capability::{CompletionPolicy, ShapeMorpher, SlideMover};
pub use stage::clock::{Clock, ManualClock, SystemClock};
pub use stage::recording::{RecordingStage, StageEvent};
pub use stage::simulator::{ScriptStep, SimulationReport, Simulator, StepOutcome, parse_script};
