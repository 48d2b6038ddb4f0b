use crate::{
    animation::{morph::MorphPhase, shape::Shape},
    carousel::state::NavControls,
};

/// Positional half of the environment: moves the item list.
///
/// Completion of the resulting transition is reported back to the controller through
/// `TransitionController::on_transition_end`, when the environment supports it.
pub trait SlideMover {
    /// Apply the list offset and the arrow state at the same instant.
    fn slide_to(&mut self, translate_percent: f64, nav: NavControls);
}

/// Shape half of the environment: animates item outlines.
pub trait ShapeMorpher {
    /// Stop any running morph on `phase.item_index` and animate toward `phase.target`.
    fn animate(&mut self, phase: &MorphPhase);

    /// Replace the outline of `item_index` without animating.
    fn set_shape(&mut self, item_index: usize, shape: &Shape);
}

impl<T: SlideMover + ?Sized> SlideMover for &mut T {
    fn slide_to(&mut self, translate_percent: f64, nav: NavControls) {
        (**self).slide_to(translate_percent, nav);
    }
}

impl<T: ShapeMorpher + ?Sized> ShapeMorpher for &mut T {
    fn animate(&mut self, phase: &MorphPhase) {
        (**self).animate(phase);
    }

    fn set_shape(&mut self, item_index: usize, shape: &Shape) {
        (**self).set_shape(item_index, shape);
    }
}

/// Whether the environment reports the end of the slide transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionPolicy {
    /// Stay busy until `on_transition_end` is called.
    #[default]
    TransitionEnd,
    /// No completion events: clear busy right after the slide command.
    Immediate,
}
