use crate::{
    animation::{ease::Ease, morph::MorphPhase, shape::Shape},
    carousel::{
        config::SliderConfig,
        state::{CarouselState, NavControls},
    },
    foundation::core::Millis,
};

/// Delay before the slide starts, as a fraction of `speed`.
pub const SLIDE_DELAY: f64 = 0.2;
/// Length of the outgoing morph, as a fraction of `speed`.
pub const OUTGOING_MORPH_DURATION: f64 = 0.5;
/// Delay before the incoming morph starts, as a fraction of `speed`.
pub const INCOMING_MORPH_DELAY: f64 = 0.5;
/// Length of the incoming morph, as a fraction of `speed`.
pub const INCOMING_MORPH_DURATION: f64 = 3.0;

/// Curve of the quick outgoing "pinch".
pub const OUTGOING_MORPH_EASE: Ease = Ease::EaseOut;
/// Curve of the slow incoming settle.
pub const INCOMING_MORPH_EASE: Ease = Ease::Elastic;

/// One side effect the controller hands to its environment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StageCommand {
    /// Animate an item path (cancel-and-replace).
    Morph(MorphPhase),
    /// Replace an item path immediately.
    SetShape {
        /// Item whose path is replaced.
        item_index: usize,
        /// New outline.
        shape: Shape,
    },
    /// Move the list and reconcile the arrows.
    Slide {
        /// Horizontal offset of the list, in percent of its own width.
        translate_percent: f64,
        /// Arrow state for the new index.
        nav: NavControls,
    },
}

/// A command due `offset` after the navigation started.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ScheduledEffect {
    /// Delay from navigation start.
    pub offset: Millis,
    /// What to do.
    pub command: StageCommand,
}

/// List offset that brings `index` into view.
pub fn translate_percent(index: usize, len: usize) -> f64 {
    if len == 0 {
        return 0.0;
    }
    let v = -1.0 * index as f64 * 100.0 / len as f64;
    // Avoid rendering "-0" at the first item.
    if v == 0.0 { 0.0 } else { v }
}

/// Effects of the navigation that produced `state`, in issue order.
///
/// `state` must be the freshly admitted state (busy, with `previous_index` being the item
/// that leaves). Effects sharing an offset must be issued in the returned order.
pub fn plan_navigation(
    state: &CarouselState,
    len: usize,
    config: &SliderConfig,
) -> Vec<ScheduledEffect> {
    let speed = config.speed;
    let curve = config.paths.curve_for(state.morph_direction()).clone();

    vec![
        ScheduledEffect {
            offset: Millis::ZERO,
            command: StageCommand::Morph(MorphPhase {
                item_index: state.previous_index(),
                target: curve.clone(),
                duration: speed.scale(OUTGOING_MORPH_DURATION),
                ease: OUTGOING_MORPH_EASE,
            }),
        },
        ScheduledEffect {
            offset: Millis::ZERO,
            command: StageCommand::SetShape {
                item_index: state.current_index(),
                shape: curve,
            },
        },
        ScheduledEffect {
            offset: speed.scale(SLIDE_DELAY),
            command: StageCommand::Slide {
                translate_percent: translate_percent(state.current_index(), len),
                nav: NavControls::for_index(state.current_index(), len),
            },
        },
        ScheduledEffect {
            offset: speed.scale(INCOMING_MORPH_DELAY),
            command: StageCommand::Morph(MorphPhase {
                item_index: state.current_index(),
                target: config.paths.rect.clone(),
                duration: speed.scale(INCOMING_MORPH_DURATION),
                ease: INCOMING_MORPH_EASE,
            }),
        },
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/plan.rs"]
mod tests;
