use std::collections::BTreeMap;

use crate::{
    carousel::{
        config::SliderConfig,
        items::ItemSet,
        plan::{StageCommand, plan_navigation},
        state::{CarouselState, Direction, NavControls},
    },
    foundation::core::Millis,
    stage::{
        capability::{CompletionPolicy, ShapeMorpher, SlideMover},
        clock::Clock,
    },
};

/// Owns the carousel state and drives the slide/morph choreography.
///
/// The controller is single-threaded and event-driven. The host forwards three kinds of
/// events to it:
///
/// - navigation requests via [`navigate`](Self::navigate),
/// - timer ticks via [`poll`](Self::poll), which fires every scheduled effect that is due on
///   the injected [`Clock`] (use [`next_deadline`](Self::next_deadline) to sleep precisely),
/// - the environment's transition-end notification via
///   [`on_transition_end`](Self::on_transition_end).
///
/// At most one navigation is in flight: requests made while busy, or past either end of the
/// item list, are dropped and reported as `false`. Scheduled effects are never cancelled,
/// even when a later navigation starts before they fire.
pub struct TransitionController<T, S, M, C> {
    items: ItemSet<T>,
    config: SliderConfig,
    policy: CompletionPolicy,
    state: CarouselState,
    nav: Option<NavControls>,
    awaiting_transition_end: bool,
    timers: BTreeMap<(Millis, u64), StageCommand>,
    next_seq: u64,
    slide: S,
    morph: M,
    clock: C,
}

impl<T, S, M, C> TransitionController<T, S, M, C>
where
    S: SlideMover,
    M: ShapeMorpher,
    C: Clock,
{
    /// Build an idle controller showing the first item.
    ///
    /// Arrows exist only when there are at least two items; the "previous" arrow starts
    /// disabled.
    pub fn new(
        items: ItemSet<T>,
        config: SliderConfig,
        slide: S,
        morph: M,
        clock: C,
        policy: CompletionPolicy,
    ) -> Self {
        let nav = (items.len() > 1).then(|| NavControls::for_index(0, items.len()));
        tracing::debug!(items = items.len(), speed = %config.speed, ?policy, "carousel ready");
        Self {
            items,
            config,
            policy,
            state: CarouselState::new(),
            nav,
            awaiting_transition_end: false,
            timers: BTreeMap::new(),
            next_seq: 0,
            slide,
            morph,
            clock,
        }
    }

    /// Request a move to the neighbouring item.
    ///
    /// Returns `false`, without touching any state, when a navigation is already in flight or
    /// `dir` points past the first/last item. Overdue timers are fired first so the request
    /// is judged against what the environment already shows.
    #[tracing::instrument(
        level = "debug",
        skip(self),
        fields(current = self.state.current_index())
    )]
    pub fn navigate(&mut self, dir: Direction) -> bool {
        self.poll();

        let Some(next) = self.state.admit(dir, self.items.len()) else {
            tracing::debug!(busy = self.state.is_busy(), "navigation rejected");
            return false;
        };
        self.state = next;
        self.awaiting_transition_end = false;

        let start = self.clock.now();
        let plan = plan_navigation(&self.state, self.items.len(), &self.config);
        tracing::debug!(
            from = self.state.previous_index(),
            to = self.state.current_index(),
            morph = ?self.state.morph_direction(),
            "navigation accepted"
        );
        for effect in plan {
            if effect.offset == Millis::ZERO {
                self.execute(effect.command);
            } else {
                self.schedule(start.saturating_add(effect.offset), effect.command);
            }
        }
        true
    }

    /// Fire every scheduled effect due at the clock's current time, in due order.
    ///
    /// Returns the number of effects fired.
    pub fn poll(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;
        while let Some(entry) = self.timers.first_entry() {
            if entry.key().0 > now {
                break;
            }
            let ((due, seq), command) = entry.remove_entry();
            tracing::trace!(due = %due, seq, "timer fired");
            self.execute(command);
            fired += 1;
        }
        fired
    }

    /// The environment finished the slide transition.
    ///
    /// Clears the busy flag when a slide is actually in progress; stray notifications are
    /// ignored and reported as `false`.
    pub fn on_transition_end(&mut self) -> bool {
        if !self.state.is_busy() || !self.awaiting_transition_end {
            tracing::warn!(
                busy = self.state.is_busy(),
                "transition end without a slide in progress"
            );
            return false;
        }
        self.settle();
        true
    }

    /// Due time of the earliest scheduled effect.
    pub fn next_deadline(&self) -> Option<Millis> {
        self.timers.keys().next().map(|(due, _)| *due)
    }

    /// Scheduled effects with their absolute due times, in firing order.
    pub fn pending_effects(&self) -> impl Iterator<Item = (Millis, &StageCommand)> + '_ {
        self.timers.iter().map(|((due, _), cmd)| (*due, cmd))
    }

    /// Current navigation state.
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    /// A navigation is in flight.
    pub fn is_busy(&self) -> bool {
        self.state.is_busy()
    }

    /// Arrow state as last shown; `None` for single-item carousels.
    pub fn nav_controls(&self) -> Option<NavControls> {
        self.nav
    }

    /// The carousel items.
    pub fn items(&self) -> &ItemSet<T> {
        &self.items
    }

    /// Item currently shown (or being moved to).
    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.state.current_index())
    }

    /// Resolved configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Completion policy chosen at construction.
    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// The injected slide mover.
    pub fn slide_mover(&self) -> &S {
        &self.slide
    }

    /// The injected shape morpher.
    pub fn shape_morpher(&self) -> &M {
        &self.morph
    }

    /// The injected clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn schedule(&mut self, due: Millis, command: StageCommand) {
        let seq = self.next_seq;
        self.next_seq += 1;
        tracing::trace!(due = %due, seq, "timer scheduled");
        self.timers.insert((due, seq), command);
    }

    fn execute(&mut self, command: StageCommand) {
        match command {
            StageCommand::Morph(phase) => self.morph.animate(&phase),
            StageCommand::SetShape { item_index, shape } => {
                self.morph.set_shape(item_index, &shape);
            }
            StageCommand::Slide {
                translate_percent,
                nav,
            } => {
                self.slide.slide_to(translate_percent, nav);
                if self.nav.is_some() {
                    self.nav = Some(nav);
                }
                match self.policy {
                    CompletionPolicy::TransitionEnd => self.awaiting_transition_end = true,
                    CompletionPolicy::Immediate => self.settle(),
                }
            }
        }
    }

    fn settle(&mut self) {
        self.state = self.state.settle();
        self.awaiting_transition_end = false;
        tracing::debug!(current = self.state.current_index(), "navigation settled");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;
