use crate::{
    carousel::{
        config::SliderConfig,
        controller::TransitionController,
        items::ItemSet,
        state::{CarouselState, Direction, NavControls},
    },
    foundation::{
        core::{BezPath, Millis},
        error::{SlideFxError, SlideFxResult},
    },
    stage::{
        capability::CompletionPolicy,
        clock::{Clock, ManualClock},
        recording::{RecordingStage, StageEvent},
    },
};

/// One step of a navigation script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "step", content = "arg", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Request a navigation.
    Navigate(Direction),
    /// Let virtual time pass, firing timers and automatic completions on the way.
    Wait(Millis),
    /// Deliver a transition-end notification now.
    TransitionEnd,
}

impl std::str::FromStr for ScriptStep {
    type Err = SlideFxError;

    fn from_str(s: &str) -> SlideFxResult<Self> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "next" | "n" | "right" => Ok(Self::Navigate(Direction::Next)),
            "prev" | "p" | "left" => Ok(Self::Navigate(Direction::Prev)),
            "end" => Ok(Self::TransitionEnd),
            other => match other.strip_prefix("wait:") {
                Some(ms) => ms
                    .trim()
                    .parse::<u64>()
                    .map(|ms| Self::Wait(Millis(ms)))
                    .map_err(|_| SlideFxError::validation(format!("invalid wait '{other}'"))),
                None => Err(SlideFxError::validation(format!(
                    "unknown script step '{other}'"
                ))),
            },
        }
    }
}

/// Parse a comma- or whitespace-separated script such as `next, wait:600, prev`.
pub fn parse_script(script: &str) -> SlideFxResult<Vec<ScriptStep>> {
    script
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect()
}

/// Outcome of one script step.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct StepOutcome {
    /// Virtual time when the step ran (after it, for waits).
    pub at: Millis,
    /// The step.
    pub step: ScriptStep,
    /// Navigation accepted / completion consumed; always `true` for waits.
    pub accepted: bool,
    /// Current index after the step.
    pub current_index: usize,
    /// Busy flag after the step.
    pub busy: bool,
}

/// Everything a simulation produced.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SimulationReport {
    /// Per-step outcomes.
    pub steps: Vec<StepOutcome>,
    /// Stage commands in the order they were received.
    pub events: Vec<StageEvent>,
    /// State at the end of the run.
    pub final_state: CarouselState,
    /// Arrow state at the end of the run.
    pub nav: Option<NavControls>,
}

/// Runs a controller against a [`RecordingStage`] on a virtual clock.
///
/// With `auto_transition_end` set (and the `TransitionEnd` policy), a completion is delivered
/// `speed` after every slide, the way a CSS transition of that duration would end.
pub struct Simulator {
    controller: TransitionController<usize, RecordingStage, RecordingStage, ManualClock>,
    stage: RecordingStage,
    clock: ManualClock,
    auto_transition_end: bool,
    pending_end: Option<Millis>,
    slides_seen: usize,
    steps: Vec<StepOutcome>,
}

impl Simulator {
    /// Simulator over `len` items.
    pub fn new(
        len: usize,
        config: SliderConfig,
        policy: CompletionPolicy,
        auto_transition_end: bool,
    ) -> SlideFxResult<Self> {
        let items = ItemSet::new((0..len).collect())?;
        let clock = ManualClock::new();
        let stage = RecordingStage::new(len, &config.paths.rect, clock.clone());
        let controller = TransitionController::new(
            items,
            config,
            stage.clone(),
            stage.clone(),
            clock.clone(),
            policy,
        );
        Ok(Self {
            controller,
            stage,
            clock,
            auto_transition_end: auto_transition_end && policy == CompletionPolicy::TransitionEnd,
            pending_end: None,
            slides_seen: 0,
            steps: Vec::new(),
        })
    }

    /// Run one step.
    pub fn step(&mut self, step: ScriptStep) -> bool {
        let accepted = match step {
            ScriptStep::Navigate(dir) => {
                let ok = self.controller.navigate(dir);
                self.track_slides();
                ok
            }
            ScriptStep::Wait(by) => {
                self.advance_to(self.clock.now().saturating_add(by));
                true
            }
            ScriptStep::TransitionEnd => {
                self.pending_end = None;
                self.controller.on_transition_end()
            }
        };
        let state = self.controller.state();
        self.steps.push(StepOutcome {
            at: self.clock.now(),
            step,
            accepted,
            current_index: state.current_index(),
            busy: state.is_busy(),
        });
        accepted
    }

    /// Run a whole script.
    pub fn run(&mut self, steps: &[ScriptStep]) {
        for step in steps {
            self.step(*step);
        }
    }

    /// Advance virtual time to `target`, firing every timer and completion due on the way.
    pub fn advance_to(&mut self, target: Millis) {
        loop {
            let next = [self.controller.next_deadline(), self.pending_end]
                .into_iter()
                .flatten()
                .filter(|t| *t <= target)
                .min();
            let Some(t) = next else { break };
            self.clock.set(t);
            self.controller.poll();
            self.track_slides();
            if self.pending_end.is_some_and(|end| end <= self.clock.now()) {
                self.pending_end = None;
                self.controller.on_transition_end();
            }
        }
        self.clock.set(target);
        self.controller.poll();
        self.track_slides();
    }

    /// The controller under simulation.
    pub fn controller(
        &self,
    ) -> &TransitionController<usize, RecordingStage, RecordingStage, ManualClock> {
        &self.controller
    }

    /// The recording environment.
    pub fn stage(&self) -> &RecordingStage {
        &self.stage
    }

    /// Current virtual time.
    pub fn now(&self) -> Millis {
        self.clock.now()
    }

    /// Outline of every item at the current virtual time.
    pub fn item_paths(&self) -> Vec<BezPath> {
        (0..self.controller.items().len())
            .filter_map(|i| self.stage.item_path(i))
            .collect()
    }

    /// Snapshot of the run so far.
    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            steps: self.steps.clone(),
            events: self.stage.events(),
            final_state: *self.controller.state(),
            nav: self.controller.nav_controls(),
        }
    }

    fn track_slides(&mut self) {
        if !self.auto_transition_end {
            return;
        }
        let slides = self.stage.slide_count();
        if slides > self.slides_seen {
            self.slides_seen = slides;
            if let Some(at) = self.stage.last_slide_at() {
                self.pending_end = Some(at.saturating_add(self.controller.config().speed));
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/stage/simulator.rs"]
mod tests;
