/// A navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Move to the previous item.
    Prev,
    /// Move to the next item.
    Next,
}

impl Direction {
    /// Map a DOM `keyCode`: 37 (left arrow) is `Prev`, 39 (right arrow) is `Next`.
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            37 => Some(Self::Prev),
            39 => Some(Self::Next),
            _ => None,
        }
    }

    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Self::Prev),
            "ArrowRight" | "Right" => Some(Self::Next),
            _ => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Prev => "prev",
            Self::Next => "next",
        })
    }
}

/// Which way the intermediate curved shape bows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MorphDirection {
    /// Target index is lower than the one being left.
    Left,
    /// Target index is higher than the one being left.
    Right,
}

impl MorphDirection {
    /// `Right` when moving toward a higher index, `Left` otherwise.
    pub fn between(previous_index: usize, current_index: usize) -> Self {
        if previous_index < current_index {
            Self::Right
        } else {
            Self::Left
        }
    }
}

/// Disabled flags of the two navigation arrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct NavControls {
    /// The "previous" arrow is disabled.
    pub prev_disabled: bool,
    /// The "next" arrow is disabled.
    pub next_disabled: bool,
}

impl NavControls {
    /// Arrow state for `current_index` in a carousel of `len` items.
    ///
    /// Only meaningful for `len >= 2`; single-item carousels have no arrows.
    pub fn for_index(current_index: usize, len: usize) -> Self {
        let last = len.saturating_sub(1);
        match current_index {
            0 => Self {
                prev_disabled: true,
                next_disabled: false,
            },
            i if i == last => Self {
                prev_disabled: false,
                next_disabled: true,
            },
            _ => Self {
                prev_disabled: false,
                next_disabled: false,
            },
        }
    }
}

/// Mutable navigation state owned by the controller.
///
/// Transitions are pure: [`CarouselState::admit`] and [`CarouselState::settle`] return the
/// next state rather than mutating in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct CarouselState {
    current_index: usize,
    previous_index: usize,
    busy: bool,
    active_direction: Option<Direction>,
}

impl CarouselState {
    /// Initial state: both indices at 0, idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the item being shown (or moved to).
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Index of the item shown before the last accepted navigation.
    pub fn previous_index(&self) -> usize {
        self.previous_index
    }

    /// A navigation is in flight.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Direction of the in-flight navigation; `None` while idle.
    pub fn active_direction(&self) -> Option<Direction> {
        self.active_direction
    }

    /// Bow direction of the last accepted navigation.
    pub fn morph_direction(&self) -> MorphDirection {
        MorphDirection::between(self.previous_index, self.current_index)
    }

    /// Admission control for `dir` in a carousel of `len` items.
    ///
    /// Returns `None` while busy or when `dir` would leave `[0, len - 1]`.
    pub fn admit(&self, dir: Direction, len: usize) -> Option<Self> {
        if self.busy {
            return None;
        }
        let current_index = match dir {
            Direction::Next if self.current_index + 1 < len => self.current_index + 1,
            Direction::Prev if self.current_index > 0 => self.current_index - 1,
            _ => return None,
        };
        Some(Self {
            current_index,
            previous_index: self.current_index,
            busy: true,
            active_direction: Some(dir),
        })
    }

    /// Leave the busy window, keeping both indices.
    pub fn settle(&self) -> Self {
        Self {
            busy: false,
            active_direction: None,
            ..*self
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/state.rs"]
mod tests;
