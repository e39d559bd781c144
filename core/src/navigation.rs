//! Slide navigation state machine.
//!
//! States are the indices `0..len`; the four operations are the only
//! transitions. `Direction` is a rendering hint for the transition
//! animation and carries no correctness weight.

use serde::{Deserialize, Serialize};

/// Direction of the last movement, used to pick the enter/exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// What `next`/`previous` do at the edge of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Stop at the first/last slide.
    #[default]
    Clamp,
    /// Wrap around with modulo arithmetic.
    Wrap,
}

/// A normalized navigation request from any input adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
}

/// Tracks the visible slide.
///
/// `len` is fixed and at least 1 for the lifetime of the session; the
/// deck loader guarantees a non-empty deck. `current` stays within
/// `0..len` after every operation.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: usize,
    len: usize,
    boundary: BoundaryMode,
    last_direction: Direction,
}

impl Navigator {
    pub fn new(len: usize, boundary: BoundaryMode) -> Self {
        Self {
            current: 0,
            len: len.max(1),
            boundary,
            last_direction: Direction::Forward,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.len
    }

    pub fn last_direction(&self) -> Direction {
        self.last_direction
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.len
    }

    /// Move one slide forward. Under `Clamp` the last slide is the state
    /// from which this is a no-op; the direction hint is only updated
    /// when the index actually moves.
    pub fn next(&mut self) {
        match self.boundary {
            BoundaryMode::Clamp => {
                if self.current + 1 < self.len {
                    self.last_direction = Direction::Forward;
                    self.current += 1;
                }
            }
            BoundaryMode::Wrap => {
                self.last_direction = Direction::Forward;
                self.current = (self.current + 1) % self.len;
            }
        }
    }

    pub fn previous(&mut self) {
        match self.boundary {
            BoundaryMode::Clamp => {
                if self.current > 0 {
                    self.last_direction = Direction::Backward;
                    self.current -= 1;
                }
            }
            BoundaryMode::Wrap => {
                self.last_direction = Direction::Backward;
                self.current = (self.current + self.len - 1) % self.len;
            }
        }
    }

    pub fn go_to_first(&mut self) {
        self.last_direction = Direction::Backward;
        self.current = 0;
    }

    pub fn go_to_last(&mut self) {
        self.last_direction = Direction::Forward;
        self.current = self.len - 1;
    }

    pub fn apply(&mut self, command: NavCommand) {
        match command {
            NavCommand::Next => self.next(),
            NavCommand::Previous => self.previous(),
            NavCommand::First => self.go_to_first(),
            NavCommand::Last => self.go_to_last(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_stays_in_bounds_for_any_sequence() {
        let mut nav = Navigator::new(4, BoundaryMode::Clamp);
        let commands = [
            NavCommand::Previous,
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Next,
            NavCommand::Last,
            NavCommand::Next,
            NavCommand::First,
            NavCommand::Previous,
        ];
        for command in commands {
            nav.apply(command);
            assert!(nav.current() < nav.slide_count());
        }
    }

    #[test]
    fn test_single_slide_deck_never_moves() {
        let mut nav = Navigator::new(1, BoundaryMode::Clamp);
        nav.next();
        nav.previous();
        nav.go_to_last();
        assert_eq!(nav.current(), 0);

        let mut wrapping = Navigator::new(1, BoundaryMode::Wrap);
        wrapping.next();
        wrapping.previous();
        assert_eq!(wrapping.current(), 0);
    }

    #[test]
    fn test_first_then_previous_is_idempotent_at_boundary() {
        let mut nav = Navigator::new(5, BoundaryMode::Clamp);
        nav.go_to_last();
        nav.go_to_first();
        nav.previous();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_last_then_next_is_idempotent_at_boundary() {
        let mut nav = Navigator::new(5, BoundaryMode::Clamp);
        nav.go_to_last();
        nav.next();
        assert_eq!(nav.current(), 4);
    }

    #[test]
    fn test_clamped_noop_leaves_direction_untouched() {
        let mut nav = Navigator::new(3, BoundaryMode::Clamp);
        nav.next();
        nav.previous();
        assert_eq!(nav.last_direction(), Direction::Backward);
        // previous() at index 0 is a no-op and must not flip the hint
        nav.next();
        assert_eq!(nav.last_direction(), Direction::Forward);
        nav.go_to_last();
        nav.next();
        assert_eq!(nav.last_direction(), Direction::Forward);
    }

    #[test]
    fn test_wrap_mode_uses_modulo_arithmetic() {
        let mut nav = Navigator::new(3, BoundaryMode::Wrap);
        nav.previous();
        assert_eq!(nav.current(), 2);
        nav.next();
        assert_eq!(nav.current(), 0);
        nav.go_to_last();
        nav.next();
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn test_three_slide_walkthrough() {
        let mut nav = Navigator::new(3, BoundaryMode::Clamp);
        assert_eq!(nav.current(), 0);

        nav.next();
        assert_eq!(nav.current(), 1);
        assert_eq!(nav.last_direction(), Direction::Forward);

        nav.previous();
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.last_direction(), Direction::Backward);

        nav.go_to_last();
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.last_direction(), Direction::Forward);

        nav.next();
        assert_eq!(nav.current(), 2);
    }
}
