/// Navigation request from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepChange {
    Moved { from: usize, to: usize },
    /// The candidate step was out of bounds; nothing changed.
    Ignored,
}

/// One-based position in a survey of `question_count` questions.
///
/// Steps `1..=question_count` show questions; step `question_count + 1` is the
/// results phase. Out-of-range moves are dropped without error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepController {
    current: usize,
    question_count: usize,
}

impl StepController {
    #[must_use]
    pub fn new(question_count: usize) -> Self {
        Self {
            current: 1,
            question_count,
        }
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Number of steps including the results step.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.question_count + 1
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current == 1
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current == self.question_count
    }

    #[must_use]
    pub fn is_results(&self) -> bool {
        self.current == self.total_steps()
    }

    /// Zero-based catalog index of the current question, `None` in the results phase.
    #[must_use]
    pub fn question_index(&self) -> Option<usize> {
        if self.is_results() {
            None
        } else {
            Some(self.current - 1)
        }
    }

    pub fn advance(&mut self, direction: Direction) -> StepChange {
        let candidate = match direction {
            Direction::Next => self.current.checked_add(1),
            Direction::Prev => self.current.checked_sub(1),
        };
        match candidate {
            Some(to) if (1..=self.total_steps()).contains(&to) => {
                let from = self.current;
                self.current = to;
                StepChange::Moved { from, to }
            }
            _ => StepChange::Ignored,
        }
    }
}
