use std::time::Duration;

use survey_core::model::Category;
use survey_core::scoring::ScoreCard;

/// Fixed delays of the results timeline.
///
/// `action_plan`, `bonus` and `call_to_action` are offsets from the moment the
/// score completes, not from each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PresenterTimings {
    pub count_tick: Duration,
    pub settle: Duration,
    pub action_plan: Duration,
    pub bonus: Duration,
    pub call_to_action: Duration,
}

impl Default for PresenterTimings {
    fn default() -> Self {
        Self {
            count_tick: Duration::from_millis(50),
            settle: Duration::from_millis(500),
            action_plan: Duration::from_millis(1500),
            bonus: Duration::from_millis(3000),
            call_to_action: Duration::from_millis(4500),
        }
    }
}

/// Sections revealed after the score completes, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealStage {
    Category,
    ActionPlan,
    Bonus,
    CallToAction,
}

impl RevealStage {
    const fn next(self) -> Option<Self> {
        match self {
            Self::Category => Some(Self::ActionPlan),
            Self::ActionPlan => Some(Self::Bonus),
            Self::Bonus => Some(Self::CallToAction),
            Self::CallToAction => None,
        }
    }

    const fn offset(self, timings: &PresenterTimings) -> Duration {
        match self {
            Self::Category => Duration::ZERO,
            Self::ActionPlan => timings.action_plan,
            Self::Bonus => timings.bonus,
            Self::CallToAction => timings.call_to_action,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PresenterPhase {
    Scoring { displayed: u32 },
    Settling,
    ScoreComplete { stage: RevealStage },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BonusPanel {
    #[default]
    Collapsed,
    Expanded,
}

impl BonusPanel {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Collapsed => Self::Expanded,
            Self::Expanded => Self::Collapsed,
        }
    }

    #[must_use]
    pub const fn is_expanded(self) -> bool {
        matches!(self, Self::Expanded)
    }
}

/// Timed state machine behind the results screen.
///
/// The presenter never sleeps itself: a driver asks for [`Self::next_delay`],
/// waits that long and calls [`Self::fire`]. Dropping the driver stops the
/// timeline wherever it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsPresenter {
    score: ScoreCard,
    target: u32,
    phase: PresenterPhase,
    bonus: BonusPanel,
    timings: PresenterTimings,
}

impl ResultsPresenter {
    #[must_use]
    pub fn new(score: ScoreCard, timings: PresenterTimings) -> Self {
        Self {
            score,
            target: score.display_target(),
            phase: PresenterPhase::Scoring { displayed: 0 },
            bonus: BonusPanel::Collapsed,
            timings,
        }
    }

    #[must_use]
    pub fn score(&self) -> ScoreCard {
        self.score
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.score.category
    }

    #[must_use]
    pub fn phase(&self) -> PresenterPhase {
        self.phase
    }

    #[must_use]
    pub fn bonus(&self) -> BonusPanel {
        self.bonus
    }

    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Value currently shown by the counter.
    #[must_use]
    pub fn displayed(&self) -> u32 {
        match self.phase {
            PresenterPhase::Scoring { displayed } => displayed,
            PresenterPhase::Settling | PresenterPhase::ScoreComplete { .. } => self.target,
        }
    }

    #[must_use]
    pub fn is_score_complete(&self) -> bool {
        matches!(self.phase, PresenterPhase::ScoreComplete { .. })
    }

    /// True once `stage` (or a later one) has been revealed.
    #[must_use]
    pub fn shows(&self, stage: RevealStage) -> bool {
        match self.phase {
            PresenterPhase::ScoreComplete { stage: current } => current >= stage,
            PresenterPhase::Scoring { .. } | PresenterPhase::Settling => false,
        }
    }

    /// Time until the next transition, or `None` when the timeline is finished.
    #[must_use]
    pub fn next_delay(&self) -> Option<Duration> {
        match self.phase {
            PresenterPhase::Scoring { .. } => Some(self.timings.count_tick),
            PresenterPhase::Settling => Some(self.timings.settle),
            PresenterPhase::ScoreComplete { stage } => stage.next().map(|next| {
                next.offset(&self.timings)
                    .saturating_sub(stage.offset(&self.timings))
            }),
        }
    }

    /// Apply the transition scheduled by [`Self::next_delay`].
    pub fn fire(&mut self) {
        self.phase = match self.phase {
            PresenterPhase::Scoring { .. } if self.target == 0 => PresenterPhase::ScoreComplete {
                stage: RevealStage::Category,
            },
            PresenterPhase::Scoring { displayed } => {
                let displayed = displayed.saturating_add(1).min(self.target);
                if displayed == self.target {
                    PresenterPhase::Settling
                } else {
                    PresenterPhase::Scoring { displayed }
                }
            }
            PresenterPhase::Settling => PresenterPhase::ScoreComplete {
                stage: RevealStage::Category,
            },
            PresenterPhase::ScoreComplete { stage } => PresenterPhase::ScoreComplete {
                stage: stage.next().unwrap_or(stage),
            },
        };
    }

    pub fn toggle_bonus(&mut self) {
        self.bonus = self.bonus.toggled();
    }
}
