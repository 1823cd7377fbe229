//! Static feedback shown on the results screen.

use crate::model::category::Category;

pub const SCORE_HEADING: &str = "Your Personal Impact Score";
pub const SCORE_RANGE_HINT: &str = "Total Score Range: 10-50";

impl Category {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Category::Dormant => "Dormant Potential",
            Category::Growing => "Growing Influence",
            Category::High => "High-Impact Leader",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Category::Dormant => {
                "You have influence in you, but it's not activated consistently."
            }
            Category::Growing => "You're aware of your influence and are building momentum.",
            Category::High => "You're leading intentionally and living with purpose.",
        }
    }

    /// Three tailored next steps for the band.
    #[must_use]
    pub fn action_plan(self) -> &'static [&'static str] {
        match self {
            Category::Dormant => &[
                "Clarify Your Mission – Write a personal mission statement.",
                "Start Small – Choose one habit that aligns with your values and commit for 7 days.",
                "Find a Mentor – Seek someone to guide and challenge you.",
            ],
            Category::Growing => &[
                "Document Your Growth Plan – Set a goal in 3 areas: Personal, Relational, Professional.",
                "Build Your Circle – Surround yourself with 2-3 growth-minded individuals.",
                "Share Your Story – Post or journal one lesson weekly to reinforce your voice.",
            ],
            Category::High => &[
                "Mentor Others – Invest weekly in someone coming behind you.",
                "Expand Your Platform – Speak, write, or serve in a new space.",
                "Audit & Adjust – Quarterly reflection on goals, growth, and gaps.",
            ],
        }
    }
}

/// One time-of-day block of the bonus plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusSection {
    pub label: &'static str,
    pub items: &'static [&'static str],
}

/// Collapsible bonus content, identical for every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusPlan {
    pub title: &'static str,
    pub summary: &'static str,
    pub sections: &'static [BonusSection],
}

pub const BONUS_PLAN: BonusPlan = BonusPlan {
    title: "BONUS: 1-Day Influence Accelerator",
    summary: "A quick-start plan to boost your influence in 24 hours.",
    sections: &[
        BonusSection {
            label: "Morning",
            items: &[
                "Reflect on your values and write down your personal mission.",
                "Text or call 3 people and encourage them specifically.",
            ],
        },
        BonusSection {
            label: "Afternoon",
            items: &[
                "Share a short story or lesson online (or journal it).",
                "Evaluate how you spend your time – cut one thing that drains your focus.",
            ],
        },
        BonusSection {
            label: "Evening",
            items: &[
                "Schedule a growth activity for the next 7 days.",
                "Write 3 things you want to be known for.",
            ],
        },
    ],
};

/// Closing prompt and external link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub prompt: &'static str,
    pub label: &'static str,
    pub url: &'static str,
}

pub const CALL_TO_ACTION: CallToAction = CallToAction {
    prompt: "Ready to level up your leadership?",
    label: "Join Focus Friday Email",
    url: "https://learn.liveprosperous.com/pages/focus-fridays-signup-form",
};
