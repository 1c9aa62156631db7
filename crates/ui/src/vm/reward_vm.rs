use boba_core::model::{Plan, QuizItem, RewardState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardOptionVm {
    pub plan: Plan,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub points_label: String,
    pub is_active: bool,
    pub is_done: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizResultVm {
    pub correct: bool,
    pub message: String,
}

impl QuizResultVm {
    #[must_use]
    pub fn css_class(&self) -> &'static str {
        if self.correct {
            "reward-quiz-result reward-quiz-result--correct"
        } else {
            "reward-quiz-result reward-quiz-result--wrong"
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardModalVm {
    pub options: Vec<RewardOptionVm>,
    pub show_check_in_button: bool,
    /// Question and options are only offered while the quiz is unanswered.
    pub quiz_question: Option<String>,
    pub quiz_options: Vec<String>,
    pub quiz_result: Option<QuizResultVm>,
}

#[must_use]
pub fn map_reward_modal(state: RewardState, quiz: &QuizItem) -> RewardModalVm {
    let options = Plan::ALL
        .into_iter()
        .map(|plan| map_reward_option(plan, state))
        .collect();

    let (quiz_question, quiz_options) = if state == RewardState::QuizPending {
        (Some(quiz.question().to_string()), quiz.options().to_vec())
    } else {
        (None, Vec::new())
    };

    let quiz_result = match state {
        RewardState::QuizAnswered { correct: true } => Some(QuizResultVm {
            correct: true,
            message: format!("🎉 Correct! +{} points earned!", Plan::Quiz.award_points()),
        }),
        RewardState::QuizAnswered { correct: false } => Some(QuizResultVm {
            correct: false,
            message: format!("😅 The answer was: {}", quiz.correct_option()),
        }),
        _ => None,
    };

    RewardModalVm {
        options,
        show_check_in_button: state == RewardState::CheckInPending,
        quiz_question,
        quiz_options,
        quiz_result,
    }
}

fn map_reward_option(plan: Plan, state: RewardState) -> RewardOptionVm {
    let is_active = state.plan() == plan;
    let is_done = is_active && state.is_completed();

    let (icon, description) = match (plan, is_active.then_some(state)) {
        (Plan::CheckIn, Some(RewardState::CheckedIn)) => ("✅", "You earned 2 points today!"),
        (Plan::CheckIn, _) => ("📅", "Tap to check in and earn points"),
        (Plan::Quiz, Some(RewardState::QuizAnswered { correct: true })) => {
            ("✅", "Correct! You earned 5 points!")
        }
        (Plan::Quiz, Some(RewardState::QuizAnswered { correct: false })) => {
            ("✅", "Wrong answer, try again tomorrow!")
        }
        (Plan::Quiz, _) => ("🧠", "Test your boba knowledge"),
    };

    RewardOptionVm {
        plan,
        icon,
        title: plan.title(),
        description,
        points_label: format!("+{} pts", plan.award_points()),
        is_active,
        is_done,
    }
}
