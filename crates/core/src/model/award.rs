use crate::model::Plan;

/// Outbound notification that a qualifying daily action earned points.
///
/// Only `points` crosses the host callback boundary; `plan` is kept for
/// logging and history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AwardEvent {
    plan: Plan,
    points: u32,
}

impl AwardEvent {
    #[must_use]
    pub fn for_plan(plan: Plan) -> Self {
        Self {
            plan,
            points: plan.award_points(),
        }
    }

    #[must_use]
    pub fn plan(&self) -> Plan {
        self.plan
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }
}
