use boba_core::model::UserProfile;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MilestoneTileVm {
    pub icon: &'static str,
    pub label: &'static str,
    pub value: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointsProgressVm {
    pub heading: String,
    pub remaining_label: String,
    pub counter_label: String,
    pub percent_label: String,
    pub level_label: String,
    pub bar_percentage: f64,
    pub show_bubbles: bool,
    pub counter_on_bar: bool,
    pub milestones: Vec<MilestoneTileVm>,
}

#[must_use]
pub fn map_points_progress(profile: &UserProfile) -> PointsProgressVm {
    let progress = profile.progress();
    let level = profile.level();
    let badge = level.badge();
    let percentage = progress.percentage();

    PointsProgressVm {
        heading: format!("{badge} Progress to Next Level {badge}"),
        remaining_label: format!(
            "{} points until your next level up! 🚀",
            progress.remaining()
        ),
        counter_label: format!("{} / {}", progress.current(), progress.target()),
        percent_label: format!("{}% Complete", progress.rounded_percentage()),
        level_label: format!("🎯 Current: {}", level.title()),
        bar_percentage: percentage,
        show_bubbles: percentage > 20.0,
        counter_on_bar: percentage > 50.0,
        milestones: vec![
            MilestoneTileVm {
                icon: "🧋",
                label: "Drinks Ordered",
                value: progress.drinks_ordered(),
            },
            MilestoneTileVm {
                icon: "👥",
                label: "Friends Made",
                value: progress.friends_made(),
            },
            MilestoneTileVm {
                icon: "📝",
                label: "Reviews Written",
                value: progress.reviews_written(),
            },
            MilestoneTileVm {
                icon: "🎉",
                label: "Events Attended",
                value: progress.events_attended(),
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returning_member_labels() {
        let vm = map_points_progress(&UserProfile::returning_member("Boba Lover"));
        assert_eq!(vm.heading, "👑 Progress to Next Level 👑");
        assert_eq!(vm.remaining_label, "750 points until your next level up! 🚀");
        assert_eq!(vm.counter_label, "1250 / 2000");
        assert_eq!(vm.percent_label, "63% Complete");
        assert_eq!(vm.level_label, "🎯 Current: Bubble Tea Master");
        assert!(vm.show_bubbles);
        assert!(vm.counter_on_bar);
        assert_eq!(vm.milestones[0].value, 25);
    }

    #[test]
    fn new_member_bar_is_short() {
        let vm = map_points_progress(&UserProfile::new_member("Taro"));
        assert_eq!(vm.percent_label, "10% Complete");
        assert!(!vm.show_bubbles);
        assert!(!vm.counter_on_bar);
    }
}
