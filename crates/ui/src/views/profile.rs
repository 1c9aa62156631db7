use dioxus::prelude::*;

use boba_core::model::UserProfile;
use services::PointsLedger;

use crate::context::AppContext;
use crate::views::DailyRewardModal;
use crate::vm::map_points_progress;

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut ledger = use_signal(|| PointsLedger::new(ctx.initial_profile(), ctx.clock()));
    let mut show_rewards = use_signal(|| ctx.open_rewards_on_launch());

    let profile = ledger.read().profile();
    let username = profile.username().to_string();
    let streak = profile.streak_days();
    let points = profile.points();

    rsx! {
        div { class: "page profile-page",
            header { class: "view-header",
                h1 { class: "page-title", "🧋 {username} 🧋" }
                p { class: "view-subtitle", "🔥 {streak} day streak · {points} pts" }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| show_rewards.set(true),
                    "🎁 Daily Rewards"
                }
            }
            PointsProgressCard { profile: profile.clone() }
            if show_rewards() {
                DailyRewardModal {
                    on_close: move |_: ()| show_rewards.set(false),
                    on_earn_points: move |points: u32| ledger.write().credit(points),
                }
            }
        }
    }
}

#[component]
pub fn PointsProgressCard(profile: UserProfile) -> Element {
    let vm = map_points_progress(&profile);
    let bar_style = format!("width: {:.1}%", vm.bar_percentage);
    let counter_class = if vm.counter_on_bar {
        "progress-counter progress-counter--on-bar"
    } else {
        "progress-counter"
    };
    let tiles = vm.milestones.iter().map(|tile| {
        rsx! {
            div { key: "{tile.label}", class: "milestone",
                div { class: "milestone-icon", "{tile.icon}" }
                div { class: "milestone-label", "{tile.label}" }
                div { class: "milestone-value", "{tile.value}" }
            }
        }
    });

    rsx! {
        div { class: "card points-progress",
            div { class: "points-progress-header",
                h3 { class: "section-title", "{vm.heading}" }
                p { class: "points-remaining", "{vm.remaining_label}" }
            }
            div { class: "progress-container",
                div { class: "progress-bar", style: "{bar_style}",
                    if vm.show_bubbles {
                        for i in 0..5 {
                            span { key: "{i}", class: "progress-bubble" }
                        }
                    }
                }
                div { class: "{counter_class}", "{vm.counter_label}" }
            }
            div { class: "points-progress-footer",
                span { "{vm.level_label}" }
                span { "{vm.percent_label}" }
            }
            div { class: "milestones", {tiles} }
        }
    }
}
