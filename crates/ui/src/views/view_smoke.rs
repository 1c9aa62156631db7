use boba_core::model::UserProfile;

use boba_core::model::Plan;

use super::reward::RewardIntent;
use super::test_harness::{ViewKind, setup_view_harness};

#[test]
fn reward_modal_smoke_renders_check_in_plan() {
    let mut harness = setup_view_harness(
        ViewKind::RewardModal,
        UserProfile::returning_member("Boba Lover"),
        false,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Daily Rewards"), "missing title in {html}");
    assert!(html.contains("Tap to check in and earn points"), "missing check-in in {html}");
    assert!(html.contains("Check In"), "missing check-in button in {html}");
    assert!(html.contains("+2 pts"), "missing badge in {html}");
    assert!(html.contains("+5 pts"), "missing badge in {html}");
    // the quiz stays hidden until its plan is selected
    assert!(!html.contains("Which topping"), "quiz rendered early in {html}");
}

#[test]
fn profile_view_smoke_renders_points_progress() {
    let mut harness = setup_view_harness(
        ViewKind::Profile,
        UserProfile::returning_member("Boba Lover"),
        false,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Boba Lover"), "missing username in {html}");
    assert!(html.contains("1250 / 2000"), "missing counter in {html}");
    assert!(html.contains("63% Complete"), "missing percent in {html}");
    assert!(html.contains("Bubble Tea Master"), "missing level in {html}");
    assert!(!html.contains("reward-modal"), "modal should be closed in {html}");
}

#[test]
fn profile_view_smoke_opens_rewards_on_launch() {
    let mut harness = setup_view_harness(
        ViewKind::Profile,
        UserProfile::new_member("Taro"),
        true,
    );
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("reward-modal"), "missing modal in {html}");
    assert!(html.contains("100 / 1000"), "missing counter in {html}");
    assert!(html.contains("Bubble Tea Newbie"), "missing level in {html}");
}

#[test]
fn profile_view_folds_modal_awards_into_points() {
    let mut harness = setup_view_harness(
        ViewKind::Profile,
        UserProfile::returning_member("Boba Lover"),
        true,
    );
    harness.rebuild();
    assert!(harness.render().contains("1250 / 2000"));

    let dispatch = harness.reward_handles.dispatch();

    dispatch.call(RewardIntent::CheckIn);
    harness.drive();
    let html = harness.render();
    assert!(html.contains("1252 / 2000"), "check-in not credited in {html}");
    assert!(html.contains("You earned 2 points today!"), "check-in not shown in {html}");

    dispatch.call(RewardIntent::SelectPlan(Plan::Quiz));
    harness.drive();
    assert!(harness.render().contains("Which topping"), "quiz hidden after switch");

    dispatch.call(RewardIntent::Answer(1));
    harness.drive();
    let html = harness.render();
    assert!(html.contains("1257 / 2000"), "quiz award not credited in {html}");
    assert!(html.contains("Correct! +5 points earned!"), "missing result in {html}");

    dispatch.call(RewardIntent::Close);
    harness.drive();
    let html = harness.render();
    assert!(!html.contains("reward-modal"), "modal still open in {html}");
    assert!(html.contains("1257 / 2000"), "points lost on close in {html}");
}

#[test]
fn profile_view_ignores_repeat_awards_within_a_session() {
    let mut harness = setup_view_harness(
        ViewKind::Profile,
        UserProfile::new_member("Taro"),
        true,
    );
    harness.rebuild();
    let dispatch = harness.reward_handles.dispatch();

    for _ in 0..2 {
        dispatch.call(RewardIntent::CheckIn);
        harness.drive();
        dispatch.call(RewardIntent::SelectPlan(Plan::Quiz));
        harness.drive();
        dispatch.call(RewardIntent::SelectPlan(Plan::CheckIn));
        harness.drive();
    }

    let html = harness.render();
    assert!(html.contains("102 / 1000"), "expected a single check-in award in {html}");
}
