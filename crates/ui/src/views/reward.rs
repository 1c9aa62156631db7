#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use tracing::warn;

use boba_core::model::Plan;
use services::RewardEngine;

use crate::vm::map_reward_modal;

type EngineSlot = Signal<Option<RewardEngine>>;

fn with_engine(mut slot: EngineSlot, action: impl FnOnce(&mut RewardEngine)) {
    if let Some(engine) = slot.write().as_mut() {
        action(engine);
    }
}

fn close_engine(mut slot: EngineSlot) {
    let taken = slot.write().take();
    if let Some(engine) = taken {
        engine.close();
    }
}

/// User actions the modal forwards to its engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardIntent {
    SelectPlan(Plan),
    CheckIn,
    Answer(usize),
    Close,
}

fn apply_intent(slot: EngineSlot, intent: RewardIntent) {
    match intent {
        RewardIntent::SelectPlan(plan) => with_engine(slot, |engine| {
            engine.select_plan(plan);
        }),
        RewardIntent::CheckIn => with_engine(slot, |engine| {
            engine.perform_check_in();
        }),
        RewardIntent::Answer(index) => with_engine(slot, |engine| {
            if let Err(err) = engine.answer_quiz(index) {
                warn!(%err, "quiz answer rejected");
            }
        }),
        RewardIntent::Close => close_engine(slot),
    }
}

/// Daily reward modal. Owns one `RewardEngine` for as long as it is mounted.
#[component]
pub fn DailyRewardModal(on_close: EventHandler<()>, on_earn_points: EventHandler<u32>) -> Element {
    let engine: EngineSlot = use_signal(|| {
        Some(RewardEngine::with_daily_quiz(
            move || on_close.call(()),
            move |points| on_earn_points.call(points),
        ))
    });
    let dispatch = use_callback(move |intent: RewardIntent| apply_intent(engine, intent));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<RewardTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let Some(vm) = engine
        .read()
        .as_ref()
        .map(|engine| map_reward_modal(engine.state(), engine.quiz()))
    else {
        return rsx! {};
    };

    let show_check_in_button = vm.show_check_in_button;
    let plan_cards = vm.options.iter().map(|option| {
        let plan = option.plan;
        let class = if option.is_done {
            "reward-option reward-option--done"
        } else if option.is_active {
            "reward-option reward-option--active"
        } else {
            "reward-option"
        };
        let offer_check_in = plan == Plan::CheckIn && show_check_in_button;
        rsx! {
            div {
                key: "{plan}",
                class: "{class}",
                onclick: move |_| dispatch.call(RewardIntent::SelectPlan(plan)),
                div { class: "reward-option-left",
                    span { class: "reward-option-icon", "{option.icon}" }
                    div {
                        h3 { class: "reward-option-title", "{option.title}" }
                        p { class: "reward-option-desc", "{option.description}" }
                    }
                }
                div { class: "reward-option-right",
                    span { class: "reward-pts-badge", "{option.points_label}" }
                    if offer_check_in {
                        button {
                            class: "reward-action-btn",
                            r#type: "button",
                            onclick: move |_| dispatch.call(RewardIntent::CheckIn),
                            "Check In"
                        }
                    }
                }
            }
        }
    });

    let quiz_buttons = vm.quiz_options.iter().enumerate().map(|(index, option)| {
        rsx! {
            button {
                key: "{index}",
                class: "reward-quiz-btn",
                r#type: "button",
                onclick: move |_| dispatch.call(RewardIntent::Answer(index)),
                "{option}"
            }
        }
    });

    rsx! {
        div { class: "reward-overlay", onclick: move |_| dispatch.call(RewardIntent::Close),
            div {
                class: "reward-modal",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                button {
                    class: "reward-close",
                    r#type: "button",
                    onclick: move |_| dispatch.call(RewardIntent::Close),
                    "×"
                }
                div { class: "reward-header",
                    div { class: "reward-badge", "🎁" }
                    h2 { class: "reward-title", "Daily Rewards" }
                    p { class: "reward-sub", "Earn points & redeem for free boba!" }
                }
                div { class: "reward-banner",
                    span { class: "reward-banner-icon", "🧋" }
                    div {
                        strong { "Order on Tastemate" }
                        span { class: "reward-banner-pts", "+10 pts per order" }
                    }
                }
                div { class: "reward-options", {plan_cards} }
                if let Some(question) = vm.quiz_question.as_ref() {
                    div { class: "reward-quiz",
                        p { class: "reward-quiz-q", "{question}" }
                        div { class: "reward-quiz-options", {quiz_buttons} }
                    }
                }
                if let Some(result) = vm.quiz_result.as_ref() {
                    div {
                        class: result.css_class(),
                        "{result.message}"
                    }
                }
                div { class: "reward-footer",
                    div { class: "reward-steps",
                        span { class: "reward-step", "1. Earn points daily" }
                        span { class: "reward-step-arrow", "→" }
                        span { class: "reward-step", "2. Accumulate points" }
                        span { class: "reward-step-arrow", "→" }
                        span { class: "reward-step", "3. Redeem for free boba!" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RewardTestHandles {
    dispatch: Rc<RefCell<Option<Callback<RewardIntent>>>>,
}

#[cfg(test)]
impl RewardTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<RewardIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<RewardIntent> {
        (*self.dispatch.borrow()).expect("reward dispatch registered")
    }
}
