use dioxus::core::NoOpMutations;
use dioxus::prelude::*;

use boba_core::model::UserProfile;
use boba_core::time::fixed_now;
use services::Clock;

use crate::context::AppContext;
use crate::views::reward::RewardTestHandles;
use crate::views::{DailyRewardModal, ProfileView};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Profile,
    RewardModal,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    context: AppContext,
    view: ViewKind,
    reward_handles: RewardTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let context = props.context.clone();
    use_context_provider(|| context);
    let handles = props.reward_handles.clone();
    use_context_provider(|| handles);
    match props.view {
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::RewardModal => rsx! {
            DailyRewardModal {
                on_close: move |_: ()| {},
                on_earn_points: move |_points: u32| {},
            }
        },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub reward_handles: RewardTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, profile: UserProfile, rewards_open: bool) -> ViewHarness {
    let context = AppContext::new(profile, Clock::fixed(fixed_now())).with_rewards_open(rewards_open);
    let reward_handles = RewardTestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewHarnessRoot,
        ViewHarnessProps {
            context,
            view,
            reward_handles: reward_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        reward_handles,
    }
}
