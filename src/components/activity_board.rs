use std::time::Duration;

use leptos::{ev, html, *};
use wasm_bindgen::JsCast;

use activity_board_api::ActivitiesApi;

use crate::{
    board::{Board, Outcome, RemovalTarget, Status},
    components::*,
};

/// View controller of the activity board.
///
/// Loads and renders all activities, signs up new participants
/// and unregisters existing ones. Requests are never queued or
/// cancelled: each finished request updates the status message
/// and triggers its own reload.
#[component]
pub fn ActivityBoard(activities_api: ActivitiesApi, hide_status_after: Duration) -> impl IntoView {
    // -- signals -- //

    let board = create_rw_signal(Board::default());
    let status = create_rw_signal(Status::default());

    // -- node refs -- //

    let form = create_node_ref::<html::Form>();
    let email = create_node_ref::<html::Input>();
    let activity = create_node_ref::<html::Select>();

    // -- actions -- //

    let load = {
        let api = activities_api.clone();
        create_action(move |(): &()| {
            let api = api.clone();
            async move {
                log::debug!("Fetch activities");
                let result = api.activities().await;
                board.update(|b| b.apply(result));
            }
        })
    };

    let show = move |outcome: Outcome| {
        let Outcome {
            status: next_status,
            reset_form,
            reload,
        } = outcome;
        status.set(next_status);
        set_timeout(move || status.update(Status::hide), hide_status_after);
        if reset_form {
            if let Some(form) = form.get_untracked() {
                form.reset();
            }
        }
        if reload {
            load.dispatch(());
        }
    };

    let signup = {
        let api = activities_api.clone();
        create_action(move |(activity, email): &(String, String)| {
            let api = api.clone();
            let activity = activity.clone();
            let email = email.clone();
            async move {
                log::debug!("Sign up {email} for {activity}");
                let result = api.signup(&activity, &email).await;
                show(Outcome::of_signup(result));
            }
        })
    };

    let remove = create_action(move |target: &RemovalTarget| {
        let api = activities_api.clone();
        let RemovalTarget { activity, email } = target.clone();
        async move {
            log::debug!("Unregister {email} from {activity}");
            let result = api.unregister(&activity, &email).await;
            show(Outcome::of_removal(result));
        }
    });

    // -- callbacks -- //

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let email = email
            .get_untracked()
            .map(|input| input.value())
            .unwrap_or_default();
        let activity = activity
            .get_untracked()
            .map(|select| select.value())
            .unwrap_or_default();
        signup.dispatch((activity, email));
    };

    let on_list_click = move |ev: ev::MouseEvent| {
        let Some(target) = clicked_removal_target(&ev) else {
            return;
        };
        if !confirm(&target.confirmation()) {
            log::debug!("Removal of {} cancelled", target.email);
            return;
        }
        remove.dispatch(target);
    };

    // -- init -- //

    load.dispatch(());

    view! {
      <section id="activities-container">
        <h3>"Available Activities"</h3>
        <div id="activities-list" on:click=on_list_click>
          <ActivitiesList board = board.into() />
        </div>
      </section>
      <section id="signup-container">
        <h3>"Sign Up for an Activity"</h3>
        <SignupForm
          form
          email
          activity
          options = selection_options(board).into()
          on_submit
        />
        <StatusMessage status = status.into() />
      </section>
    }
}

/// Only notifies if the offered names changed, so a failed load
/// does not rebuild the options and keeps the current selection.
fn selection_options(board: RwSignal<Board>) -> Memo<Vec<String>> {
    create_memo(move |_| board.with(|b| b.options.clone()))
}

/// Resolve the participant entry of a click on a removal control.
fn clicked_removal_target(ev: &ev::MouseEvent) -> Option<RemovalTarget> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let button = element.closest(".participant-remove").ok()??;
    let entry = button.closest("li").ok()??;
    RemovalTarget::from_dataset(
        entry.get_attribute("data-activity"),
        entry.get_attribute("data-email"),
    )
}

fn confirm(message: &str) -> bool {
    window()
        .confirm_with_message(message)
        .unwrap_or_default()
}
