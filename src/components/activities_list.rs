use leptos::*;

use activity_board_boundary::{Activity, ActivityDetail, Participant};

use crate::board::{availability, Board, ListState, RemovalTarget, LOAD_FAILED};

/// Content of `#activities-list`.
///
/// Every change of the list rebuilds all cards.
#[component]
pub fn ActivitiesList(board: Signal<Board>) -> impl IntoView {
    move || match board.with(|b| b.list.clone()) {
        ListState::Loading => view! { <p>"Loading activities..."</p> }.into_view(),
        ListState::Failed => view! { <p>{ LOAD_FAILED }</p> }.into_view(),
        ListState::Loaded(activities) => activities
            .into_iter()
            .map(|activity| view! { <ActivityCard activity /> })
            .collect_view(),
    }
}

#[component]
fn ActivityCard(activity: Activity) -> impl IntoView {
    let availability = availability(&activity.detail);
    let Activity { name, detail } = activity;
    let ActivityDetail {
        description,
        schedule,
        participants,
        ..
    } = detail;

    view! {
      <div class="activity-card">
        <h4>{ name.clone() }</h4>
        <p>{ description }</p>
        <p>
          <strong>"Schedule:"</strong>
          " " { schedule }
        </p>
        <p>
          <strong>"Availability:"</strong>
          " " { availability }
        </p>
        <Participants activity = name participants />
      </div>
    }
}

#[component]
fn Participants(activity: String, participants: Vec<Participant>) -> impl IntoView {
    let roster = if participants.is_empty() {
        view! { <p class="no-participants">"No participants yet"</p> }.into_view()
    } else {
        view! {
          <ul class="participants-list">
            { participants
                .into_iter()
                .map(|participant| view! {
                  <ParticipantEntry activity = activity.clone() participant />
                })
                .collect_view()
            }
          </ul>
        }
        .into_view()
    };

    view! {
      <div class="participants">
        <strong>"Participants:"</strong>
        { roster }
      </div>
    }
}

/// Removable entries carry their activity and email as
/// `data-*` attributes for the delegated click handler.
#[component]
fn ParticipantEntry(activity: String, participant: Participant) -> impl IntoView {
    let label = participant.label().to_owned();
    match RemovalTarget::of(&activity, &participant) {
        Some(RemovalTarget { activity, email }) => view! {
          <li data-activity = activity data-email = email>
            { label }
            <button
              type = "button"
              class = "participant-remove"
              title = "Unregister participant"
            >
              "🗑️"
            </button>
          </li>
        }
        .into_view(),
        None => view! { <li>{ label }</li> }.into_view(),
    }
}
