use leptos::*;

use crate::board::Status;

#[component]
pub fn StatusMessage(status: Signal<Status>) -> impl IntoView {
    view! {
      <div
        id = "message"
        class = move || status.with(Status::class)
      >
        { move || status.with(|s| s.text.clone()) }
      </div>
    }
}
