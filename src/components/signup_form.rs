use leptos::{ev, html, *};

const PLACEHOLDER: &str = "-- Select an activity --";

/// Both controls are read on submit, not tracked while typing.
#[component]
pub fn SignupForm<F>(
    form: NodeRef<html::Form>,
    email: NodeRef<html::Input>,
    activity: NodeRef<html::Select>,
    options: Signal<Vec<String>>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn(ev::SubmitEvent) + 'static,
{
    view! {
      <form id="signup-form" node_ref=form on:submit=on_submit>
        <div class="form-group">
          <label for="email">"Student Email:"</label>
          <input
            type = "email"
            id = "email"
            required
            placeholder = "your-email@example.com"
            node_ref = email
          />
        </div>
        <div class="form-group">
          <label for="activity">"Select Activity:"</label>
          <select id="activity" required node_ref=activity>
            <option value="">{ PLACEHOLDER }</option>
            { move || options
                .get()
                .into_iter()
                .map(|name| view! { <option value = name.clone()>{ name }</option> })
                .collect_view()
            }
          </select>
        </div>
        <button type="submit">"Sign Up"</button>
      </form>
    }
}
