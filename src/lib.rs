use leptos::*;

use activity_board_api as api;

mod board;
mod components;
mod config;

use components::*;

pub use self::config::Config;

#[component]
#[must_use]
pub fn App(config: Config) -> impl IntoView {
    let Config { api: api_config, status, .. } = config;

    // -- init API -- //

    let activities_api = api::ActivitiesApi::new(api_config.base_url);
    log::debug!("Use activities API at '{}'", activities_api.url());

    view! {
      <main>
        <ActivityBoard
          activities_api
          hide_status_after = status.hide_after
        />
      </main>
    }
}
