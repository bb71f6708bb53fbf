use leptos::*;

use activity_board::{App, Config};

fn main() {
    let config = Config::load();
    _ = console_log::init_with_level(config.log.level);
    console_error_panic_hook::set_once();
    log::info!("Start web application");
    mount_to_body(move || view! { <App config /> });
}
