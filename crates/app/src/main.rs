use dioxus::prelude::*;

mod auth;
mod format_helpers;
mod mock_data;
mod role_gate;
mod roster;
mod routes;
use auth::AuthState;
use roster::ClinicRoster;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(|| {
        tracing::info!(platform = client_platform(), "starting Pulsewatch");
        session::config::load_config()
    });

    use_context_provider(|| config.features.clone());
    use_context_provider(|| AuthState::new(session::provider_from_settings(&config.auth)));
    use_context_provider(ClinicRoster::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "Pulsewatch" }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
