use log::{info, warn, Level};
use yew::prelude::*;

mod analytics;
mod campaign;
mod config;
mod store;
mod funnel {
    pub mod flow;
    pub mod lead;
    pub mod scheduler;
    pub mod session;
}
mod components {
    pub mod countdown;
    pub mod registration_form;
    #[cfg(feature = "debug-panel")]
    pub mod debug_panel;
}
mod pages {
    pub mod landing;
}
#[cfg(any(test, feature = "debug-panel"))]
mod diagnostics;
#[cfg(test)]
mod test_support;

use analytics::Tracker;
use campaign::Campaign;
use pages::landing::Landing;

#[cfg(feature = "debug-panel")]
fn debug_panel() -> Html {
    html! { <components::debug_panel::DebugPanel /> }
}

#[cfg(not(feature = "debug-panel"))]
fn debug_panel() -> Html {
    html! {}
}

#[function_component]
fn App() -> Html {
    // Resolved once per page load and shared with everything below
    let campaign = use_memo(|_| Campaign::active(), ());
    let tracker = use_memo(|_| Tracker::detect(), ());

    html! {
        <ContextProvider<Tracker> context={(*tracker).clone()}>
            <Landing campaign={(*campaign).clone()} />
            {debug_panel()}
        </ContextProvider<Tracker>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    let campaign = Campaign::active();
    info!(
        "Starting landing page for {} (form resets after {:?})",
        campaign.event, campaign.reset_delay
    );
    if let Err(e) = config::store_config() {
        warn!("Registrations will not be stored: {}", e);
    }

    yew::Renderer::<App>::new().render();
}
