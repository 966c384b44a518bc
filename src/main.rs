use leptos::prelude::*;
use mediplant::app::App;
use mediplant::{logging, AppConfig};

fn main() {
    let config = AppConfig::load();
    logging::init(&config.log_level);
    tracing::info!(delay_ms = config.analysis_delay_ms, "starting MediPlant");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
