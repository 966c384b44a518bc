//! Plant diagnosis page.
//!
//! Users drop or browse for a plant photo; after the configured delay the
//! simulated analyzer's verdict is shown next to the image.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;

use crate::analyzer::MockAnalyzer;
use crate::components::detection_result::DetectionResult;
use crate::components::plant_info::PlantInfoPanel;
use crate::components::status_panels::{AnalyzingPanel, ReadyPanel, ResultActions};
use crate::components::upload_panel::UploadPanel;
use crate::config::AppConfig;
use crate::error::MediPlantError;
use crate::intake;
use crate::presenter;
use crate::session::{IntakeTicket, RequestId, Session};

#[component]
pub fn DiagnosisPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let delay = config.analysis_delay();

    let session = RwSignal::new(Session::new());
    let analyzer = StoredValue::new(MockAnalyzer::from_entropy());
    // Timer that will deliver the result for the run in flight
    let pending_timeout = StoredValue::new(None::<(RequestId, i32)>);

    let cancel_pending = move || {
        if let Some((_, id)) = pending_timeout.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
            pending_timeout.set_value(None);
        }
    };

    let finish = move |request: RequestId| {
        pending_timeout.try_update_value(|pending| {
            if matches!(pending, Some((r, _)) if *r == request) {
                *pending = None;
            }
        });
        let Some(record) = analyzer.try_update_value(|a| a.pick()) else {
            return;
        };
        match session.try_update(|s| s.complete(request, record)) {
            Some(Ok(())) => tracing::info!(%request, disease = record.disease, "analysis complete"),
            Some(Err(e)) => tracing::debug!("Discarding result: {}", e),
            None => {}
        }
    };

    let on_loaded = move |ticket: IntakeTicket, data_uri: String| {
        let request = match session.try_update(|s| s.accept_intake(ticket, data_uri)) {
            Some(Ok(request)) => request,
            Some(Err(e)) => {
                tracing::debug!("Discarding upload: {}", e);
                return;
            }
            None => return,
        };

        cancel_pending();
        match schedule_once(delay, move || finish(request)) {
            Ok(id) => {
                tracing::debug!(%request, ?delay, "analysis scheduled");
                pending_timeout.set_value(Some((request, id)));
            }
            Err(e) => tracing::error!("{}", e),
        }
    };

    let on_file = Callback::new(move |file: web_sys::File| {
        let Some(ticket) = session.try_update(Session::start_intake) else {
            return;
        };
        spawn_local(async move {
            match intake::read_as_data_uri(file).await {
                Ok(data_uri) => on_loaded(ticket, data_uri),
                Err(e) => {
                    tracing::error!("Failed to read image: {}", e);
                    session.try_update(|s| s.abandon_intake(ticket));
                }
            }
        });
    });

    let on_reset = Callback::new(move |_: ()| {
        cancel_pending();
        session.update(Session::reset);
        tracing::debug!("session reset");
    });

    let upload_region = Signal::derive(move || session.with(presenter::regions).upload);
    let reading = Signal::derive(move || session.with(Session::is_reading));

    view! {
        <div class="diagnosis-layout">
            <style>{include_str!("diagnosis.css")}</style>

            <section class="upload-column">
                <UploadPanel
                    region=upload_region
                    loading=reading
                    on_file=on_file
                    on_reset=on_reset
                />
            </section>

            <section class="results-column">
                {move || {
                    let regions = session.with(presenter::regions);
                    view! {
                        {regions.loading.then(|| view! { <AnalyzingPanel /> })}
                        {regions.result.map(|record| view! {
                            <DetectionResult record=record />
                            <PlantInfoPanel info={&record.plant_info} />
                            <ResultActions on_reset=on_reset />
                        })}
                        {regions.placeholder.then(|| view! { <ReadyPanel /> })}
                    }
                }}
            </section>
        </div>
    }
}

/// Run `f` once after `delay`, returning the browser timeout handle.
fn schedule_once(delay: Duration, f: impl FnOnce() + 'static) -> Result<i32, MediPlantError> {
    let window =
        web_sys::window().ok_or_else(|| MediPlantError::Timer("no window".to_string()))?;
    let callback = Closure::once(f);

    let id = window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay.as_millis().min(i32::MAX as u128) as i32,
        )
        .map_err(|e| MediPlantError::Timer(format!("{:?}", e)))?;
    callback.forget();
    Ok(id)
}
