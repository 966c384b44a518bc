use leptos::prelude::*;

/// Shown while the simulated analysis is running.
#[component]
pub fn AnalyzingPanel() -> impl IntoView {
    view! {
        <div class="panel status-panel analyzing-panel">
            <div class="loading-indicator">
                <div class="spinner"></div>
                <h3>"Analyzing Image"</h3>
                <p>"AI is processing your plant image..."</p>
                <div class="progress-track">
                    <div class="progress-fill"></div>
                </div>
            </div>
        </div>
    }
}

/// Shown before anything has been uploaded.
#[component]
pub fn ReadyPanel() -> impl IntoView {
    view! {
        <div class="panel status-panel ready-panel">
            <div class="ready-icon">"[leaf]"</div>
            <h3>"Ready to Analyze"</h3>
            <p>"Upload a plant image to get started with AI-powered disease detection"</p>
        </div>
    }
}

/// Follow-up actions under a finished result.
#[component]
pub fn ResultActions(on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="result-actions">
            <button class="btn btn-primary" disabled=true title="Report export is not available">
                "Download Report"
            </button>
            <button class="btn btn-secondary" on:click=move |_| on_reset.run(())>
                "Analyze Another Plant"
            </button>
        </div>
    }
}
