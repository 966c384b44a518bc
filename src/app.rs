use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::config::AppConfig;
use crate::pages::diagnosis::DiagnosisPage;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <div class="app-title-row">
                    <span class="app-logo">"[leaf]"</span>
                    <h1 class="app-title">"MediPlant AI"</h1>
                </div>
                <p class="app-subtitle">
                    "Advanced AI-powered medicinal plant disease detection and diagnosis system"
                </p>
            </header>

            <main class="content">
                <DiagnosisPage />
                <FeatureGrid />
            </main>
        </div>
    }
}
