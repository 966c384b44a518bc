//! Plant information panel.

use leptos::prelude::*;

use crate::diagnosis::PlantInfo;

/// Botanical details plus medicinal uses, shown as chips in catalog order.
#[component]
pub fn PlantInfoPanel(info: &'static PlantInfo) -> impl IntoView {
    view! {
        <div class="panel plant-info">
            <style>{include_str!("plant_info.css")}</style>
            <div class="panel-header">
                <h2 class="panel-title">"Plant Information"</h2>
            </div>

            <div class="panel-body">
                <div class="plant-grid">
                    <div>
                        <p class="result-label">"Scientific Name"</p>
                        <p class="plant-value scientific-name">{info.scientific_name}</p>
                    </div>
                    <div>
                        <p class="result-label">"Common Name"</p>
                        <p class="plant-value">{info.common_name}</p>
                    </div>
                    <div class="plant-grid-wide">
                        <p class="result-label">"Family"</p>
                        <p class="plant-value">{info.family}</p>
                    </div>
                </div>

                <div class="uses-section">
                    <p class="result-label">"Medicinal Uses"</p>
                    <div class="uses-list">
                        {info.medicinal_uses.iter().map(|use_| view! {
                            <span class="use-chip">{*use_}</span>
                        }).collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </div>
    }
}
