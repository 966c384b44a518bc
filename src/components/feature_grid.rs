use leptos::prelude::*;

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <div class="card-grid feature-grid">
            <div class="card">
                <h3>"Advanced AI Detection"</h3>
                <p>"State-of-the-art computer vision models trained on thousands of medicinal plant images"</p>
            </div>
            <div class="card">
                <h3>"Comprehensive Database"</h3>
                <p>"Extensive knowledge base of medicinal plants and their common diseases and treatments"</p>
            </div>
            <div class="card">
                <h3>"Treatment Recommendations"</h3>
                <p>"Get detailed treatment plans and care instructions for identified plant diseases"</p>
            </div>
        </div>
    }
}
