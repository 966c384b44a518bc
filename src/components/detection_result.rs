//! Detection result display component.
//!
//! Shows the detected condition, its confidence and severity, and the
//! recommended treatment.

use leptos::prelude::*;

use crate::components::severity_badge::SeverityBadge;
use crate::diagnosis::DiagnosisRecord;
use crate::presenter::{confidence_tone, format_confidence};

#[component]
pub fn DetectionResult(record: &'static DiagnosisRecord) -> impl IntoView {
    let confidence_class = format!(
        "result-value {}",
        confidence_tone(record.confidence).css_class()
    );

    view! {
        <div class="panel detection-result">
            <style>{include_str!("detection_result.css")}</style>
            <div class="panel-header">
                <h2 class="panel-title">"Detection Results"</h2>
            </div>

            <div class="panel-body">
                <div class="result-grid">
                    <div class="result-tile tile-disease">
                        <p class="result-label">"Disease Detected"</p>
                        <p class="result-value">{record.disease}</p>
                    </div>
                    <div class="result-tile tile-confidence">
                        <p class="result-label">"Confidence"</p>
                        <p class=confidence_class>{format_confidence(record.confidence)}</p>
                    </div>
                </div>

                <div class="severity-row">
                    <span class="result-label">"Severity Level"</span>
                    <SeverityBadge severity=record.severity />
                </div>

                <div class="result-block">
                    <p class="result-label">"Description"</p>
                    <p class="result-text">{record.description}</p>
                </div>

                <div class="result-block treatment-block">
                    <span class="treatment-icon">"[check]"</span>
                    <div>
                        <p class="result-label">"Recommended Treatment"</p>
                        <p class="result-text">{record.treatment}</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
