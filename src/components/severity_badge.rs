use leptos::prelude::*;

use crate::diagnosis::Severity;

#[component]
pub fn SeverityBadge(
    /// Severity to display
    severity: Severity,
) -> impl IntoView {
    let class = format!("severity-badge {}", severity.tone().css_class());

    view! {
        <span class=class>{severity.to_string()}</span>
    }
}
