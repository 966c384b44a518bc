//! Upload panel with drag-and-drop and browse.
//!
//! Shows the drop prompt until an image is loaded, then the preview with a
//! button to start over. Drops are accepted in both modes.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::intake;
use crate::presenter::UploadRegion;

#[component]
pub fn UploadPanel(
    /// What the panel currently shows
    region: Signal<UploadRegion>,
    /// True while an accepted file is being read
    loading: Signal<bool>,
    /// Called with every file that passed the type check
    on_file: Callback<web_sys::File>,
    /// Called when the user asks for a different image
    on_reset: Callback<()>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let file_input_id = "plant-file-input";

    let load_file = move |file: web_sys::File| {
        // Rejected files leave everything as it was.
        if let Err(e) = intake::check_type(&file.type_()) {
            tracing::debug!(name = %file.name(), "ignoring upload: {}", e);
            return;
        }
        on_file.run(file);
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            load_file(file);
        }
    };

    let on_input_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_file(file);
        }
        // Allow picking the same file again after a reset.
        input.set_value("");
    };

    view! {
        <div class="panel upload-panel">
            <style>{include_str!("upload_panel.css")}</style>
            <div class="panel-header">
                <h2 class="panel-title">"Upload Plant Image"</h2>
                <p class="panel-subtitle">"Upload an image of your medicinal plant for AI analysis"</p>
            </div>

            <div class="panel-body">
                <div
                    class="drop-zone"
                    class:drop-zone-active=move || is_over.get()
                    class:drop-zone-loading=move || loading.get()
                    on:dragover=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        set_is_over.set(true);
                    }
                    on:dragleave=move |ev: web_sys::DragEvent| {
                        ev.prevent_default();
                        set_is_over.set(false);
                    }
                    on:drop=on_drop
                >
                    {move || {
                        if loading.get() {
                            return view! {
                                <div class="drop-zone-loading-content">
                                    <div class="spinner"></div>
                                    <p>"Loading image..."</p>
                                </div>
                            }.into_any();
                        }
                        match region.get() {
                            UploadRegion::DropZone => view! {
                                <div class="drop-zone-content">
                                    <div class="drop-icon">"[upload]"</div>
                                    <p class="drop-main">"Drag and drop your image here"</p>
                                    <p class="drop-hint">"or"</p>
                                    <label for=file_input_id class="btn btn-secondary">
                                        "Browse Files"
                                    </label>
                                    <input
                                        type="file"
                                        id=file_input_id
                                        accept="image/*"
                                        style="display: none"
                                        on:change=on_input_change
                                    />
                                </div>
                            }.into_any(),
                            UploadRegion::Preview(src) => view! {
                                <div class="drop-zone-preview">
                                    <img src=src class="preview-image" alt="Uploaded plant" />
                                    <button
                                        class="btn btn-secondary"
                                        on:click=move |_| on_reset.run(())
                                    >
                                        "Upload Different Image"
                                    </button>
                                </div>
                            }.into_any(),
                        }
                    }}
                </div>
            </div>
        </div>
    }
}
