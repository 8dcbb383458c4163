// File: src/components/drop_zone.rs
use dioxus::html::HasFileData;
use dioxus::prelude::*;

use crate::hooks::use_feedback_form::FeedbackForm;
use crate::state::DragEvent;

const FILE_INPUT_ID: &str = "file-input";

/// The drag-and-drop target, which doubles as the label of a hidden file
/// picker and shows the preview once one is ready.
///
/// Dropped files are taken as-is; only the picker filters on `image/*`.
#[component]
pub fn DropZone(form: FeedbackForm) -> Element {
    let mut form = form;
    let (drag_active, preview) = {
        let state = form.state();
        let state = state.read();
        (state.is_drag_active(), state.preview().map(str::to_string))
    };

    let (border_color, background) = if drag_active {
        ("#2563eb", "#f0f9ff")
    } else {
        ("#cbd5e1", "white")
    };

    rsx! {
        div {
            style: "
                border: 2px dashed {border_color};
                border-radius: 12px;
                padding: 2rem;
                text-align: center;
                background-color: {background};
                cursor: pointer;
                transition: all 0.2s ease;
                box-shadow: 0 1px 3px rgba(0,0,0,0.1);
                position: relative;
            ",
            // every drag event must cancel the browser's open-the-file default.
            ondragenter: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                form.drag(DragEvent::Enter);
            },
            ondragover: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                form.drag(DragEvent::Over);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                form.drag(DragEvent::Leave);
            },
            ondrop: move |evt| {
                evt.prevent_default();
                evt.stop_propagation();
                form.drop_file(evt.files().into_iter().next());
            },

            input {
                r#type: "file",
                accept: "image/*",
                id: FILE_INPUT_ID,
                style: "display: none;",
                onchange: move |evt| {
                    if let Some(file) = evt.files().into_iter().next() {
                        form.pick(file);
                    }
                },
            }
            label {
                r#for: FILE_INPUT_ID,
                style: "cursor: pointer; display: block;",
                div {
                    style: "margin-bottom: 1rem; color: #64748b; font-size: 1.1rem;",
                    if preview.is_some() {
                        "🖼️ Change Image"
                    } else {
                        "📁 Drop your artwork here or click to browse"
                    }
                }
                if let Some(src) = preview {
                    img {
                        src: "{src}",
                        alt: "Preview",
                        style: "max-width: 100%; max-height: 400px; border-radius: 8px; box-shadow: 0 4px 6px -1px rgba(0,0,0,0.1);",
                    }
                } else {
                    div {
                        style: "color: #94a3b8; margin-top: 1rem;",
                        "Supports: PNG, JPG, GIF"
                    }
                }
            }
        }
    }
}
