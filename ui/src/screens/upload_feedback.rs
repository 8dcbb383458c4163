//=============================================================================
// File: src/screens/upload_feedback.rs
//=============================================================================
use dioxus::prelude::*;

use crate::components::drop_zone::DropZone;
use crate::components::feedback_panel::FeedbackPanel;
use crate::components::pico::{Button, ButtonType, Grid};
use crate::hooks::use_feedback_form::use_feedback_form;

#[component]
pub fn UploadFeedbackView() -> Element {
    let mut feedback_form = use_feedback_form();

    let state = feedback_form.state();
    let state = state.read();
    let has_preview = state.preview().is_some();
    let can_submit = state.can_submit();
    let loading = state.is_loading();
    let show_panel = state.shows_feedback_panel();
    let feedback = state.feedback().to_string();
    drop(state);

    rsx! {
        header {
            style: "text-align: center; margin-bottom: 3rem; padding: 2rem 0;",
            h1 {
                style: "font-size: 3rem; color: #1a1a1a; margin-bottom: 1rem; font-weight: 700;",
                "AI Comic Art Studio"
            }
            p {
                style: "font-size: 1.2rem; color: #4b5563; max-width: 600px; margin: 0 auto; line-height: 1.6;",
                "Get professional feedback on your comic art from our AI instructor, focusing on anatomy and perspective."
            }
        }

        Grid {
            split: has_preview,
            div {
                form {
                    style: "display: flex; flex-direction: column; gap: 1.5rem;",
                    onsubmit: move |evt| {
                        evt.prevent_default();
                        feedback_form.submit();
                    },
                    DropZone { form: feedback_form }
                    Button {
                        button_type: ButtonType::Submit,
                        disabled: !can_submit,
                        if loading {
                            "Analyzing Artwork..."
                        } else {
                            "Get Professional Feedback"
                        }
                    }
                }
            }

            if show_panel {
                FeedbackPanel { loading, feedback }
            }
        }
    }
}
