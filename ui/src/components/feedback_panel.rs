use dioxus::prelude::*;

use crate::components::pico::{Card, Spinner};
use crate::markdown;

/// Shows the spinner while a request is pending, then the rendered feedback.
#[component]
pub fn FeedbackPanel(loading: bool, feedback: String) -> Element {
    rsx! {
        Card {
            style: "position: sticky; top: 2rem;",
            h2 {
                style: "font-size: 1.75rem; margin-bottom: 1.5rem; color: #1a1a1a; font-weight: 600;",
                "Professional Feedback"
            }
            if loading {
                div {
                    style: "color: #6b7280; display: flex; align-items: center; gap: 0.5rem;",
                    Spinner {}
                    "Analyzing your artwork..."
                }
            } else {
                div {
                    style: "font-size: 1.1rem; line-height: 1.7; color: #374151;",
                    // raw html in the feedback is escaped by the renderer.
                    dangerous_inner_html: markdown::render_feedback(&feedback),
                }
            }
        }
    }
}
