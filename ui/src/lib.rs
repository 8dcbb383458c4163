// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
pub mod flow;
mod hooks;
pub mod markdown;
pub mod preview;
mod screens;
pub mod state;

use api::FeedbackConfig;
use components::pico::Container;
use screens::upload_feedback::UploadFeedbackView;

const PICO_CSS: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

/// The application root. Each platform's `main` launches this exactly once.
#[allow(non_snake_case)]
pub fn App() -> Element {
    let studio_css = r#"
    html, body {
        margin: 0;
        background-color: #f8fafc;
    }

    @keyframes spin {
        to {
            transform: rotate(360deg);
        }
    }
"#;

    use_context_provider(|| {
        let config = FeedbackConfig::from_env();
        dioxus_logger::tracing::info!("feedback endpoint: {}", config.endpoint());
        config
    });

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: PICO_CSS,
        }
        style {
            "{studio_css}"
        }
        Container {
            UploadFeedbackView {}
        }
    }
}
