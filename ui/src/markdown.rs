//! Feedback markdown to HTML, with the panel's inline typography.

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Options, Parser, Tag, TagEnd};

const P_STYLE: &str = "margin-bottom: 1rem;";
const H3_STYLE: &str =
    "font-size: 1.3rem; font-weight: 600; margin-top: 1.5rem; margin-bottom: 0.75rem; color: #1f2937;";
const UL_STYLE: &str = "margin-bottom: 1rem; padding-left: 1.5rem;";
const LI_STYLE: &str = "margin-bottom: 0.5rem;";
const STRONG_STYLE: &str = "color: #1f2937; font-weight: 600;";

/// URL schemes a link or image may point at; anything else is blanked.
const SAFE_SCHEMES: [&str; 6] = ["http", "https", "mailto", "irc", "ircs", "xmpp"];

/// Renders feedback markdown as HTML.
///
/// Paragraphs, `###` headings, bullet lists, list items and bold spans get
/// inline styles; everything else is the renderer's plain output. Raw HTML
/// in the input is escaped and shown as text, and link or image targets
/// with a scheme outside [`SAFE_SCHEMES`] are emptied.
///
/// Plain CommonMark: no tables, strikethrough or other extensions.
pub fn render_feedback(markdown: &str) -> String {
    let options = Options::empty();
    let events = Parser::new_ext(markdown, options).map(style_event);

    let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut html_output, events);
    html_output
}

fn style_event(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Start(Tag::Paragraph) => styled_open("p", P_STYLE),
        Event::Start(Tag::Heading { level, .. }) if level == HeadingLevel::H3 => {
            styled_open("h3", H3_STYLE)
        }
        Event::Start(Tag::List(None)) => styled_open("ul", UL_STYLE),
        Event::Start(Tag::Item) => styled_open("li", LI_STYLE),
        Event::Start(Tag::Strong) => styled_open("strong", STRONG_STYLE),
        Event::End(TagEnd::Paragraph) => close("p"),
        Event::End(TagEnd::Heading(level)) if level == HeadingLevel::H3 => {
            close("h3")
        }
        Event::End(TagEnd::List(false)) => close("ul"),
        Event::End(TagEnd::Item) => close("li"),
        Event::End(TagEnd::Strong) => close("strong"),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    }
}

/// Relative URLs pass; absolute ones only with a safe scheme.
fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    // a colon after the first '/', '?' or '#' is part of the path, not a scheme.
    let scheme = match (url.find(':'), url.find(['/', '?', '#'])) {
        (Some(colon), Some(path)) if path < colon => None,
        (Some(colon), _) => Some(&url[..colon]),
        (None, _) => None,
    };
    let allowed = scheme.map_or(true, |scheme| {
        SAFE_SCHEMES.iter().any(|safe| safe.eq_ignore_ascii_case(scheme))
    });

    if allowed {
        url
    } else {
        CowStr::Borrowed("")
    }
}

fn styled_open(tag: &str, style: &str) -> Event<'static> {
    Event::Html(CowStr::from(format!("<{tag} style=\"{style}\">")))
}

fn close(tag: &str) -> Event<'static> {
    let newline = matches!(tag, "p" | "h3" | "ul" | "li");
    let html = if newline {
        format!("</{tag}>\n")
    } else {
        format!("</{tag}>")
    };
    Event::Html(CowStr::from(html))
}
