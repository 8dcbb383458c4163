//! A set of reusable, lifetime-free Dioxus components in the Pico.css idiom.
//! Pico is linked from the app root; the inline styles here carry the
//! studio's own look on top of it.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<div class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! {
        div {
            class: "container",
            style: "max-width: 1000px; margin: 2rem auto; padding: 0 2rem; font-family: system-ui, -apple-system, sans-serif;",
            {children}
        }
    }
}

/// A responsive grid with one column, or two once `split` is set.
#[component]
pub fn Grid(#[props(default = false)] split: bool, children: Element) -> Element {
    let columns = if split { "1fr 1fr" } else { "1fr" };
    rsx! {
        main {
            class: "grid",
            style: "display: grid; grid-template-columns: {columns}; gap: 2rem; align-items: start;",
            {children}
        }
    }
}

//=============================================================================
// Content Components
//=============================================================================

/// A card for grouping related content.
/// Wraps content in an `<article>` element.
#[component]
pub fn Card(#[props(default)] style: String, children: Element) -> Element {
    rsx! {
        article {
            style: "background-color: white; padding: 2rem; border-radius: 12px; border: 1px solid #e5e7eb; box-shadow: 0 4px 6px rgba(0,0,0,0.05); {style}",
            {children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(PartialEq, Clone, Copy, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    fn as_attr(&self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(default)]
    button_type: ButtonType,
    #[props(default = false)]
    disabled: bool,
}

/// A primary action button. Dimmed and inert while `disabled`.
pub fn Button(props: ButtonProps) -> Element {
    let (cursor, opacity) = if props.disabled {
        ("not-allowed", "0.7")
    } else {
        ("pointer", "1")
    };
    rsx! {
        button {
            r#type: props.button_type.as_attr(),
            disabled: props.disabled,
            style: "background-color: #2563eb; color: white; padding: 1rem 2rem; border-radius: 8px; border: none; font-size: 1.1rem; font-weight: 500; cursor: {cursor}; opacity: {opacity}; transition: all 0.2s; box-shadow: 0 2px 4px rgba(37,99,235,0.1);",
            {props.children}
        }
    }
}

/// An indeterminate progress indicator.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div {
            class: "studio-spinner",
            style: "width: 1.5rem; height: 1.5rem; border: 2px solid #e5e7eb; border-top-color: #2563eb; border-radius: 50%; animation: spin 1s linear infinite;",
        }
    }
}
