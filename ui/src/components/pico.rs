//! A set of reusable, lifetime-free Dioxus components for the Pico.css framework.
//! To use, ensure you have pico.min.css linked in your main application.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

//=============================================================================
// Layout Components
//=============================================================================

/// A centered container for your content.
/// Wraps content in a `<main class="container">` element.
#[component]
pub fn Container(children: Element) -> Element {
    rsx! { main { class: "container", {children} } }
}

#[derive(Props, PartialEq, Clone)]
pub struct RowProps {
    children: Element,
    #[props(optional)]
    style: Option<String>,
}

/// Lays children out in a single non-wrapping row, vertically centered.
pub fn Row(props: RowProps) -> Element {
    let extra = props.style.as_deref().unwrap_or("");
    rsx! {
        div {
            style: "display: flex; align-items: center; flex-wrap: nowrap; {extra}",
            {props.children}
        }
    }
}

//=============================================================================
// Interactive Components
//=============================================================================

#[derive(Props, PartialEq, Clone)]
pub struct TooltipProps {
    /// Text shown while the pointer rests on the children.
    text: String,
    children: Element,
    #[props(default = "top".to_string())]
    placement: String,
}

/// Shows `text` in a Pico tooltip while the pointer hovers the children.
pub fn Tooltip(props: TooltipProps) -> Element {
    rsx! {
        span {
            "data-tooltip": "{props.text}",
            "data-placement": "{props.placement}",
            {props.children}
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ExternalLinkProps {
    href: String,
    children: Element,
    #[props(optional)]
    style: Option<String>,
}

/// A link that opens in a new tab without handing the opener to the target.
pub fn ExternalLink(props: ExternalLinkProps) -> Element {
    let style = props.style.as_deref().unwrap_or("");
    rsx! {
        a {
            class: "external-link",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "{style}",
            {props.children}
        }
    }
}
