//! Button Components
//!
//! - Enter: the large outlined intro button
//! - Close: the square "X" in overlay corners

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Intro call to action, neon outline with glow on hover
    #[default]
    Enter,
    /// Overlay close control
    Close,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Enter => "start-button",
            ButtonVariant::Close => "modal-close",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Enter,
///         onclick: move |_| stage.apply(|s| s.enter()),
///         "Enter"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    rsx! {
        button {
            class: props.variant.class(),
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

/// Close button with X icon.
///
/// Stops the click here so it never also reaches a surrounding backdrop.
#[component]
pub fn CloseButton(onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: ButtonVariant::Close.class(),
            r#type: "button",
            "aria-label": "Close",
            onclick: move |e| {
                e.stop_propagation();
                onclick.call(());
            },
            "X"
        }
    }
}
