//! Empty state panel for list-like views.
//!
//! # Design
//! - Keep copy and actions entirely prop-driven.
//! - An action with an href renders as a link, otherwise as a button.

use crate::components::button::{Button, ButtonVariant};
use crate::core::actions::{ActionKind, ClickModifiers, action_test_id, should_route_client_side};
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yew_router::AnyRoute;

/// Call to action shown under the description.
#[derive(Clone, Debug, PartialEq)]
pub struct EmptyStateAction {
    /// Visible label.
    pub label: AttrValue,
    /// Navigation target; takes precedence over `on_click`.
    pub href: Option<AttrValue>,
    /// Invoked once per click when no href is set.
    pub on_click: Option<Callback<MouseEvent>>,
}

impl EmptyStateAction {
    /// Action that navigates to `href`.
    #[must_use]
    pub fn link(label: impl Into<AttrValue>, href: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
            on_click: None,
        }
    }

    /// Action that invokes `on_click`.
    #[must_use]
    pub fn button(label: impl Into<AttrValue>, on_click: Callback<MouseEvent>) -> Self {
        Self {
            label: label.into(),
            href: None,
            on_click: Some(on_click),
        }
    }
}

/// Props for [`EmptyState`].
#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    /// Illustration or icon shown above the title.
    #[prop_or_default]
    pub icon: Html,
    /// Headline.
    pub title: AttrValue,
    /// Supporting copy.
    pub description: AttrValue,
    /// Optional call to action.
    #[prop_or_default]
    pub action: Option<EmptyStateAction>,
    /// Root `data-testid`; the action gets `<id>-action`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Centered placeholder for views with nothing to show yet.
#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    let action_id = action_test_id(props.test_id.as_deref()).map(AttrValue::from);
    html! {
        <div
            class={classes!("empty-state", "flex", "flex-col", "items-center", "justify-center", "px-6", "py-16", "text-center", props.class.clone())}
            data-testid={props.test_id.clone()}
        >
            <div class="mb-4 rounded-2xl bg-white/5 p-4 text-base-content/60">
                {props.icon.clone()}
            </div>
            <h3 class="text-lg font-semibold">{props.title.clone()}</h3>
            <p class="mt-1 max-w-sm text-sm text-base-content/60">{props.description.clone()}</p>
            {props.action.as_ref().map(|action| html! {
                <div class="mt-6">
                    <EmptyStateActionView action={action.clone()} test_id={action_id.clone()} />
                </div>
            }).unwrap_or_default()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct EmptyStateActionViewProps {
    action: EmptyStateAction,
    #[prop_or_default]
    test_id: Option<AttrValue>,
}

#[function_component(EmptyStateActionView)]
fn empty_state_action_view(props: &EmptyStateActionViewProps) -> Html {
    let navigator = use_navigator();
    let action = &props.action;
    match ActionKind::resolve(action.href.as_deref()) {
        ActionKind::Link(href) => {
            let onclick = {
                let href = href.clone();
                Callback::from(move |event: MouseEvent| {
                    let click = ClickModifiers {
                        button: event.button(),
                        ctrl: event.ctrl_key(),
                        meta: event.meta_key(),
                        shift: event.shift_key(),
                        alt: event.alt_key(),
                    };
                    if let Some(navigator) = &navigator
                        && should_route_client_side(&href, click)
                    {
                        event.prevent_default();
                        navigator.push(&AnyRoute::new(href.clone()));
                    }
                })
            };
            html! {
                <a
                    href={href}
                    class={ButtonVariant::Primary.as_class()}
                    data-testid={props.test_id.clone()}
                    onclick={onclick}
                >
                    {action.label.clone()}
                </a>
            }
        }
        ActionKind::Button => {
            let onclick = action.on_click.clone().unwrap_or_default();
            html! {
                <Button test_id={props.test_id.clone()} onclick={onclick}>
                    {action.label.clone()}
                </Button>
            }
        }
    }
}
