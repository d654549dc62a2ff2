//! Frosted-glass card container and its slot components.

use crate::components::foundations::{BasicProps, render_container};
use crate::core::surface::glass_classes;
use yew::prelude::*;

/// Props for [`GlassCard`].
#[derive(Properties, PartialEq)]
pub struct GlassCardProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Lift and brighten on hover.
    #[prop_or_default]
    pub hover: bool,
    /// Accent ring around the card.
    #[prop_or_default]
    pub glow: bool,
    /// Mark the card as loading for assistive technology.
    #[prop_or_default]
    pub busy: bool,
    /// Optional `data-testid`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    /// Optional click handler for clickable cards.
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    /// Card content, usually slot components.
    #[prop_or_default]
    pub children: Children,
}

/// Translucent card surface.
#[function_component(GlassCard)]
pub fn glass_card(props: &GlassCardProps) -> Html {
    let mut classes = Classes::new();
    for fragment in glass_classes(props.hover, props.glow) {
        classes.push(fragment);
    }
    classes.push(props.class.clone());
    html! {
        <div
            class={classes}
            data-testid={props.test_id.clone()}
            aria-busy={props.busy.then(|| AttrValue::from("true"))}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Header slot (title and description stack).
#[function_component(GlassCardHeader)]
pub fn glass_card_header(props: &BasicProps) -> Html {
    render_container("div", "flex flex-col space-y-1.5 p-6", props)
}

/// Card heading.
#[function_component(GlassCardTitle)]
pub fn glass_card_title(props: &BasicProps) -> Html {
    render_container("h3", "text-lg font-semibold leading-none tracking-tight", props)
}

/// Muted supporting text under the title.
#[function_component(GlassCardDescription)]
pub fn glass_card_description(props: &BasicProps) -> Html {
    render_container("p", "text-sm text-base-content/60", props)
}

/// Main body slot.
#[function_component(GlassCardContent)]
pub fn glass_card_content(props: &BasicProps) -> Html {
    render_container("div", "p-6 pt-0", props)
}

/// Footer slot for actions and metadata.
#[function_component(GlassCardFooter)]
pub fn glass_card_footer(props: &BasicProps) -> Html {
    render_container("div", "flex items-center p-6 pt-0", props)
}
