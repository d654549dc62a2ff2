//! Decorative glow backdrop.

use crate::core::glow::GlowVariant;
use crate::core::store::MotionStore;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Props for [`GlowBackground`].
#[derive(Properties, PartialEq)]
pub struct GlowBackgroundProps {
    /// Layer preset.
    #[prop_or_default]
    pub variant: GlowVariant,
    /// Animate the layers; ignored while reduced motion is in effect.
    #[prop_or(true)]
    pub animated: bool,
    /// Pin to the viewport instead of the nearest positioned ancestor.
    #[prop_or_default]
    pub fixed: bool,
    /// Extra classes for the layer host.
    #[prop_or_default]
    pub class: Classes,
    /// Optional `data-testid`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
}

/// Decorative radial-gradient layers rendered behind page content.
#[function_component(GlowBackground)]
pub fn glow_background(props: &GlowBackgroundProps) -> Html {
    let motion_allowed = use_selector(|store: &MotionStore| store.glow_animated());
    let animated = props.animated && *motion_allowed;
    let position = if props.fixed { "fixed" } else { "absolute" };
    html! {
        <div
            class={classes!(position, "inset-0", "-z-10", "overflow-hidden", "pointer-events-none", props.class.clone())}
            data-testid={props.test_id.clone()}
            data-variant={props.variant.as_str()}
            aria-hidden="true"
        >
            {for props.variant.layers().iter().map(|layer| html! {
                <div class={layer.class(animated)} />
            })}
        </div>
    }
}
