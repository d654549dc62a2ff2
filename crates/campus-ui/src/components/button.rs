//! Plain action button shared by pages and empty states.

use yew::prelude::*;

/// Visual weight of a button or button-styled link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Filled primary action.
    #[default]
    Primary,
    /// Bordered secondary action.
    Outline,
    /// Borderless low-emphasis action.
    Ghost,
}

impl ButtonVariant {
    /// Class list for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn-primary",
            Self::Outline => "btn btn-outline",
            Self::Ghost => "btn btn-ghost",
        }
    }
}

/// Props for [`Button`].
#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Button label and icons.
    #[prop_or_default]
    pub children: Children,
    /// Visual weight.
    #[prop_or_default]
    pub variant: ButtonVariant,
    /// Disable the button.
    #[prop_or_default]
    pub disabled: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Optional `data-testid`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

/// Plain `type="button"` button.
#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    html! {
        <button
            type="button"
            class={classes!(props.variant.as_class(), props.class.clone())}
            disabled={props.disabled}
            data-testid={props.test_id.clone()}
            onclick={props.onclick.clone()}
        >
            { for props.children.iter() }
        </button>
    }
}
