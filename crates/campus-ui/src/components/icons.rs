//! Outline icons used by empty states and the showcase pages.

use yew::prelude::*;

/// Props shared by every icon.
#[derive(Properties, PartialEq)]
pub struct IconProps {
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
    /// Accessible title; decorative when absent.
    #[prop_or_default]
    pub title: Option<AttrValue>,
    /// Tailwind size step (`"6"` or `"size-6"`).
    #[prop_or_default]
    pub size: Option<AttrValue>,
}

fn size_class(size: Option<&AttrValue>) -> Option<String> {
    size.map(|value| {
        let raw: &str = value.as_ref();
        if raw.starts_with("size-") {
            raw.to_string()
        } else {
            format!("size-{raw}")
        }
    })
}

fn icon_svg(props: &IconProps, body: Html) -> Html {
    let mut classes = Classes::new();
    classes.push(size_class(props.size.as_ref()).unwrap_or_else(|| "size-6".to_string()));
    classes.extend(props.class.clone());
    let title = props.title.clone();
    let aria_hidden = title.is_none().then(|| AttrValue::from("true"));
    html! {
        <svg
            class={classes}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-linecap="round"
            stroke-linejoin="round"
            stroke-width="2"
            role="img"
            aria-hidden={aria_hidden}
            aria-label={title.clone()}
        >
            {title.map(|text| html! { <title>{text}</title> }).unwrap_or_default()}
            {body}
        </svg>
    }
}

/// Open book, for courses.
#[function_component(IconBookOpen)]
pub fn icon_book_open(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="M12 7v14m-9-3a1 1 0 0 1-1-1V4a1 1 0 0 1 1-1h5a4 4 0 0 1 4 4a4 4 0 0 1 4-4h5a1 1 0 0 1 1 1v13a1 1 0 0 1-1 1h-6a3 3 0 0 0-3 3a3 3 0 0 0-3-3z" /> },
    )
}

/// Clipboard with checkmark, for assignments.
#[function_component(IconClipboardCheck)]
pub fn icon_clipboard_check(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <rect width="8" height="4" x="8" y="2" rx="1" ry="1" />
            <path d="M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2m1 10l2 2l4-4" />
        </> },
    )
}

/// Megaphone, for announcements.
#[function_component(IconMegaphone)]
pub fn icon_megaphone(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <path d="m3 11l18-5v12L3 14zm8.6 5.8a3 3 0 1 1-5.8-1.6" /> },
    )
}

/// Group of people, for enrolment counts.
#[function_component(IconUsers)]
pub fn icon_users(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
            <circle cx="9" cy="7" r="4" />
            <path d="M22 21v-2a4 4 0 0 0-3-3.87m-3-12a4 4 0 0 1 0 7.75" />
        </> },
    )
}

/// Empty inbox, for the not-found page.
#[function_component(IconInbox)]
pub fn icon_inbox(props: &IconProps) -> Html {
    icon_svg(
        props,
        html! { <>
            <path d="M22 12h-6l-2 3h-4l-2-3H2" />
            <path d="M5.45 5.11L2 12v6a2 2 0 0 0 2 2h16a2 2 0 0 0 2-2v-6l-3.45-6.89A2 2 0 0 0 16.76 4H7.24a2 2 0 0 0-1.79 1.11" />
        </> },
    )
}
