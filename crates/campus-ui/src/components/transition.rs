//! Entrance animation wrappers.
//!
//! # Design
//! - Timing decisions come from `core::motion`; these components only own
//!   the timer handle and the DOM.
//! - The reveal timer is dropped (cancelled) on teardown and the reveal is
//!   disposed first, so a late callback can never touch unmounted state.

use crate::core::motion::{
    ChildShape, REVEAL_DELAY_MS, Reveal, STAGGER_ITEM_CLASS, StaggerLayout, TRANSITION_DURATION_MS,
    animation_delay_style, plan_stagger, reveal_classes, reveal_state_attr, transition_style,
};
use crate::core::store::MotionStore;
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yew::virtual_dom::VNode;
use yewdux::prelude::use_selector;

/// Props for [`PageTransition`].
#[derive(Properties, PartialEq)]
pub struct PageTransitionProps {
    /// Page content.
    #[prop_or_default]
    pub children: Children,
    /// Extra classes for the wrapper.
    #[prop_or_default]
    pub class: Classes,
    /// Optional `data-testid`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
    /// Called once when the content becomes visible; never after unmount.
    #[prop_or_default]
    pub on_reveal: Callback<()>,
}

/// Fades and slides its content in shortly after mount.
#[function_component(PageTransition)]
pub fn page_transition(props: &PageTransitionProps) -> Html {
    let reduced = use_selector(|store: &MotionStore| store.reduced_motion());
    let reveal = {
        let reduced = *reduced;
        use_mut_ref(move || {
            if reduced {
                Reveal::immediate()
            } else {
                Reveal::deferred(REVEAL_DELAY_MS)
            }
        })
    };
    let visible = {
        let reveal = reveal.clone();
        use_state(move || reveal.borrow().is_visible())
    };
    {
        let reveal = reveal.clone();
        let visible = visible.clone();
        let on_reveal = props.on_reveal.clone();
        use_effect_with_deps(
            move |_| {
                let (needs_timer, delay_ms) = {
                    let current = reveal.borrow();
                    (current.needs_timer(), current.delay_ms())
                };
                if !needs_timer {
                    on_reveal.emit(());
                }
                let timer = needs_timer.then(|| {
                    let reveal = reveal.clone();
                    Timeout::new(delay_ms, move || {
                        if reveal.borrow_mut().fire() {
                            visible.set(true);
                            on_reveal.emit(());
                        }
                    })
                });
                move || {
                    reveal.borrow_mut().dispose();
                    drop(timer);
                }
            },
            (),
        );
    }

    let shown = *visible;
    let style = (!*reduced).then(|| AttrValue::from(transition_style(TRANSITION_DURATION_MS)));
    html! {
        <div
            class={classes!("will-change-transform", reveal_classes(shown), props.class.clone())}
            style={style}
            data-state={reveal_state_attr(shown)}
            data-testid={props.test_id.clone()}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Props for [`StaggerContainer`].
#[derive(Properties, PartialEq)]
pub struct StaggerContainerProps {
    /// Items to cascade, in display order.
    #[prop_or_default]
    pub children: Children,
    /// Per-item delay in milliseconds; defaults to the motion store value.
    #[prop_or_default]
    pub stagger_delay: Option<u32>,
    /// Extra classes for the container.
    #[prop_or_default]
    pub class: Classes,
    /// Extra classes for each item wrapper.
    #[prop_or_default]
    pub item_class: Classes,
    /// Optional `data-testid`.
    #[prop_or_default]
    pub test_id: Option<AttrValue>,
}

/// Wraps each child with an entrance animation delayed by its position.
#[function_component(StaggerContainer)]
pub fn stagger_container(props: &StaggerContainerProps) -> Html {
    let reduced = use_selector(|store: &MotionStore| store.reduced_motion());
    let store_delay = use_selector(|store: &MotionStore| store.stagger_delay_ms());
    let step = props.stagger_delay.unwrap_or(*store_delay);
    let (shape, items) = sequence_items(&props.children);

    let body = match plan_stagger(shape, step) {
        StaggerLayout::Passthrough => items.into_iter().collect::<Html>(),
        StaggerLayout::Cascade(delays) => items
            .into_iter()
            .zip(delays)
            .enumerate()
            .map(|(index, (item, delay))| {
                let animated = !*reduced;
                html! {
                    <div
                        class={classes!(animated.then_some(STAGGER_ITEM_CLASS), props.item_class.clone())}
                        style={animated.then(|| AttrValue::from(animation_delay_style(delay)))}
                        data-stagger-index={index.to_string()}
                    >
                        {item}
                    </div>
                }
            })
            .collect::<Html>(),
    };

    html! {
        <div class={props.class.clone()} data-testid={props.test_id.clone()}>
            {body}
        </div>
    }
}

/// Flatten a lone list child so `{items}` and `{for items}` cascade alike.
fn sequence_items(children: &Children) -> (ChildShape, Vec<Html>) {
    let top: Vec<Html> = children.iter().collect();
    let lone_list = match top.as_slice() {
        [VNode::VList(list)] => Some(list.iter().cloned().collect::<Vec<Html>>()),
        _ => None,
    };
    let shape = ChildShape::classify(top.len(), lone_list.as_ref().map(Vec::len));
    (shape, lone_list.unwrap_or(top))
}
