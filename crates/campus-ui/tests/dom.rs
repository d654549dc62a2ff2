//! Browser DOM tests for the component kit (`wasm-pack test --headless --firefox`).
#![cfg(target_arch = "wasm32")]

use campus_ui::components::{
    EmptyState, EmptyStateAction, GlowBackground, PageTransition, StaggerContainer,
    TableRowSkeleton,
};
use campus_ui::core::glow::GlowVariant;
use gloo_timers::future::TimeoutFuture;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Element, HtmlElement};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount_point() -> Element {
    let document = gloo::utils::document();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn find(host: &Element, test_id: &str) -> Element {
    host.query_selector(&format!("[data-testid='{test_id}']"))
        .unwrap()
        .unwrap_or_else(|| panic!("no element with data-testid={test_id}"))
}

async fn settle(ms: u32) {
    TimeoutFuture::new(ms).await;
}

#[function_component(CreateCourseEmpty)]
fn create_course_empty() -> Html {
    html! {
        <EmptyState
            title="No courses yet"
            description="Create your first course to get started"
            action={EmptyStateAction::link("Create Course", "/courses/new")}
            test_id="courses-empty"
        />
    }
}

#[wasm_bindgen_test]
async fn empty_state_with_href_renders_link() {
    let host = mount_point();
    yew::Renderer::<CreateCourseEmpty>::with_root(host.clone()).render();
    settle(0).await;

    let root = find(&host, "courses-empty");
    assert!(root.text_content().unwrap().contains("No courses yet"));
    assert!(
        root.text_content()
            .unwrap()
            .contains("Create your first course to get started")
    );
    let action = find(&host, "courses-empty-action");
    assert_eq!(action.tag_name(), "A");
    assert_eq!(action.get_attribute("href").as_deref(), Some("/courses/new"));
    assert_eq!(action.text_content().as_deref(), Some("Create Course"));
}

#[derive(Properties, PartialEq)]
struct RetryEmptyProps {
    on_click: Callback<MouseEvent>,
}

#[function_component(RetryEmpty)]
fn retry_empty(props: &RetryEmptyProps) -> Html {
    html! {
        <EmptyState
            title="Nothing here"
            description="Try again"
            action={EmptyStateAction::button("Retry", props.on_click.clone())}
            test_id="retry-empty"
        />
    }
}

#[wasm_bindgen_test]
async fn empty_state_callback_fires_once_per_click() {
    let host = mount_point();
    let clicks = Rc::new(Cell::new(0_u32));
    let on_click = {
        let clicks = clicks.clone();
        Callback::from(move |_: MouseEvent| clicks.set(clicks.get() + 1))
    };
    yew::Renderer::<RetryEmpty>::with_root_and_props(host.clone(), RetryEmptyProps { on_click })
        .render();
    settle(0).await;

    let action = find(&host, "retry-empty-action");
    assert_eq!(action.tag_name(), "BUTTON");
    assert!(action.get_attribute("href").is_none());
    let button: HtmlElement = action.dyn_into().unwrap();
    button.click();
    assert_eq!(clicks.get(), 1);
    button.click();
    assert_eq!(clicks.get(), 2);
}

#[derive(Properties, PartialEq)]
struct GlowHostProps {
    variant: GlowVariant,
}

#[function_component(GlowHost)]
fn glow_host(props: &GlowHostProps) -> Html {
    html! { <GlowBackground variant={props.variant} test_id="glow" /> }
}

#[wasm_bindgen_test]
async fn glow_background_layer_counts_match_variant() {
    for (variant, expected) in [
        (GlowVariant::Hero, 3),
        (GlowVariant::Default, 2),
        (GlowVariant::Subtle, 2),
    ] {
        let host = mount_point();
        yew::Renderer::<GlowHost>::with_root_and_props(host.clone(), GlowHostProps { variant })
            .render();
        settle(0).await;

        let glow = find(&host, "glow");
        assert_eq!(glow.child_element_count(), expected, "{}", variant.as_str());
        assert_eq!(glow.get_attribute("aria-hidden").as_deref(), Some("true"));
    }
}

#[derive(Properties, PartialEq)]
struct TableHostProps {
    columns: usize,
}

#[function_component(TableHost)]
fn table_host(props: &TableHostProps) -> Html {
    html! {
        <table>
            <tbody>
                <TableRowSkeleton columns={props.columns} />
            </tbody>
        </table>
    }
}

#[wasm_bindgen_test]
async fn table_row_skeleton_renders_one_cell_per_column() {
    for columns in [1_usize, 4, 7] {
        let host = mount_point();
        yew::Renderer::<TableHost>::with_root_and_props(host.clone(), TableHostProps { columns })
            .render();
        settle(0).await;

        let row = find(&host, "skeleton-table-row");
        assert_eq!(row.child_element_count() as usize, columns);
    }
}

#[function_component(StaggeredList)]
fn staggered_list() -> Html {
    html! {
        <StaggerContainer stagger_delay={40_u32} test_id="stagger">
            {for ["a", "b", "c", "d"].into_iter().map(|label| html! { <span>{label}</span> })}
        </StaggerContainer>
    }
}

#[wasm_bindgen_test]
async fn stagger_container_delays_by_index() {
    let host = mount_point();
    yew::Renderer::<StaggeredList>::with_root(host.clone()).render();
    settle(0).await;

    let container = find(&host, "stagger");
    assert_eq!(container.child_element_count(), 4);
    for index in 0..4_u32 {
        let item = container
            .query_selector(&format!("[data-stagger-index='{index}']"))
            .unwrap()
            .unwrap();
        let expected = format!("animation-delay:{}ms;", index * 40);
        assert_eq!(item.get_attribute("style"), Some(expected));
    }
}

#[function_component(SingleChild)]
fn single_child() -> Html {
    html! {
        <StaggerContainer test_id="stagger-single">
            <p>{"only"}</p>
        </StaggerContainer>
    }
}

#[wasm_bindgen_test]
async fn stagger_container_leaves_single_child_unwrapped() {
    let host = mount_point();
    yew::Renderer::<SingleChild>::with_root(host.clone()).render();
    settle(0).await;

    let container = find(&host, "stagger-single");
    let first = container.first_element_child().unwrap();
    assert_eq!(first.tag_name(), "P");
    assert!(first.get_attribute("data-stagger-index").is_none());
}

#[derive(Properties, PartialEq)]
struct TransitionPageProps {
    reveals: Rc<Cell<u32>>,
}

#[function_component(TransitionPage)]
fn transition_page(props: &TransitionPageProps) -> Html {
    let on_reveal = {
        let reveals = props.reveals.clone();
        Callback::from(move |()| reveals.set(reveals.get() + 1))
    };
    html! {
        <PageTransition test_id="page" on_reveal={on_reveal}>
            <p>{"content"}</p>
        </PageTransition>
    }
}

#[wasm_bindgen_test]
async fn page_transition_reveals_after_delay() {
    let host = mount_point();
    let reveals = Rc::new(Cell::new(0_u32));
    yew::Renderer::<TransitionPage>::with_root_and_props(
        host.clone(),
        TransitionPageProps { reveals: reveals.clone() },
    )
    .render();
    settle(0).await;
    assert_eq!(
        find(&host, "page").get_attribute("data-state").as_deref(),
        Some("hidden")
    );
    assert_eq!(reveals.get(), 0);

    settle(60).await;
    let page = find(&host, "page");
    assert_eq!(page.get_attribute("data-state").as_deref(), Some("visible"));
    assert!(page.get_attribute("class").unwrap().contains("opacity-100"));
    assert_eq!(reveals.get(), 1);
}

#[wasm_bindgen_test]
async fn page_transition_unmounted_before_delay_stays_quiet() {
    let host = mount_point();
    let reveals = Rc::new(Cell::new(0_u32));
    let handle = yew::Renderer::<TransitionPage>::with_root_and_props(
        host.clone(),
        TransitionPageProps { reveals: reveals.clone() },
    )
    .render();
    settle(0).await;
    let page = find(&host, "page");
    assert_eq!(page.get_attribute("data-state").as_deref(), Some("hidden"));

    handle.destroy();
    settle(60).await;
    assert_eq!(host.child_element_count(), 0);
    assert_eq!(reveals.get(), 0);
    assert_eq!(page.get_attribute("data-state").as_deref(), Some("hidden"));
}
