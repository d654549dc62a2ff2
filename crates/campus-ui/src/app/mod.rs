//! Showcase application: router, shell and motion preference wiring.

use crate::components::GlowBackground;
use crate::core::glow::GlowVariant;
use crate::core::store::MotionStore;
use gloo::console;
use gloo::events::EventListener;
use pages::{CoursesPage, DashboardPage, NewCoursePage, NotFoundPage, SettingsPage};
use preferences::{load_motion_settings, reduced_motion_query};
pub(crate) use routes::Route;
use web_sys::MediaQueryList;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::Dispatch;

mod pages;
mod preferences;
mod routes;

#[function_component(CampusApp)]
fn campus_app() -> Html {
    use_effect_with_deps(
        |_| {
            let listener = reduced_motion_query().map(|list| {
                let target = list.clone();
                EventListener::new(&list, "change", move |_| {
                    let matches = target.matches();
                    Dispatch::<MotionStore>::new()
                        .reduce_mut(|store| store.system_reduced_motion = matches);
                })
            });
            move || drop(listener)
        },
        (),
    );

    html! {
        <BrowserRouter>
            <AppShell>
                <Switch<Route> render={switch} />
            </AppShell>
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <DashboardPage /> },
        Route::Courses => html! { <CoursesPage /> },
        Route::NewCourse => html! { <NewCoursePage /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[derive(Properties, PartialEq)]
struct AppShellProps {
    #[prop_or_default]
    children: Children,
}

#[function_component(AppShell)]
fn app_shell(props: &AppShellProps) -> Html {
    let current = use_route::<Route>();
    let variant = if current == Some(Route::Dashboard) {
        GlowVariant::Hero
    } else {
        GlowVariant::Subtle
    };
    html! {
        <div class="relative min-h-screen isolate">
            <GlowBackground variant={variant} fixed=true />
            <header class="sticky top-0 z-20 border-b border-white/10 bg-base-100/60 backdrop-blur">
                <nav class="mx-auto flex max-w-6xl items-center gap-6 px-6 py-4">
                    <span class="font-semibold tracking-tight">{"Campus"}</span>
                    {for Route::nav().into_iter().map(|(route, label)| {
                        let active = current.as_ref() == Some(&route);
                        html! {
                            <Link<Route>
                                to={route}
                                classes={classes!("text-sm", if active { "text-base-content" } else { "text-base-content/60" })}
                            >
                                {label}
                            </Link<Route>>
                        }
                    })}
                </nav>
            </header>
            <main class="mx-auto max-w-6xl px-6 py-10">
                { for props.children.iter() }
            </main>
        </div>
    }
}

/// Seed the motion store from storage and the system preference, then mount
/// the showcase app.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let settings = load_motion_settings();
    let system_reduced = reduced_motion_query()
        .as_ref()
        .is_some_and(MediaQueryList::matches);
    Dispatch::<MotionStore>::new().reduce_mut(|store| {
        store.settings = settings;
        store.system_reduced_motion = system_reduced;
    });
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<CampusApp>::with_root(root).render();
    } else {
        console::warn!("#root missing; mounting on body");
        yew::Renderer::<CampusApp>::new().render();
    }
}
