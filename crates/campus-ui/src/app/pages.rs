//! Showcase pages composed from the component kit.

use super::Route;
use super::preferences::persist_motion_settings;
use crate::components::icons::{
    IconBookOpen, IconClipboardCheck, IconInbox, IconMegaphone, IconUsers,
};
use crate::components::{
    AnnouncementCardSkeleton, AssignmentCardSkeleton, Button, ButtonVariant, CourseCardSkeleton,
    EmptyState, EmptyStateAction, GlassCard, GlassCardContent, GlassCardDescription,
    GlassCardFooter, GlassCardHeader, GlassCardTitle, PageHeaderSkeleton, PageTransition,
    StaggerContainer, StatCardSkeleton, TableRowSkeleton,
};
use crate::core::settings::STAGGER_PRESETS_MS;
use crate::core::store::MotionStore;
use gloo::console;
use gloo::timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Simulated fetch latency for the dashboard preview.
const DASHBOARD_LOAD_MS: u32 = 1_200;

struct DemoStat {
    label: &'static str,
    value: &'static str,
    hint: &'static str,
}

const DEMO_STATS: [DemoStat; 4] = [
    DemoStat {
        label: "Active courses",
        value: "0",
        hint: "Publish a course to see it here",
    },
    DemoStat {
        label: "Students",
        value: "0",
        hint: "Across all sections",
    },
    DemoStat {
        label: "Assignments due",
        value: "0",
        hint: "In the next 7 days",
    },
    DemoStat {
        label: "Announcements",
        value: "0",
        hint: "Posted this term",
    },
];

struct DemoCourse {
    code: &'static str,
    title: &'static str,
    summary: &'static str,
    students: u32,
}

const DEMO_COURSES: [DemoCourse; 3] = [
    DemoCourse {
        code: "CS 101",
        title: "Introduction to Programming",
        summary: "Variables, control flow and the first taste of types.",
        students: 124,
    },
    DemoCourse {
        code: "MATH 210",
        title: "Linear Algebra",
        summary: "Vector spaces, matrices and eigenvalues.",
        students: 87,
    },
    DemoCourse {
        code: "HIST 150",
        title: "Modern World History",
        summary: "From the industrial revolution to the present day.",
        students: 63,
    },
];

#[function_component(DashboardPage)]
pub(super) fn dashboard_page() -> Html {
    let loading = use_state(|| true);
    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                let timer = Timeout::new(DASHBOARD_LOAD_MS, move || loading.set(false));
                move || drop(timer)
            },
            (),
        );
    }

    if *loading {
        return html! {
            <div data-testid="dashboard-loading">
                <PageHeaderSkeleton />
                <div class="grid gap-5 sm:grid-cols-2 xl:grid-cols-4">
                    {for (0..DEMO_STATS.len()).map(|_| html! { <StatCardSkeleton /> })}
                </div>
                <div class="mt-8 grid gap-5 md:grid-cols-3">
                    {for (0..3).map(|_| html! { <CourseCardSkeleton /> })}
                </div>
                <div class="mt-8 grid gap-5 md:grid-cols-2">
                    <AssignmentCardSkeleton />
                    <AnnouncementCardSkeleton />
                </div>
                <table class="mt-8 w-full">
                    <tbody>
                        {for (0..3).map(|_| html! { <TableRowSkeleton columns={4_usize} /> })}
                    </tbody>
                </table>
            </div>
        };
    }

    html! {
        <PageTransition test_id="dashboard" on_reveal={scroll_to_top()}>
            <PageHeading title="Dashboard" subtitle="Your teaching week at a glance." />
            <StaggerContainer class="grid gap-5 sm:grid-cols-2 xl:grid-cols-4">
                {for DEMO_STATS.iter().map(|stat| html! {
                    <GlassCard hover=true>
                        <GlassCardHeader>
                            <GlassCardDescription>{stat.label}</GlassCardDescription>
                            <GlassCardTitle class="text-3xl">{stat.value}</GlassCardTitle>
                        </GlassCardHeader>
                        <GlassCardContent class="text-xs text-base-content/50">{stat.hint}</GlassCardContent>
                    </GlassCard>
                })}
            </StaggerContainer>
            <GlassCard class="mt-8">
                <EmptyState
                    icon={html! { <IconBookOpen size={AttrValue::from("8")} /> }}
                    title="No courses yet"
                    description="Create your first course to get started"
                    action={EmptyStateAction::link("Create Course", "/courses/new")}
                    test_id="dashboard-courses-empty"
                />
            </GlassCard>
        </PageTransition>
    }
}

#[function_component(CoursesPage)]
pub(super) fn courses_page() -> Html {
    let navigator = use_navigator();
    let open_new = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::NewCourse);
        }
    });
    let cards = DEMO_COURSES
        .iter()
        .map(|course| {
            html! {
                <GlassCard hover=true>
                    <GlassCardHeader>
                        <span class="text-xs font-medium uppercase tracking-wide text-primary">{course.code}</span>
                        <GlassCardTitle>{course.title}</GlassCardTitle>
                        <GlassCardDescription>{course.summary}</GlassCardDescription>
                    </GlassCardHeader>
                    <GlassCardFooter class="gap-2 text-sm text-base-content/60">
                        <IconUsers size={AttrValue::from("4")} />
                        {format!("{} students", course.students)}
                    </GlassCardFooter>
                </GlassCard>
            }
        })
        .collect::<Html>();

    html! {
        <PageTransition test_id="courses" on_reveal={scroll_to_top()}>
            <PageHeading title="Courses" subtitle="Everything you teach this term.">
                <Button onclick={open_new}>{"New course"}</Button>
            </PageHeading>
            <StaggerContainer class="grid gap-5 md:grid-cols-2 xl:grid-cols-3" test_id="course-grid">
                {cards}
            </StaggerContainer>
            <div class="mt-10 grid gap-5 md:grid-cols-2">
                <GlassCard>
                    <EmptyState
                        icon={html! { <IconClipboardCheck /> }}
                        title="No assignments"
                        description="Assignments you create will show up here."
                        test_id="assignments-empty"
                    />
                </GlassCard>
                <GlassCard>
                    <EmptyState
                        icon={html! { <IconMegaphone /> }}
                        title="No announcements"
                        description="Keep students in the loop with a quick update."
                        test_id="announcements-empty"
                    />
                </GlassCard>
            </div>
        </PageTransition>
    }
}

#[function_component(NewCoursePage)]
pub(super) fn new_course_page() -> Html {
    let drafts = use_state(|| 0_u32);
    let start_draft = {
        let drafts = drafts.clone();
        Callback::from(move |_: MouseEvent| {
            let next = *drafts + 1;
            console::log!("course draft started", next);
            drafts.set(next);
        })
    };
    html! {
        <PageTransition test_id="new-course" on_reveal={scroll_to_top()}>
            <PageHeading title="New course" subtitle="Start from scratch or from a template." />
            <GlassCard glow=true>
                <EmptyState
                    icon={html! { <IconBookOpen size={AttrValue::from("8")} /> }}
                    title="Start a blank course"
                    description="You can add modules, assignments and announcements later."
                    action={EmptyStateAction::button("Start draft", start_draft)}
                    test_id="new-course-empty"
                />
                {(*drafts > 0).then(|| html! {
                    <p class="pb-6 text-center text-sm text-base-content/60">
                        {format!("{} draft(s) started", *drafts)}
                    </p>
                }).unwrap_or_default()}
            </GlassCard>
        </PageTransition>
    }
}

#[function_component(SettingsPage)]
pub(super) fn settings_page() -> Html {
    let (store, dispatch) = use_store::<MotionStore>();
    let update = {
        let dispatch = dispatch.clone();
        move |apply: fn(&mut MotionStore)| {
            let dispatch = dispatch.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|store| {
                    apply(store);
                    persist_motion_settings(&store.settings);
                });
            })
        }
    };
    let toggle_reduced = update(|store| store.settings.reduced_motion = !store.settings.reduced_motion);
    let toggle_glow = update(|store| store.settings.glow_animated = !store.settings.glow_animated);
    let settings = store.settings;

    html! {
        <PageTransition test_id="settings" on_reveal={scroll_to_top()}>
            <PageHeading title="Settings" subtitle="Motion and animation preferences." />
            <GlassCard>
                <GlassCardHeader>
                    <GlassCardTitle>{"Motion"}</GlassCardTitle>
                    <GlassCardDescription>
                        {if store.system_reduced_motion {
                            "Your system asks for reduced motion; animations stay off."
                        } else {
                            "Animations follow the choices below."
                        }}
                    </GlassCardDescription>
                </GlassCardHeader>
                <GlassCardContent class="space-y-4">
                    <SettingRow label="Reduce motion" pressed={settings.reduced_motion} onclick={toggle_reduced} />
                    <SettingRow label="Animate background glow" pressed={settings.glow_animated} onclick={toggle_glow} />
                    <div class="flex items-center justify-between gap-4">
                        <span class="text-sm">{"Stagger delay"}</span>
                        <div class="join">
                            {for STAGGER_PRESETS_MS.into_iter().map(|preset| {
                                let dispatch = dispatch.clone();
                                let onclick = Callback::from(move |_: MouseEvent| {
                                    dispatch.reduce_mut(|store| {
                                        store.settings.stagger_delay_ms = preset;
                                        persist_motion_settings(&store.settings);
                                    });
                                });
                                let variant = if settings.stagger_delay_ms == preset {
                                    ButtonVariant::Primary
                                } else {
                                    ButtonVariant::Ghost
                                };
                                html! {
                                    <Button class="join-item btn-sm" variant={variant} onclick={onclick}>
                                        {format!("{preset} ms")}
                                    </Button>
                                }
                            })}
                        </div>
                    </div>
                </GlassCardContent>
            </GlassCard>
        </PageTransition>
    }
}

#[function_component(NotFoundPage)]
pub(super) fn not_found_page() -> Html {
    html! {
        <PageTransition test_id="not-found" on_reveal={scroll_to_top()}>
            <EmptyState
                icon={html! { <IconInbox size={AttrValue::from("8")} /> }}
                title="Page not found"
                description="The page you were looking for does not exist."
                action={EmptyStateAction::link("Back to dashboard", "/")}
                test_id="not-found-empty"
            />
        </PageTransition>
    }
}

/// Freshly revealed pages start at the top of the viewport.
fn scroll_to_top() -> Callback<()> {
    Callback::from(|()| gloo::utils::window().scroll_to_with_x_and_y(0.0, 0.0))
}

#[derive(Properties, PartialEq)]
struct PageHeadingProps {
    title: AttrValue,
    #[prop_or_default]
    subtitle: Option<AttrValue>,
    #[prop_or_default]
    children: Children,
}

#[function_component(PageHeading)]
fn page_heading(props: &PageHeadingProps) -> Html {
    html! {
        <div class="flex items-center justify-between gap-4 pb-6">
            <div>
                <h1 class="text-3xl font-bold tracking-tight">{props.title.clone()}</h1>
                {props.subtitle.clone().map(|text| html! {
                    <p class="mt-1 text-base-content/60">{text}</p>
                }).unwrap_or_default()}
            </div>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SettingRowProps {
    label: AttrValue,
    pressed: bool,
    onclick: Callback<MouseEvent>,
}

#[function_component(SettingRow)]
fn setting_row(props: &SettingRowProps) -> Html {
    let state = if props.pressed { "On" } else { "Off" };
    html! {
        <div class="flex items-center justify-between gap-4">
            <span class="text-sm">{props.label.clone()}</span>
            <button
                type="button"
                class={classes!("btn", "btn-sm", props.pressed.then_some("btn-primary"))}
                aria-pressed={props.pressed.to_string()}
                onclick={props.onclick.clone()}
            >
                {state}
            </button>
        </div>
    }
}
