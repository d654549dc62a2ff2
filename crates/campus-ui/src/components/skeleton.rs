//! Loading placeholders shaped like the cards and rows they stand in for.
//!
//! # Design
//! - Every layout is a fixed shape; only the base block takes dimensions.
//! - Each layout carries a stable `data-testid` so page tests can wait on it.

use crate::components::glass_card::{GlassCard, GlassCardContent, GlassCardFooter, GlassCardHeader};
use crate::core::skeleton::{DEFAULT_TABLE_COLUMNS, block_style, table_cell_widths};
use yew::prelude::*;

/// Props for [`Skeleton`].
#[derive(Properties, PartialEq)]
pub struct SkeletonProps {
    /// CSS width, e.g. `"6rem"`.
    #[prop_or_default]
    pub width: Option<AttrValue>,
    /// CSS height, e.g. `"1rem"`.
    #[prop_or_default]
    pub height: Option<AttrValue>,
    /// Extra classes (usually Tailwind sizing utilities).
    #[prop_or_default]
    pub class: Classes,
    /// Keep rounded corners; square blocks drop them.
    #[prop_or(true)]
    pub rounded: bool,
}

/// Single pulsing placeholder block.
#[function_component(Skeleton)]
pub fn skeleton(props: &SkeletonProps) -> Html {
    let style = block_style(props.width.as_deref(), props.height.as_deref());
    let classes = classes!(
        "skeleton",
        "animate-pulse",
        "bg-white/10",
        (!props.rounded).then_some("rounded-none"),
        props.class.clone()
    );
    html! {
        <div class={classes} style={style} aria-hidden="true" />
    }
}

/// Props shared by the fixed-shape card skeletons.
#[derive(Properties, PartialEq)]
pub struct CardSkeletonProps {
    /// Extra classes for the outer card.
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder for a dashboard statistic card.
#[function_component(StatCardSkeleton)]
pub fn stat_card_skeleton(props: &CardSkeletonProps) -> Html {
    html! {
        <GlassCard class={props.class.clone()} test_id="skeleton-stat-card" busy=true>
            <GlassCardContent class="flex items-center justify-between p-6">
                <div class="space-y-3">
                    <Skeleton class="h-4 w-24" />
                    <Skeleton class="h-8 w-16" />
                    <Skeleton class="h-3 w-32" />
                </div>
                <Skeleton class="h-12 w-12 rounded-xl" />
            </GlassCardContent>
        </GlassCard>
    }
}

/// Placeholder for a course tile with cover image.
#[function_component(CourseCardSkeleton)]
pub fn course_card_skeleton(props: &CardSkeletonProps) -> Html {
    html! {
        <GlassCard class={classes!("overflow-hidden", props.class.clone())} test_id="skeleton-course-card" busy=true>
            <Skeleton class="h-40 w-full" rounded=false />
            <GlassCardHeader>
                <Skeleton class="h-5 w-3/4" />
                <Skeleton class="h-4 w-1/2" />
            </GlassCardHeader>
            <GlassCardContent class="space-y-2">
                <Skeleton class="h-3 w-full" />
                <Skeleton class="h-3 w-5/6" />
            </GlassCardContent>
            <GlassCardFooter class="flex items-center justify-between">
                <div class="flex items-center gap-2">
                    <Skeleton class="h-8 w-8 rounded-full" />
                    <Skeleton class="h-3 w-20" />
                </div>
                <Skeleton class="h-6 w-16 rounded-full" />
            </GlassCardFooter>
        </GlassCard>
    }
}

/// Placeholder for an assignment row card.
#[function_component(AssignmentCardSkeleton)]
pub fn assignment_card_skeleton(props: &CardSkeletonProps) -> Html {
    html! {
        <GlassCard class={props.class.clone()} test_id="skeleton-assignment-card" busy=true>
            <GlassCardContent class="flex items-start justify-between gap-4 p-5">
                <div class="flex-1 space-y-2">
                    <Skeleton class="h-5 w-2/3" />
                    <Skeleton class="h-3 w-1/3" />
                    <div class="flex gap-3 pt-1">
                        <Skeleton class="h-3 w-24" />
                        <Skeleton class="h-3 w-16" />
                    </div>
                </div>
                <Skeleton class="h-6 w-20 rounded-full" />
            </GlassCardContent>
        </GlassCard>
    }
}

/// Placeholder for an announcement with author line and body.
#[function_component(AnnouncementCardSkeleton)]
pub fn announcement_card_skeleton(props: &CardSkeletonProps) -> Html {
    html! {
        <GlassCard class={props.class.clone()} test_id="skeleton-announcement-card" busy=true>
            <GlassCardHeader class="flex flex-row items-center gap-3">
                <Skeleton class="h-10 w-10 rounded-full" />
                <div class="space-y-2">
                    <Skeleton class="h-4 w-32" />
                    <Skeleton class="h-3 w-20" />
                </div>
            </GlassCardHeader>
            <GlassCardContent class="space-y-2">
                <Skeleton class="h-3 w-full" />
                <Skeleton class="h-3 w-full" />
                <Skeleton class="h-3 w-2/3" />
            </GlassCardContent>
        </GlassCard>
    }
}

/// Props for [`TableRowSkeleton`].
#[derive(Properties, PartialEq)]
pub struct TableRowSkeletonProps {
    /// Number of placeholder cells.
    #[prop_or(DEFAULT_TABLE_COLUMNS)]
    pub columns: usize,
    /// Extra classes for the row.
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder table row with one cell per column.
#[function_component(TableRowSkeleton)]
pub fn table_row_skeleton(props: &TableRowSkeletonProps) -> Html {
    html! {
        <tr class={classes!("border-b", "border-white/5", props.class.clone())} data-testid="skeleton-table-row" aria-busy="true">
            {for table_cell_widths(props.columns).into_iter().map(|width| html! {
                <td class="px-4 py-3">
                    <Skeleton class={classes!("h-4", width)} />
                </td>
            })}
        </tr>
    }
}

/// Props for [`PageHeaderSkeleton`].
#[derive(Properties, PartialEq)]
pub struct PageHeaderSkeletonProps {
    /// Reserve space for a primary action button.
    #[prop_or(true)]
    pub with_action: bool,
    /// Extra classes.
    #[prop_or_default]
    pub class: Classes,
}

/// Placeholder for a page title, subtitle and action.
#[function_component(PageHeaderSkeleton)]
pub fn page_header_skeleton(props: &PageHeaderSkeletonProps) -> Html {
    html! {
        <div
            class={classes!("flex", "items-center", "justify-between", "gap-4", "pb-6", props.class.clone())}
            data-testid="skeleton-page-header"
            aria-busy="true"
        >
            <div class="space-y-2">
                <Skeleton class="h-8 w-64" />
                <Skeleton class="h-4 w-96 max-w-full" />
            </div>
            {props.with_action.then(|| html! { <Skeleton class="h-10 w-32 rounded-lg" /> }).unwrap_or_default()}
        </div>
    }
}
