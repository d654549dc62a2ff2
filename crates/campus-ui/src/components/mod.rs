//! Presentational components composed by page views.

pub mod button;
pub mod empty_state;
pub mod foundations;
pub mod glass_card;
pub mod glow_background;
pub mod icons;
pub mod skeleton;
pub mod transition;

pub use button::{Button, ButtonVariant};
pub use empty_state::{EmptyState, EmptyStateAction};
pub use glass_card::{
    GlassCard, GlassCardContent, GlassCardDescription, GlassCardFooter, GlassCardHeader,
    GlassCardTitle,
};
pub use glow_background::GlowBackground;
pub use skeleton::{
    AnnouncementCardSkeleton, AssignmentCardSkeleton, CourseCardSkeleton, PageHeaderSkeleton,
    Skeleton, StatCardSkeleton, TableRowSkeleton,
};
pub use transition::{PageTransition, StaggerContainer};
