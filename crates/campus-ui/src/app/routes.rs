//! Routing definitions for the showcase app.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Dashboard,
    #[at("/courses")]
    Courses,
    #[at("/courses/new")]
    NewCourse,
    #[at("/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entries shown in the top navigation.
    pub(crate) const fn nav() -> [(Self, &'static str); 3] {
        [
            (Self::Dashboard, "Dashboard"),
            (Self::Courses, "Courses"),
            (Self::Settings, "Settings"),
        ]
    }
}
