//! Call-to-action resolution for empty states and test identifier helpers.

/// What an empty-state action renders as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionKind {
    /// Navigation element pointing at the href.
    Link(String),
    /// Button that invokes the action callback.
    Button,
}

impl ActionKind {
    /// A non-blank href wins; anything else falls back to a button.
    #[must_use]
    pub fn resolve(href: Option<&str>) -> Self {
        match href.map(str::trim) {
            Some(target) if !target.is_empty() => Self::Link(target.to_string()),
            _ => Self::Button,
        }
    }
}

/// Test identifier for an element derived from its parent's identifier.
#[must_use]
pub fn child_test_id(parent: Option<&str>, suffix: &str) -> Option<String> {
    parent.map(|id| format!("{id}-{suffix}"))
}

/// Test identifier of an empty state's action element.
#[must_use]
pub fn action_test_id(parent: Option<&str>) -> Option<String> {
    child_test_id(parent, "action")
}

/// Modifier and button state of a link click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Mouse button index (0 is the primary button).
    pub button: i16,
    /// Ctrl key held.
    pub ctrl: bool,
    /// Meta/Cmd key held.
    pub meta: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt key held.
    pub alt: bool,
}

/// Whether the href is a same-origin absolute path the router can handle.
#[must_use]
pub fn is_client_route(href: &str) -> bool {
    href.starts_with('/') && !href.starts_with("//")
}

/// Whether a link click should be handled by the client-side router
/// instead of the browser.
#[must_use]
pub fn should_route_client_side(href: &str, click: ClickModifiers) -> bool {
    is_client_route(href)
        && click.button == 0
        && !(click.ctrl || click.meta || click.shift || click.alt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_selects_link() {
        assert_eq!(
            ActionKind::resolve(Some("/courses/new")),
            ActionKind::Link("/courses/new".into())
        );
    }

    #[test]
    fn missing_or_blank_href_selects_button() {
        assert_eq!(ActionKind::resolve(None), ActionKind::Button);
        assert_eq!(ActionKind::resolve(Some("")), ActionKind::Button);
        assert_eq!(ActionKind::resolve(Some("   ")), ActionKind::Button);
    }

    #[test]
    fn action_test_id_derives_from_parent() {
        assert_eq!(
            action_test_id(Some("courses-empty")),
            Some("courses-empty-action".into())
        );
        assert_eq!(action_test_id(None), None);
    }

    #[test]
    fn only_plain_primary_clicks_on_local_paths_route_client_side() {
        let plain = ClickModifiers::default();
        assert!(should_route_client_side("/courses/new", plain));
        assert!(!should_route_client_side("https://example.com", plain));
        assert!(!should_route_client_side("//cdn.example.com/a", plain));
        assert!(!should_route_client_side("courses", plain));
        assert!(!should_route_client_side(
            "/courses",
            ClickModifiers {
                meta: true,
                ..plain
            }
        ));
        assert!(!should_route_client_side(
            "/courses",
            ClickModifiers { button: 1, ..plain }
        ));
    }
}
