//! Entrance animation timing shared by page transitions and stagger lists.
//!
//! # Design
//! - Keep every timing decision here so it can be tested without a DOM.
//! - Components own the timers; this module only decides what they do.

/// Per-item stagger offset used when a container does not override it.
pub const DEFAULT_STAGGER_DELAY_MS: u32 = 50;
/// Delay before a freshly mounted page starts fading in.
pub const REVEAL_DELAY_MS: u32 = 10;
/// Duration of the page fade/slide transition.
pub const TRANSITION_DURATION_MS: u32 = 300;

/// Classes applied to a page wrapper before it is revealed.
pub const HIDDEN_CLASSES: &str = "opacity-0 translate-y-4";
/// Classes applied to a page wrapper once it is revealed.
pub const VISIBLE_CLASSES: &str = "opacity-100 translate-y-0";
/// Entrance animation applied to each staggered item.
pub const STAGGER_ITEM_CLASS: &str = "animate-fade-in-up";

/// Animation start offset for the item at `index`.
#[must_use]
pub fn stagger_delay_ms(index: usize, stagger_ms: u32) -> u64 {
    u64::try_from(index)
        .unwrap_or(u64::MAX)
        .saturating_mul(u64::from(stagger_ms))
}

/// Shape of the children handed to a stagger container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildShape {
    /// One standalone element.
    Single,
    /// An ordered sequence of `n` elements.
    Sequence(usize),
}

impl ChildShape {
    /// Classify children: a lone child is [`ChildShape::Single`] unless it
    /// is itself a list, in which case its length counts.
    #[must_use]
    pub const fn classify(top_level: usize, lone_list_len: Option<usize>) -> Self {
        match (top_level, lone_list_len) {
            (1, Some(len)) => Self::Sequence(len),
            (1, None) => Self::Single,
            (count, _) => Self::Sequence(count),
        }
    }
}

/// How a stagger container lays out its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StaggerLayout {
    /// A lone child is rendered as-is, without a wrapper or delay.
    Passthrough,
    /// Each child gets its own wrapper; delays are listed in child order.
    Cascade(Vec<u64>),
}

/// Decide the layout for children spaced `stagger_ms` apart.
#[must_use]
pub fn plan_stagger(shape: ChildShape, stagger_ms: u32) -> StaggerLayout {
    match shape {
        ChildShape::Single => StaggerLayout::Passthrough,
        ChildShape::Sequence(count) => StaggerLayout::Cascade(
            (0..count)
                .map(|index| stagger_delay_ms(index, stagger_ms))
                .collect(),
        ),
    }
}

/// Inline style carrying a staggered item's animation delay.
#[must_use]
pub fn animation_delay_style(delay_ms: u64) -> String {
    format!("animation-delay:{delay_ms}ms;")
}

/// Inline style for the page wrapper transition.
#[must_use]
pub fn transition_style(duration_ms: u32) -> String {
    format!("transition:opacity {duration_ms}ms ease-out,transform {duration_ms}ms ease-out;")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum RevealPhase {
    /// Mounted, waiting for the reveal timer.
    Pending,
    /// Timer fired while mounted; content is visible.
    Revealed,
    /// Torn down before or after reveal; no further changes are allowed.
    Disposed,
}

/// DOM-free reveal state machine backing `PageTransition`.
///
/// The component schedules a timer for [`Reveal::delay_ms`], calls
/// [`Reveal::fire`] from it, and calls [`Reveal::dispose`] on teardown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    phase: RevealPhase,
    delay_ms: u32,
}

impl Reveal {
    /// A reveal that waits `delay_ms` before showing content.
    #[must_use]
    pub const fn deferred(delay_ms: u32) -> Self {
        Self {
            phase: RevealPhase::Pending,
            delay_ms,
        }
    }

    /// A reveal that is visible from the first render (reduced motion).
    #[must_use]
    pub const fn immediate() -> Self {
        Self {
            phase: RevealPhase::Revealed,
            delay_ms: 0,
        }
    }

    /// Delay the owner should wait before calling [`Reveal::fire`].
    #[must_use]
    pub const fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Whether the owner still needs to schedule a timer.
    #[must_use]
    pub const fn needs_timer(&self) -> bool {
        matches!(self.phase, RevealPhase::Pending)
    }

    /// Whether content should currently be shown.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(self.phase, RevealPhase::Revealed)
    }

    /// Timer callback. Returns `true` when the owner must publish the reveal.
    pub const fn fire(&mut self) -> bool {
        if self.needs_timer() {
            self.phase = RevealPhase::Revealed;
            true
        } else {
            false
        }
    }

    /// Teardown. Any later [`Reveal::fire`] becomes a no-op.
    pub const fn dispose(&mut self) {
        self.phase = RevealPhase::Disposed;
    }
}

/// Wrapper classes for the current reveal state.
#[must_use]
pub const fn reveal_classes(visible: bool) -> &'static str {
    if visible {
        VISIBLE_CLASSES
    } else {
        HIDDEN_CLASSES
    }
}

/// Value for the wrapper's `data-state` attribute.
#[must_use]
pub const fn reveal_state_attr(visible: bool) -> &'static str {
    if visible { "visible" } else { "hidden" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delay_is_index_times_step() {
        for step in [0, 1, 50, 120] {
            for index in 0..12 {
                assert_eq!(
                    stagger_delay_ms(index, step),
                    index as u64 * u64::from(step)
                );
            }
        }
    }

    #[test]
    fn stagger_delay_saturates() {
        assert_eq!(stagger_delay_ms(usize::MAX, u32::MAX), u64::MAX);
    }

    #[test]
    fn classify_unwraps_a_lone_list() {
        assert_eq!(ChildShape::classify(1, None), ChildShape::Single);
        assert_eq!(ChildShape::classify(1, Some(1)), ChildShape::Sequence(1));
        assert_eq!(ChildShape::classify(1, Some(4)), ChildShape::Sequence(4));
        assert_eq!(ChildShape::classify(3, None), ChildShape::Sequence(3));
        assert_eq!(ChildShape::classify(0, None), ChildShape::Sequence(0));
    }

    #[test]
    fn plan_cascades_sequences_and_passes_single_child_through() {
        assert_eq!(
            plan_stagger(ChildShape::Single, 50),
            StaggerLayout::Passthrough
        );
        assert_eq!(
            plan_stagger(ChildShape::Sequence(0), 50),
            StaggerLayout::Cascade(Vec::new())
        );
        assert_eq!(
            plan_stagger(ChildShape::Sequence(1), 50),
            StaggerLayout::Cascade(vec![0])
        );
        assert_eq!(
            plan_stagger(ChildShape::Sequence(4), DEFAULT_STAGGER_DELAY_MS),
            StaggerLayout::Cascade(vec![0, 50, 100, 150])
        );
        assert_eq!(
            plan_stagger(ChildShape::Sequence(3), 0),
            StaggerLayout::Cascade(vec![0, 0, 0])
        );
    }

    #[test]
    fn styles_render_millisecond_values() {
        assert_eq!(animation_delay_style(150), "animation-delay:150ms;");
        assert_eq!(
            transition_style(TRANSITION_DURATION_MS),
            "transition:opacity 300ms ease-out,transform 300ms ease-out;"
        );
    }

    #[test]
    fn deferred_reveal_shows_on_first_fire_only() {
        let mut reveal = Reveal::deferred(REVEAL_DELAY_MS);
        assert!(!reveal.is_visible());
        assert!(reveal.needs_timer());
        assert_eq!(reveal.delay_ms(), REVEAL_DELAY_MS);

        assert!(reveal.fire());
        assert!(reveal.is_visible());
        assert!(!reveal.needs_timer());
        assert!(!reveal.fire());
        assert!(reveal.is_visible());
    }

    #[test]
    fn dispose_before_delay_blocks_late_fire() {
        let mut reveal = Reveal::deferred(REVEAL_DELAY_MS);
        reveal.dispose();
        assert!(!reveal.needs_timer());
        assert!(!reveal.fire());
        assert!(!reveal.is_visible());
    }

    #[test]
    fn dispose_after_reveal_hides_and_stays_quiet() {
        let mut reveal = Reveal::deferred(REVEAL_DELAY_MS);
        assert!(reveal.fire());
        reveal.dispose();
        assert!(!reveal.is_visible());
        assert!(!reveal.fire());
    }

    #[test]
    fn immediate_reveal_needs_no_timer() {
        let mut reveal = Reveal::immediate();
        assert!(reveal.is_visible());
        assert!(!reveal.needs_timer());
        assert!(!reveal.fire());
    }

    #[test]
    fn reveal_classes_follow_visibility() {
        assert_eq!(reveal_classes(false), HIDDEN_CLASSES);
        assert_eq!(reveal_classes(true), VISIBLE_CLASSES);
        assert_eq!(reveal_state_attr(false), "hidden");
        assert_eq!(reveal_state_attr(true), "visible");
    }
}
