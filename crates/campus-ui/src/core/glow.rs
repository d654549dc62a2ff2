//! Decorative glow layer tables for page backgrounds.

/// Glow preset rendered behind page content.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GlowVariant {
    /// Two balanced layers for regular pages.
    #[default]
    Default,
    /// Three bright layers for landing and hero sections.
    Hero,
    /// Two faint layers for dense, data-heavy pages.
    Subtle,
}

/// A single radial-gradient layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlowLayer {
    /// Placement and size utilities.
    pub placement: &'static str,
    /// Gradient and blur utilities.
    pub fill: &'static str,
    /// Animation utility applied when the background is animated.
    pub animation: &'static str,
}

impl GlowLayer {
    /// Full class list for the layer.
    #[must_use]
    pub fn class(&self, animated: bool) -> String {
        let mut class = format!("glow-layer absolute rounded-full {} {}", self.placement, self.fill);
        if animated {
            class.push(' ');
            class.push_str(self.animation);
        }
        class
    }
}

const DEFAULT_LAYERS: [GlowLayer; 2] = [
    GlowLayer {
        placement: "-top-40 -left-32 h-[32rem] w-[32rem]",
        fill: "bg-[radial-gradient(circle,rgba(99,102,241,0.25),transparent_70%)] blur-3xl",
        animation: "animate-glow-pulse",
    },
    GlowLayer {
        placement: "-bottom-40 -right-32 h-[28rem] w-[28rem]",
        fill: "bg-[radial-gradient(circle,rgba(236,72,153,0.18),transparent_70%)] blur-3xl",
        animation: "animate-glow-drift",
    },
];

const HERO_LAYERS: [GlowLayer; 3] = [
    GlowLayer {
        placement: "-top-48 left-1/4 h-[40rem] w-[40rem]",
        fill: "bg-[radial-gradient(circle,rgba(99,102,241,0.35),transparent_65%)] blur-3xl",
        animation: "animate-glow-pulse",
    },
    GlowLayer {
        placement: "top-1/3 -right-40 h-[34rem] w-[34rem]",
        fill: "bg-[radial-gradient(circle,rgba(168,85,247,0.3),transparent_65%)] blur-3xl",
        animation: "animate-glow-drift",
    },
    GlowLayer {
        placement: "-bottom-48 -left-24 h-[30rem] w-[30rem]",
        fill: "bg-[radial-gradient(circle,rgba(14,165,233,0.25),transparent_70%)] blur-3xl",
        animation: "animate-glow-pulse [animation-delay:2s]",
    },
];

const SUBTLE_LAYERS: [GlowLayer; 2] = [
    GlowLayer {
        placement: "-top-32 right-0 h-[24rem] w-[24rem]",
        fill: "bg-[radial-gradient(circle,rgba(99,102,241,0.12),transparent_70%)] blur-3xl",
        animation: "animate-glow-pulse",
    },
    GlowLayer {
        placement: "bottom-0 -left-24 h-[20rem] w-[20rem]",
        fill: "bg-[radial-gradient(circle,rgba(148,163,184,0.1),transparent_70%)] blur-3xl",
        animation: "animate-glow-drift",
    },
];

impl GlowVariant {
    /// Lowercase name exposed as `data-variant`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Hero => "hero",
            Self::Subtle => "subtle",
        }
    }

    /// Fixed layer set for the variant.
    #[must_use]
    pub const fn layers(self) -> &'static [GlowLayer] {
        match self {
            Self::Default => &DEFAULT_LAYERS,
            Self::Hero => &HERO_LAYERS,
            Self::Subtle => &SUBTLE_LAYERS,
        }
    }
}
