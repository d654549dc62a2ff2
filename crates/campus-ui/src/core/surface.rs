//! Class composition for frosted-glass card surfaces.

/// Base classes every glass card carries.
pub const GLASS_BASE: &str =
    "glass-card rounded-2xl border border-white/10 bg-white/5 shadow-lg backdrop-blur-xl";
/// Hover lift for interactive cards.
pub const GLASS_HOVER: &str =
    "transition-all duration-300 hover:-translate-y-0.5 hover:border-white/20 hover:bg-white/10";
/// Accent ring for highlighted cards.
pub const GLASS_GLOW: &str = "ring-1 ring-primary/30 shadow-primary/20";

/// Class fragments for a glass card with the given modifiers.
#[must_use]
pub fn glass_classes(hover: bool, glow: bool) -> Vec<&'static str> {
    let mut classes = vec![GLASS_BASE];
    if hover {
        classes.push(GLASS_HOVER);
    }
    if glow {
        classes.push(GLASS_GLOW);
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_append_in_order() {
        assert_eq!(glass_classes(false, false), vec![GLASS_BASE]);
        assert_eq!(glass_classes(true, false), vec![GLASS_BASE, GLASS_HOVER]);
        assert_eq!(
            glass_classes(true, true),
            vec![GLASS_BASE, GLASS_HOVER, GLASS_GLOW]
        );
        assert_eq!(glass_classes(false, true), vec![GLASS_BASE, GLASS_GLOW]);
    }
}
