//! Viewport classification for the responsive navbar layout.

/// Widths strictly below this (in CSS pixels) use the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Layout class of the current viewport.
///
/// `Unknown` is the state before the first width reading arrives; it is
/// neither mobile nor desktop, so width-dependent chrome stays hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Viewport {
    #[default]
    Unknown,
    Mobile,
    Desktop,
}

impl Viewport {
    pub fn classify(width: f64) -> Self {
        if width < MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Classification for `width`, or `None` when it matches `self` and no
    /// state write is needed.
    pub fn reclassify(self, width: f64) -> Option<Self> {
        let next = Self::classify(width);
        (next != self).then_some(next)
    }

    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }

    pub fn is_desktop(self) -> bool {
        self == Self::Desktop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive_for_mobile() {
        assert_eq!(Viewport::classify(0.0), Viewport::Mobile);
        assert_eq!(Viewport::classify(767.9), Viewport::Mobile);
        assert_eq!(Viewport::classify(768.0), Viewport::Desktop);
        assert_eq!(Viewport::classify(1440.0), Viewport::Desktop);
    }

    #[test]
    fn unknown_always_reclassifies() {
        assert_eq!(Viewport::Unknown.reclassify(320.0), Some(Viewport::Mobile));
        assert_eq!(Viewport::Unknown.reclassify(1024.0), Some(Viewport::Desktop));
    }

    #[test]
    fn unchanged_classification_skips_the_write() {
        assert_eq!(Viewport::Mobile.reclassify(500.0), None);
        assert_eq!(Viewport::Desktop.reclassify(900.0), None);
    }

    #[test]
    fn crossing_the_breakpoint_flips_classification() {
        assert_eq!(Viewport::Mobile.reclassify(800.0), Some(Viewport::Desktop));
        assert_eq!(Viewport::Desktop.reclassify(700.0), Some(Viewport::Mobile));
    }

    #[test]
    fn unknown_is_neither_mobile_nor_desktop() {
        assert!(!Viewport::Unknown.is_mobile());
        assert!(!Viewport::Unknown.is_desktop());
    }
}
