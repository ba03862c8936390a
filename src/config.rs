//! Compile-time page configuration.

pub const PAGE_TITLE: &str = "Push Fitness | Gym in Albany, NY";

pub const PAGE_DESCRIPTION: &str = "Join Albany's premier fitness destination. \
    State-of-the-art equipment, expert trainers, and a supportive community.";

/// Scroll offset in pixels at which the fixed header switches from its
/// transparent style to the solid one.
pub const HEADER_SOLID_OFFSET: f64 = 50.0;

/// Scroll offset in pixels at which the floating scroll-to-top button shows.
pub const SCROLL_TOP_OFFSET: f64 = 500.0;

/// Fraction of the viewport height a section's top edge must cross before
/// its entrance animation runs.
pub const REVEAL_VIEWPORT_FRACTION: f64 = 0.8;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_metadata_names_the_business() {
        assert!(PAGE_TITLE.contains("Push Fitness"));
        assert!(PAGE_TITLE.contains("Albany"));
        assert!(PAGE_DESCRIPTION.contains("Albany"));
    }
}
