//! Pagination options and configuration.

use crate::error::{Error, Result};

/// Page height past which a page counts as overflowing (px).
///
/// Slightly above the 1123px of an A4 page at 96 DPI so that pages which
/// merely reach their `min-height` are not flagged.
pub const PAGE_HEIGHT_THRESHOLD: f32 = 1130.0;

/// Distance from the page top below which content must move (px).
pub const CONTENT_LIMIT: f32 = 960.0;

/// Visible text height under which an insight box moves whole (px).
pub const MIN_VISIBLE_ALLOWANCE: f32 = 30.0;

/// Driver steps allowed in one pass.
pub const MAX_ITERATIONS: usize = 50;

/// Distance from the content top within which an oversized block is
/// considered to already start a page (px).
pub const TOP_EPSILON: f32 = 50.0;

/// Options for a pagination pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationOptions {
    /// Measured page height above which a page is split
    pub page_height_threshold: f32,

    /// Cut line, measured from the page top
    pub content_limit: f32,

    /// Minimum visible text height for an insight box to be split
    pub min_visible_allowance: f32,

    /// Hard cap on driver steps
    pub max_iterations: usize,

    /// Escape-valve tolerance for blocks taller than a page
    pub top_epsilon: f32,
}

impl PaginationOptions {
    /// Create new pagination options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the overflow threshold.
    pub fn with_page_height_threshold(mut self, px: f32) -> Self {
        self.page_height_threshold = px;
        self
    }

    /// Set the cut line.
    pub fn with_content_limit(mut self, px: f32) -> Self {
        self.content_limit = px;
        self
    }

    /// Set the minimum visible allowance for insight boxes.
    pub fn with_min_visible_allowance(mut self, px: f32) -> Self {
        self.min_visible_allowance = px;
        self
    }

    /// Set the iteration cap.
    pub fn with_max_iterations(mut self, steps: usize) -> Self {
        self.max_iterations = steps;
        self
    }

    /// Set the escape-valve tolerance.
    pub fn with_top_epsilon(mut self, px: f32) -> Self {
        self.top_epsilon = px;
        self
    }

    /// Check that the options describe a usable page.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("page_height_threshold", self.page_height_threshold),
            ("content_limit", self.content_limit),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::InvalidOptions(format!("{} must be positive", name)));
            }
        }
        if self.content_limit >= self.page_height_threshold {
            return Err(Error::InvalidOptions(format!(
                "content_limit ({}) must be below page_height_threshold ({})",
                self.content_limit, self.page_height_threshold
            )));
        }
        if !(self.min_visible_allowance >= 0.0 && self.top_epsilon >= 0.0) {
            return Err(Error::InvalidOptions(
                "min_visible_allowance and top_epsilon must not be negative".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidOptions(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PaginationOptions {
    fn default() -> Self {
        Self {
            page_height_threshold: PAGE_HEIGHT_THRESHOLD,
            content_limit: CONTENT_LIMIT,
            min_visible_allowance: MIN_VISIBLE_ALLOWANCE,
            max_iterations: MAX_ITERATIONS,
            top_epsilon: TOP_EPSILON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_options_builder() {
        let options = PaginationOptions::new()
            .with_page_height_threshold(1200.0)
            .with_content_limit(1000.0)
            .with_min_visible_allowance(40.0)
            .with_max_iterations(10)
            .with_top_epsilon(20.0);

        assert_eq!(options.page_height_threshold, 1200.0);
        assert_eq!(options.content_limit, 1000.0);
        assert_eq!(options.min_visible_allowance, 40.0);
        assert_eq!(options.max_iterations, 10);
        assert_eq!(options.top_epsilon, 20.0);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_default_options() {
        let options = PaginationOptions::default();
        assert_eq!(options.page_height_threshold, 1130.0);
        assert_eq!(options.content_limit, 960.0);
        assert_eq!(options.max_iterations, 50);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_limit_above_threshold() {
        let options = PaginationOptions::new().with_content_limit(1130.0);
        assert!(matches!(options.validate(), Err(Error::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let options = PaginationOptions::new().with_max_iterations(0);
        assert!(options.validate().is_err());

        let options = PaginationOptions::new().with_content_limit(f32::NAN);
        assert!(options.validate().is_err());
    }
}
