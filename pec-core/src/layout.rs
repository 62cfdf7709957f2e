//! Viewport width to layout mode mapping.
//!
//! Kept outside the calculation core and free of `web-sys` so the
//! breakpoints are unit-testable. The UI decides what each mode means
//! (Mobile hides fleet add/remove and edits only the first unit).

/// Three-way responsive layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Mobile,
    Tablet,
    Desktop,
}

impl LayoutMode {
    /// Breakpoints: below 600px Mobile, below 1024px Tablet, else Desktop.
    pub fn for_width(px: f64) -> Self {
        if px < 600.0 {
            LayoutMode::Mobile
        } else if px < 1024.0 {
            LayoutMode::Tablet
        } else {
            LayoutMode::Desktop
        }
    }
}
