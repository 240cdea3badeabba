//! Design tokens for Campus Buzz
//!
//! Sizing, layering and overlay tokens shared by the feed and the tab shell.

// =============================================================================
// Sizing Tokens
// =============================================================================

/// Component sizing
pub mod sizing {
    /// Icon sizes
    pub mod icon {
        /// Inline icon next to text
        pub const SM: f32 = 16.0;
        /// Header action icon
        pub const MD: f32 = 24.0;
        /// Tab bar icon
        pub const TAB: f32 = 28.0;
    }

    /// Floating action button diameter
    pub const FAB: f32 = 56.0;

    /// Settings list thumbnail edge
    pub const THUMBNAIL: f32 = 60.0;

    /// Settings sheet drag handle
    pub mod handle {
        /// Handle width
        pub const WIDTH: f32 = 40.0;
        /// Handle height
        pub const HEIGHT: f32 = 5.0;
    }
}

// =============================================================================
// Border Radius Tokens
// =============================================================================

/// Border radius values
pub mod radius {
    /// Card and thumbnail corners
    pub const MD: f32 = 8.0;
    /// Panel corners
    pub const XL: f32 = 16.0;
    /// Fully round (floating button)
    pub const FULL: f32 = 9999.0;
}

// =============================================================================
// Z-Index Tokens
// =============================================================================

/// Z-index layers
pub mod z_index {
    /// Dimming overlay behind an open panel
    pub const OVERLAY: i32 = 10;
    /// Sliding panels
    pub const PANEL: i32 = 20;
}

// =============================================================================
// Overlay & Opacity Tokens
// =============================================================================

/// Overlay colors
pub mod overlay {
    /// Backdrop behind the details panel
    pub const BACKDROP: &str = "rgba(0,0,0,0.5)";
    /// Ripple on the floating button (Android)
    pub const RIPPLE: &str = "rgba(255,255,255,0.3)";
}

/// Opacity values
pub mod opacity {
    /// Focused tab icon
    pub const TAB_FOCUSED: f32 = 1.0;
    /// Unfocused tab icon
    pub const TAB_UNFOCUSED: f32 = 0.5;
}
