/// Width of the sidebar panel in pixels.
pub const SIDEBAR_WIDTH: f32 = 220.0;

/// Padding kept around the preview inside the central panel.
pub const PREVIEW_PADDING: f32 = 30.0;

/// Duration of the cosmetic preview fade-in, in seconds.
pub const FADE_DURATION_SECS: f32 = 0.15;

/// How long the export button shows its "saved" state, in seconds.
pub const EXPORT_FLASH_SECS: f32 = 1.5;
