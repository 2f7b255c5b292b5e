// SELECTION
pub const MIN_SELECTION_COUNT: usize = 2;

// TIMING (milliseconds)
/// The panel may not be listening yet when the plugin starts, so the selection count is reported a second time after this delay
pub const STARTUP_REPORT_DELAY_MS: u64 = 500;
pub const ACTION_COUNT_FADE_DELAY_MS: u64 = 3000;
pub const NOTIFICATION_FADE_DELAY_MS: u64 = 3000;
pub const NOTIFICATION_REMOVAL_DELAY_MS: u64 = 300;

// PANEL
pub const PANEL_WIDTH: u32 = 300;
pub const PANEL_HEIGHT: u32 = 280;
pub const ACTION_COUNT_OPACITY: f64 = 1.;
pub const ACTION_COUNT_FADED_OPACITY: f64 = 0.5;
pub const STACK_BUTTON_LABEL: &str = "Stack Elements";
pub const SHUFFLE_BUTTON_LABEL: &str = "Shuffle Order";
