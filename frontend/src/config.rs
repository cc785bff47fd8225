use log::Level;

/// Distance ahead of a section's top at which it becomes the active nav target.
pub const NAV_THRESHOLD_PX: f64 = 200.0;
/// Height of the fixed header; anchor scrolls stop this far above a section.
pub const HEADER_OFFSET_PX: f64 = 80.0;

pub const REVEAL_RATIO: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const REVEAL_SELECTOR: &str = ".card, .pricing-card, .hero-text, .signup-content";
pub const REVEAL_CLASS: &str = "animate-in";

pub const BACKGROUND_SPEED: f64 = 0.5;
pub const LAYER_SPEED_STEP: f64 = 0.2;
/// Degrees of rotation per scrolled pixel, shared by every decorative layer.
pub const LAYER_ROTATION: f64 = 0.1;

pub const TILT_DIVISOR: f64 = 10.0;
pub const CARD_LIFT_PX: f64 = 10.0;
pub const RIPPLE_MS: u32 = 600;

pub const MIN_PASSWORD_LEN: usize = 6;
pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const SIGNUP_FOCUS_DELAY_MS: u32 = 500;

pub const NOTIFICATION_MS: u32 = 3_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;

pub const GLOW_SIZE_PX: f64 = 20.0;
pub const GLOW_HOVER_SIZE_PX: f64 = 40.0;
pub const INTERACTIVE_SELECTOR: &str = "a, button, .card, .form-input";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
