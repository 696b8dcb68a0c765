use crate::domain::logging::LogComponent;
use crate::domain::projection::MotionPreference;
use crate::log_debug;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// Read the reduced-motion preference once.
///
/// No window, no `matchMedia` or a failing query all count as full motion.
pub fn detect_motion_preference() -> MotionPreference {
    let reduced = web_sys::window()
        .and_then(|window| window.match_media(REDUCED_MOTION_QUERY).ok().flatten())
        .is_some_and(|query| query.matches());

    let preference = MotionPreference::from_reduced_flag(reduced);
    log_debug!(LogComponent::Infrastructure("Motion"), "♿ motion preference: {}", preference);
    preference
}
