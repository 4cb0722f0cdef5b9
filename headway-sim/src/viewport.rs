//! # Responsive layout trigger
//!
//! The app swaps its navigation chrome when the viewport crosses the mobile
//! breakpoint. The check itself is a single comparison; the interesting
//! part is rate-limiting it, since touch devices can fire resize events far
//! faster than a layout swap is worth doing.

use std::time::Instant;

use tracing::debug;

use crate::config::LayoutConfig;

/// Which navigation chrome the viewport width calls for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    /// At or below the mobile breakpoint: bottom navigation bar.
    Mobile,
    /// Above it: full navigation chrome.
    Desktop,
}

impl ViewportClass {
    pub fn classify(width_px: u32, config: &LayoutConfig) -> Self {
        if width_px <= config.mobile_breakpoint_px {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }
}

/// Throttled breakpoint re-evaluation for resize event streams.
///
/// Leading-edge: the first observation (and any class change outside the
/// throttle window) emits immediately. Observations inside the window are
/// suppressed, but a change is never lost — emission is keyed on "differs
/// from the last *emitted* class", so the first observation after the
/// window re-emits any difference that accumulated during it.
pub struct ResizeThrottle {
    config: LayoutConfig,
    last_emitted: Option<(Instant, ViewportClass)>,
}

impl ResizeThrottle {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            last_emitted: None,
        }
    }

    /// Feeds one resize observation. Returns the class to apply now, or
    /// `None` when it is unchanged or the throttle window is still open.
    pub fn observe(&mut self, width_px: u32, now: Instant) -> Option<ViewportClass> {
        let class = ViewportClass::classify(width_px, &self.config);
        match self.last_emitted {
            Some((_, emitted)) if emitted == class => None,
            Some((at, _)) if now.duration_since(at) < self.config.resize_throttle => None,
            _ => {
                debug!(?class, width_px, "viewport class changed");
                self.last_emitted = Some((now, class));
                Some(class)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config() -> LayoutConfig {
        LayoutConfig {
            mobile_breakpoint_px: 768,
            resize_throttle: Duration::from_millis(100),
        }
    }

    #[test]
    fn test_breakpoint_boundary() {
        let cfg = config();
        assert_eq!(ViewportClass::classify(768, &cfg), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(769, &cfg), ViewportClass::Desktop);
    }

    #[test]
    fn test_first_observation_emits() {
        let mut throttle = ResizeThrottle::new(config());
        let emitted = throttle.observe(1024, Instant::now());
        assert_eq!(emitted, Some(ViewportClass::Desktop));
    }

    #[test]
    fn test_unchanged_class_is_silent() {
        let mut throttle = ResizeThrottle::new(config());
        let t0 = Instant::now();
        throttle.observe(1024, t0);
        // Width changed, class didn't; even outside the window nothing fires.
        assert_eq!(throttle.observe(900, t0 + Duration::from_secs(1)), None);
    }

    #[test]
    fn test_change_inside_window_is_deferred_not_lost() {
        let mut throttle = ResizeThrottle::new(config());
        let t0 = Instant::now();
        throttle.observe(1024, t0);

        // Rotation to portrait 10 ms later: suppressed.
        assert_eq!(throttle.observe(400, t0 + Duration::from_millis(10)), None);
        // Next observation after the window catches it up.
        assert_eq!(
            throttle.observe(400, t0 + Duration::from_millis(150)),
            Some(ViewportClass::Mobile)
        );
    }

    #[test]
    fn test_change_and_revert_inside_window_emits_nothing() {
        let mut throttle = ResizeThrottle::new(config());
        let t0 = Instant::now();
        throttle.observe(1024, t0);

        assert_eq!(throttle.observe(400, t0 + Duration::from_millis(10)), None);
        assert_eq!(throttle.observe(1024, t0 + Duration::from_millis(150)), None);
    }
}
