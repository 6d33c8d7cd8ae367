//! Math for the two decorative animations. Kept as pure functions so the
//! timing behavior is testable without a UI.

/// Starting vertical offset of the forecast slide-in, in points.
pub const SLIDE_OFFSET: f32 = 50.0;
/// Duration of the one-shot slide, seconds.
pub const SLIDE_SECS: f32 = 0.5;
/// One leg of the banner pulse, seconds.
pub const PULSE_LEG_SECS: f64 = 0.5;

/// Offset of the forecast container `elapsed` seconds after its (re)trigger:
/// 50 → 0 over half a second, then parked at 0.
pub fn slide_offset(elapsed: f32) -> f32 {
    let progress = (elapsed / SLIDE_SECS).clamp(0.0, 1.0);
    SLIDE_OFFSET * (1.0 - progress)
}

/// Opacity coupled to the slide offset: opaque at rest, transparent at the
/// starting offset. The coupling is cosmetic, not independently controllable.
pub fn slide_opacity(offset: f32) -> f32 {
    1.0 - (offset / SLIDE_OFFSET).clamp(0.0, 1.0)
}

/// Banner pulse progress at absolute time `t` seconds: ping-pongs 0 → 1 → 0,
/// half a second per leg, forever.
pub fn pulse_progress(t: f64) -> f32 {
    let cycle = (t / PULSE_LEG_SECS) % 2.0;
    let progress = if cycle < 1.0 { cycle } else { 2.0 - cycle };
    progress as f32
}

/// Banner scale for a pulse progress: 1.0 → 1.2.
pub fn pulse_scale(progress: f32) -> f32 {
    1.0 + 0.2 * progress
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn slide_runs_from_full_offset_to_zero_in_half_a_second() {
        assert!(close(slide_offset(0.0), 50.0));
        assert!(close(slide_offset(0.25), 25.0));
        assert!(close(slide_offset(0.5), 0.0));
        // Parked once finished.
        assert!(close(slide_offset(10.0), 0.0));
    }

    #[test]
    fn opacity_is_linear_in_offset() {
        assert!(close(slide_opacity(50.0), 0.0));
        assert!(close(slide_opacity(25.0), 0.5));
        assert!(close(slide_opacity(0.0), 1.0));
    }

    #[test]
    fn pulse_ping_pongs_each_half_second() {
        assert!(close(pulse_progress(0.0), 0.0));
        assert!(close(pulse_progress(0.25), 0.5));
        assert!(close(pulse_progress(0.5), 1.0));
        assert!(close(pulse_progress(0.75), 0.5));
        assert!(close(pulse_progress(1.0), 0.0));
        // Loops forever.
        assert!(close(pulse_progress(100.25), 0.5));
    }

    #[test]
    fn pulse_scale_spans_one_to_one_point_two() {
        assert!(close(pulse_scale(0.0), 1.0));
        assert!(close(pulse_scale(1.0), 1.2));
    }
}
