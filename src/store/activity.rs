use crate::models::FrameSample;

const MIN_DURATION_SECS: u32 = 5;
const MIN_MOTION_RATIO: f64 = 0.2;

/// Decide whether a recorded trace shows genuine exercise. The recording
/// must run at least five seconds and at least a fifth of its frames must
/// show motion; anything else is treated as a camera pointed at nothing.
pub fn is_real_activity(trace: &[FrameSample], duration_secs: u32) -> bool {
    if trace.is_empty() {
        return false;
    }
    if duration_secs < MIN_DURATION_SECS {
        return false;
    }

    let motion_frames = trace
        .iter()
        .filter(|sample| sample.motion_detected)
        .count();
    let motion_ratio = motion_frames as f64 / trace.len() as f64;
    motion_ratio >= MIN_MOTION_RATIO
}
