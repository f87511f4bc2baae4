//! Simulated time-lapse progress. The caller sleeps between steps; once
//! started the sequence always runs to completion.

/// Progress percentages for the playback loop, one per step. The final
/// entry is always 100 and the sequence is non-decreasing.
pub fn progress_sequence(steps: u32) -> Vec<u8> {
    let steps = steps.max(1);
    (1..=steps).map(|step| ((step * 100) / steps) as u8).collect()
}
