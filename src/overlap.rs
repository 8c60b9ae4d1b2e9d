use crate::activity::Activity;

/// Whether the half-open range `[start, end)` (minutes since midnight)
/// intersects any existing activity. Blocks that merely touch at a boundary
/// do not overlap.
///
/// Raw minute values are compared, so a block crossing midnight
/// (`end < start`) is not unwrapped first and conflicts involving one can be
/// missed.
pub fn is_overlapping(start: u16, end: u16, existing: &[Activity]) -> bool {
    existing
        .iter()
        .any(|a| start < a.end_minutes() && end > a.start_minutes())
}
