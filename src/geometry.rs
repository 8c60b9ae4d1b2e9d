//! Clock-face math: 24-hour times to angles, angles to screen points.
//!
//! Angles are degrees measured clockwise from 12 o'clock unless a function
//! says otherwise. Screen space is y-down.

use iced::{Point, Radians};

/// Degrees the 24-hour dial advances per hour.
pub const DEGREES_PER_HOUR: f32 = 15.0;

/// Fraction of the face radius at which arc labels sit.
pub const LABEL_RADIUS_RATIO: f32 = 0.7;

const LABEL_MAX_CHARS: usize = 25;
const LABEL_KEEP_CHARS: usize = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const ALL: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    /// Degrees contributed per hour, per minute and per second.
    fn multipliers(self) -> (f32, f32, f32) {
        match self {
            HandKind::Hour => (15.0, 0.25, 0.0),
            HandKind::Minute => (0.0, 6.0, 0.1),
            HandKind::Second => (0.0, 0.0, 6.0),
        }
    }

    /// Angle of this hand for the given wall-clock time.
    pub fn angle(self, hour: u32, minute: u32, second: u32) -> f32 {
        let (per_hour, per_minute, per_second) = self.multipliers();
        hour as f32 * per_hour + minute as f32 * per_minute + second as f32 * per_second
    }
}

/// Point at `radius` from `center` along `degrees` (clockwise from top).
pub fn project(center: Point, radius: f32, degrees: f32) -> Point {
    let rad = degrees.to_radians();
    Point::new(center.x + radius * rad.sin(), center.y - radius * rad.cos())
}

/// Angle of a fractional hour on the 24-hour dial.
pub fn hours_to_degrees(hours: f32) -> f32 {
    hours * DEGREES_PER_HOUR
}

/// Span from `start` to `end` in hours, wrapping past midnight. An empty or
/// negative span becomes the remainder of a full turn.
pub fn wrapped_duration_hours(start: f32, end: f32) -> f32 {
    let duration = end - start;
    if duration <= 0.0 { duration + 24.0 } else { duration }
}

/// A pie slice in the counter-clockwise-positive convention: 0° at
/// 3 o'clock, y-up. Negative extents sweep clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start_angle: f32,
    pub extent: f32,
}

impl ArcSpan {
    /// Slice covering `start`..`end` (fractional hours) on the dial.
    pub fn for_hours(start: f32, end: f32) -> Self {
        let duration = wrapped_duration_hours(start, end);
        Self {
            start_angle: 90.0 - start * DEGREES_PER_HOUR,
            extent: -(duration * DEGREES_PER_HOUR),
        }
    }

    /// Start and end angles for a y-down renderer that measures clockwise
    /// from 3 o'clock, with end > start.
    pub fn to_screen_radians(self) -> (Radians, Radians) {
        let start = -self.start_angle;
        let end = -(self.start_angle + self.extent);
        (Radians(start.to_radians()), Radians(end.to_radians()))
    }
}

/// Where the label of a block sits: its angular midpoint at 70% of `radius`.
pub fn label_position(center: Point, radius: f32, start: f32, end: f32) -> Point {
    let mid = start + wrapped_duration_hours(start, end) / 2.0;
    project(center, radius * LABEL_RADIUS_RATIO, hours_to_degrees(mid))
}

/// Descriptions longer than 25 characters are cut to 22 plus `...`.
pub fn truncate_label(description: &str) -> String {
    if description.chars().count() > LABEL_MAX_CHARS {
        let kept: String = description.chars().take(LABEL_KEEP_CHARS).collect();
        format!("{kept}...")
    } else {
        description.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn hour_hand_covers_full_turn_in_a_day() {
        assert!(close(HandKind::Hour.angle(0, 0, 0), 0.0));
        assert!(close(HandKind::Hour.angle(6, 0, 0), 90.0));
        assert!(close(HandKind::Hour.angle(12, 30, 59), 187.5));
        assert!(close(HandKind::Hour.angle(23, 59, 0), 359.75));
    }

    #[test]
    fn minute_and_second_hands() {
        assert!(close(HandKind::Minute.angle(17, 15, 30), 93.0));
        assert!(close(HandKind::Second.angle(17, 15, 30), 180.0));
        assert!(close(HandKind::Second.angle(0, 59, 59), 354.0));
    }

    #[test]
    fn project_cardinal_points() {
        let c = Point::new(100.0, 100.0);
        let top = project(c, 10.0, 0.0);
        assert!(close(top.x, 100.0) && close(top.y, 90.0));
        let right = project(c, 10.0, 90.0);
        assert!(close(right.x, 110.0) && close(right.y, 100.0));
        let bottom = project(c, 10.0, 180.0);
        assert!(close(bottom.x, 100.0) && close(bottom.y, 110.0));
        let left = project(c, 10.0, 270.0);
        assert!(close(left.x, 90.0) && close(left.y, 100.0));
    }

    #[test]
    fn wrapped_duration() {
        assert!(close(wrapped_duration_hours(8.0, 9.5), 1.5));
        assert!(close(wrapped_duration_hours(22.0, 2.0), 4.0));
        assert!(close(wrapped_duration_hours(5.0, 5.0), 24.0));
    }

    #[test]
    fn arc_span_uses_counter_clockwise_convention() {
        let span = ArcSpan::for_hours(8.0, 9.0);
        assert!(close(span.start_angle, -30.0));
        assert!(close(span.extent, -15.0));

        let midnight = ArcSpan::for_hours(0.0, 6.0);
        assert!(close(midnight.start_angle, 90.0));
        assert!(close(midnight.extent, -90.0));
    }

    #[test]
    fn arc_span_wraps_past_midnight() {
        let span = ArcSpan::for_hours(23.0, 1.0);
        assert!(close(span.extent, -30.0));
    }

    #[test]
    fn screen_radians_sweep_clockwise_from_top() {
        let (start, end) = ArcSpan::for_hours(0.0, 6.0).to_screen_radians();
        assert!(close(start.0, (-90.0f32).to_radians()));
        assert!(close(end.0, 0.0));
        assert!(end.0 > start.0);
    }

    #[test]
    fn label_sits_at_midpoint() {
        let c = Point::new(0.0, 0.0);
        // 00:00-12:00 midpoint is 06:00, pointing right.
        let p = label_position(c, 100.0, 0.0, 12.0);
        assert!(close(p.x, 70.0) && close(p.y, 0.0));
        // 22:00-02:00 midpoint is midnight, pointing up.
        let p = label_position(c, 100.0, 22.0, 2.0);
        assert!(close(p.x, 0.0) && close(p.y, -70.0));
    }

    #[test]
    fn truncate_label_only_past_25_chars() {
        let exactly_25 = "a".repeat(25);
        assert_eq!(truncate_label(&exactly_25), exactly_25);

        let long = "b".repeat(26);
        let out = truncate_label(&long);
        assert_eq!(out, format!("{}...", "b".repeat(22)));
        assert_eq!(out.chars().count(), 25);
    }

    #[test]
    fn truncate_label_multibyte_no_panic() {
        let s = "ジム".repeat(13);
        assert!(truncate_label(&s).ends_with("..."));
    }
}
