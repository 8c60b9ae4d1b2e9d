//! Clock-face layout and redraw bookkeeping.
//!
//! Everything here is plain data so the face can be checked without a
//! window; `views::clock` turns it into canvas geometry.

use chrono::Timelike;
use iced::widget::canvas;
use iced::{Color, Point};

use crate::activity::Activity;
use crate::geometry::{self, ArcSpan, HandKind};

pub const TITLE: &str = "TODAY'S TIME TABLE";
pub const CENTER_DOT_RADIUS: f32 = 6.0;
const TICK_LENGTH: f32 = 8.0;
const HOUR_LABEL_OFFSET: f32 = 20.0;
const MINUTE_LABEL_OFFSET: f32 = 40.0;
const TITLE_Y: f32 = 40.0;
const DIVIDER_Y: f32 = 60.0;
const DIVIDER_HALF_WIDTH: f32 = 100.0;

/// Wall-clock reading used for the hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockTime {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockTime {
    pub fn now() -> Self {
        let now = chrono::Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }
}

/// Drawing layers, bottom to top. Each is cached separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Title, divider and the face disc. Drawn once.
    Face,
    /// Activity slices and their labels. Redrawn when the plan changes.
    Activities,
    /// Hour ticks and the hour/minute numerals. Drawn once.
    Overlay,
    /// The three hands with the center dot on top. Redrawn every tick.
    Hands,
}

impl Layer {
    pub const ORDER: [Layer; 4] = [Layer::Face, Layer::Activities, Layer::Overlay, Layer::Hands];
}

/// Length inset from the face radius and stroke width for each hand.
pub fn hand_style(kind: HandKind) -> (f32, f32) {
    match kind {
        HandKind::Hour => (60.0, 6.0),
        HandKind::Minute => (20.0, 3.0),
        HandKind::Second => (10.0, 1.0),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HandStroke {
    pub kind: HandKind,
    pub tip: Point,
    pub width: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourTick {
    pub label: String,
    pub label_at: Point,
    pub outer: Point,
    pub inner: Point,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySlice {
    pub span: ArcSpan,
    pub color: Color,
    pub label: String,
    pub label_at: Point,
}

/// Positions of every face element for a square canvas of side `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockLayout {
    pub center: Point,
    pub radius: f32,
}

impl ClockLayout {
    pub fn new(size: f32) -> Self {
        Self {
            center: Point::new(size / 2.0, size / 2.0 + 20.0),
            radius: size / 2.0 - 80.0,
        }
    }

    pub fn title_at(&self) -> Point {
        Point::new(self.center.x, TITLE_Y)
    }

    pub fn divider(&self) -> (Point, Point) {
        (
            Point::new(self.center.x - DIVIDER_HALF_WIDTH, DIVIDER_Y),
            Point::new(self.center.x + DIVIDER_HALF_WIDTH, DIVIDER_Y),
        )
    }

    /// 24 ticks, hour 0 labelled "24".
    pub fn hour_ticks(&self) -> Vec<HourTick> {
        (0..24u32)
            .map(|hour| {
                let degrees = geometry::hours_to_degrees(hour as f32);
                let label = if hour == 0 { "24".to_string() } else { hour.to_string() };
                HourTick {
                    label,
                    label_at: geometry::project(
                        self.center,
                        self.radius + HOUR_LABEL_OFFSET,
                        degrees,
                    ),
                    outer: geometry::project(self.center, self.radius, degrees),
                    inner: geometry::project(self.center, self.radius - TICK_LENGTH, degrees),
                }
            })
            .collect()
    }

    /// Outer ring numerals 5, 10 .. 55 placed as on a minute dial.
    pub fn minute_labels(&self) -> Vec<(String, Point)> {
        (5..60u32)
            .step_by(5)
            .map(|minute| {
                let at = geometry::project(
                    self.center,
                    self.radius + MINUTE_LABEL_OFFSET,
                    minute as f32 * 6.0,
                );
                (minute.to_string(), at)
            })
            .collect()
    }

    pub fn hands(&self, time: ClockTime) -> Vec<HandStroke> {
        HandKind::ALL
            .iter()
            .map(|&kind| {
                let (inset, width) = hand_style(kind);
                let degrees = kind.angle(time.hour, time.minute, time.second);
                HandStroke {
                    kind,
                    tip: geometry::project(self.center, self.radius - inset, degrees),
                    width,
                }
            })
            .collect()
    }

    pub fn activity_slices(&self, activities: &[Activity]) -> Vec<ActivitySlice> {
        activities
            .iter()
            .map(|a| {
                let (start, end) = (a.start.as_hours(), a.end.as_hours());
                ActivitySlice {
                    span: ArcSpan::for_hours(start, end),
                    color: a.color.to_color(),
                    label: geometry::truncate_label(&a.description),
                    label_at: geometry::label_position(self.center, self.radius, start, end),
                }
            })
            .collect()
    }
}

/// Per-layer caches for the clock canvas plus the last hand reading.
pub struct ClockState {
    pub(crate) face: canvas::Cache,
    pub(crate) activities: canvas::Cache,
    pub(crate) overlay: canvas::Cache,
    pub(crate) hands: canvas::Cache,
    time: ClockTime,
    activity_redraws: u64,
    hand_redraws: u64,
}

impl ClockState {
    pub fn new(time: ClockTime) -> Self {
        Self {
            face: canvas::Cache::new(),
            activities: canvas::Cache::new(),
            overlay: canvas::Cache::new(),
            hands: canvas::Cache::new(),
            time,
            activity_redraws: 0,
            hand_redraws: 0,
        }
    }

    pub fn time(&self) -> ClockTime {
        self.time
    }

    /// Move the hands. Leaves the activity layer alone.
    pub fn tick(&mut self, time: ClockTime) {
        self.time = time;
        self.hands.clear();
        self.hand_redraws += 1;
    }

    /// The plan changed: redraw slices on the next frame. Leaves the hands
    /// alone.
    pub fn refresh_activities(&mut self) {
        self.activities.clear();
        self.activity_redraws += 1;
    }

    pub fn activity_redraws(&self) -> u64 {
        self.activity_redraws
    }

    pub fn hand_redraws(&self) -> u64 {
        self.hand_redraws
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{Rgb, TimeOfDay};

    fn close(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    #[test]
    fn layout_for_default_size() {
        let layout = ClockLayout::new(600.0);
        assert_eq!(layout.center, Point::new(300.0, 320.0));
        assert_eq!(layout.radius, 220.0);
        assert_eq!(layout.divider().0, Point::new(200.0, 60.0));
    }

    #[test]
    fn hour_ticks_label_midnight_as_24() {
        let layout = ClockLayout::new(600.0);
        let ticks = layout.hour_ticks();
        assert_eq!(ticks.len(), 24);
        assert_eq!(ticks[0].label, "24");
        assert_eq!(ticks[13].label, "13");
        assert!(close(ticks[0].outer, Point::new(300.0, 100.0)));
        assert!(close(ticks[0].inner, Point::new(300.0, 108.0)));
        assert!(close(ticks[0].label_at, Point::new(300.0, 80.0)));
        // 06:00 sits at 3 o'clock.
        assert!(close(ticks[6].outer, Point::new(520.0, 320.0)));
    }

    #[test]
    fn minute_labels_skip_sixty() {
        let labels = ClockLayout::new(600.0).minute_labels();
        let names: Vec<&str> = labels.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(
            names,
            ["5", "10", "15", "20", "25", "30", "35", "40", "45", "50", "55"]
        );
        // "15" sits at 3 o'clock on the outer ring.
        assert!(close(labels[2].1, Point::new(560.0, 320.0)));
    }

    #[test]
    fn hands_point_at_time() {
        let layout = ClockLayout::new(600.0);
        let hands = layout.hands(ClockTime {
            hour: 12,
            minute: 15,
            second: 45,
        });
        assert_eq!(hands.len(), 3);
        // Hour hand at 12:15 is 183.75°, just past straight down.
        assert_eq!(hands[0].kind, HandKind::Hour);
        assert!(hands[0].tip.y > layout.center.y);
        assert!(hands[0].tip.x < layout.center.x);
        // Minute hand at 15m45s points right, slightly down.
        assert!(hands[1].tip.x > layout.center.x + 150.0);
        // Second hand at 45s points left, length radius - 10.
        assert!(close(hands[2].tip, Point::new(90.0, 320.0)));
        assert_eq!(hands[2].width, 1.0);
    }

    #[test]
    fn slices_follow_plan() {
        let layout = ClockLayout::new(600.0);
        let plan = [Activity {
            start: TimeOfDay::new(0, 0).unwrap(),
            end: TimeOfDay::new(12, 0).unwrap(),
            description: "A very long description that will not fit".into(),
            color: Rgb::new(255, 0, 0),
        }];
        let slices = layout.activity_slices(&plan);
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].span.start_angle, 90.0);
        assert_eq!(slices[0].span.extent, -180.0);
        assert_eq!(slices[0].label, "A very long descriptio...");
        // Midpoint 06:00 at 70% radius.
        assert!(close(slices[0].label_at, Point::new(300.0 + 154.0, 320.0)));
    }

    #[test]
    fn layer_order_is_fixed() {
        assert_eq!(
            Layer::ORDER,
            [Layer::Face, Layer::Activities, Layer::Overlay, Layer::Hands]
        );
    }

    #[test]
    fn tick_and_refresh_are_independent() {
        let mut state = ClockState::new(ClockTime::default());
        state.tick(ClockTime {
            hour: 1,
            minute: 2,
            second: 3,
        });
        assert_eq!(state.hand_redraws(), 1);
        assert_eq!(state.activity_redraws(), 0);
        assert_eq!(state.time().second, 3);

        state.refresh_activities();
        assert_eq!(state.hand_redraws(), 1);
        assert_eq!(state.activity_redraws(), 1);
    }
}
