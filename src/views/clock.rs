use iced::alignment;
use iced::font::{Family, Weight};
use iced::widget::canvas::{self, Frame, Geometry, LineCap, Path, Stroke};
use iced::widget::text::Alignment;
use iced::{Color, Font, Point, Rectangle, Renderer, Theme, mouse};

use crate::activity::Activity;
use crate::clock::{self, ClockLayout, ClockState, Layer};
use crate::geometry::HandKind;
use crate::theme::ThemeColors;

const fn face_font(family: Family, weight: Weight) -> Font {
    Font {
        family,
        weight,
        stretch: iced::font::Stretch::Normal,
        style: iced::font::Style::Normal,
    }
}

const TITLE_FONT: Font = face_font(Family::Serif, Weight::Bold);
const LABEL_FONT: Font = face_font(Family::SansSerif, Weight::Bold);
const MINUTE_FONT: Font = face_font(Family::SansSerif, Weight::Normal);

const TITLE_SIZE: f32 = 26.0;
const HOUR_LABEL_SIZE: f32 = 12.0;
const MINUTE_LABEL_SIZE: f32 = 9.5;
const ARC_LABEL_SIZE: f32 = 11.0;
const ARC_LABEL_WIDTH: f32 = 80.0;

/// The 24-hour clock canvas. Borrows the plan read-only for one frame.
pub(crate) struct ClockCanvas<'a> {
    pub(crate) state: &'a ClockState,
    pub(crate) activities: &'a [Activity],
    pub(crate) colors: &'a ThemeColors,
}

fn centered_text(content: String, position: Point, size: f32, color: Color, font: Font) -> canvas::Text {
    canvas::Text {
        content,
        position,
        color,
        size: size.into(),
        font,
        align_x: Alignment::Center,
        align_y: alignment::Vertical::Center,
        ..canvas::Text::default()
    }
}

impl ClockCanvas<'_> {
    fn draw_face(&self, frame: &mut Frame, layout: &ClockLayout) {
        let colors = self.colors;
        frame.fill_text(centered_text(
            clock::TITLE.to_string(),
            layout.title_at(),
            TITLE_SIZE,
            colors.text,
            TITLE_FONT,
        ));

        let (left, right) = layout.divider();
        frame.stroke(
            &Path::line(left, right),
            Stroke::default().with_color(colors.accent).with_width(2.0),
        );

        let disc = Path::circle(layout.center, layout.radius);
        frame.fill(&disc, colors.clock_face);
        frame.stroke(
            &disc,
            Stroke::default().with_color(colors.clock_ring).with_width(2.0),
        );
    }

    fn draw_activities(&self, frame: &mut Frame, layout: &ClockLayout) {
        for slice in layout.activity_slices(self.activities) {
            let (start_angle, end_angle) = slice.span.to_screen_radians();
            let wedge = Path::new(|b| {
                b.move_to(layout.center);
                b.arc(canvas::path::Arc {
                    center: layout.center,
                    radius: layout.radius,
                    start_angle,
                    end_angle,
                });
                b.close();
            });
            frame.fill(&wedge, slice.color);

            frame.fill_text(canvas::Text {
                max_width: ARC_LABEL_WIDTH,
                ..centered_text(
                    slice.label,
                    slice.label_at,
                    ARC_LABEL_SIZE,
                    self.colors.arc_label,
                    LABEL_FONT,
                )
            });
        }
    }

    fn draw_overlay(&self, frame: &mut Frame, layout: &ClockLayout) {
        let colors = self.colors;
        for tick in layout.hour_ticks() {
            frame.fill_text(centered_text(
                tick.label,
                tick.label_at,
                HOUR_LABEL_SIZE,
                colors.text,
                LABEL_FONT,
            ));
            frame.stroke(
                &Path::line(tick.outer, tick.inner),
                Stroke::default().with_color(colors.tick).with_width(2.0),
            );
        }
        for (label, at) in layout.minute_labels() {
            frame.fill_text(centered_text(
                label,
                at,
                MINUTE_LABEL_SIZE,
                colors.minute_label,
                MINUTE_FONT,
            ));
        }
    }

    fn draw_hands(&self, frame: &mut Frame, layout: &ClockLayout) {
        let colors = self.colors;
        for hand in layout.hands(self.state.time()) {
            let color = match hand.kind {
                HandKind::Second => colors.second_hand,
                HandKind::Hour | HandKind::Minute => colors.hand,
            };
            frame.stroke(
                &Path::line(layout.center, hand.tip),
                Stroke::default()
                    .with_color(color)
                    .with_width(hand.width)
                    .with_line_cap(LineCap::Round),
            );
        }

        let dot = Path::circle(layout.center, clock::CENTER_DOT_RADIUS);
        frame.fill(&dot, colors.center_dot);
        frame.stroke(&dot, Stroke::default().with_color(colors.hand).with_width(1.0));
    }
}

impl<Message> canvas::Program<Message> for ClockCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let layout = ClockLayout::new(bounds.width.min(bounds.height));
        let size = bounds.size();

        Layer::ORDER
            .iter()
            .map(|layer| match layer {
                Layer::Face => self
                    .state
                    .face
                    .draw(renderer, size, |frame| self.draw_face(frame, &layout)),
                Layer::Activities => self
                    .state
                    .activities
                    .draw(renderer, size, |frame| self.draw_activities(frame, &layout)),
                Layer::Overlay => self
                    .state
                    .overlay
                    .draw(renderer, size, |frame| self.draw_overlay(frame, &layout)),
                Layer::Hands => self
                    .state
                    .hands
                    .draw(renderer, size, |frame| self.draw_hands(frame, &layout)),
            })
            .collect()
    }
}
