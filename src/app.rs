use iced::widget::{canvas, container, row};
use iced::{Color, Element, Length, Size, Subscription};

use crate::clock::{ClockState, ClockTime};
use crate::config::Settings;
use crate::planner::{ActivityForm, Planner, PlannerError, Severity};
use crate::store::PlanStore;
use crate::theme::{self, ThemeColors};
use crate::tick;
use crate::views::clock::ClockCanvas;

const TICK_MS: u64 = 1000;
pub(crate) const PANEL_WIDTH: f32 = 300.0;
const CLOCK_PADDING: f32 = 20.0;

/// A modal prompt layered over the window.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Dialog {
    Notice {
        title: &'static str,
        message: String,
        severity: Severity,
    },
    ConfirmReset,
}

impl Dialog {
    fn from_error(error: PlannerError) -> Self {
        let (title, severity) = error.presentation();
        Dialog::Notice {
            title,
            message: error.to_string(),
            severity,
        }
    }
}

// --- App State ---

pub(crate) struct DailyPlan {
    pub(crate) planner: Planner,
    pub(crate) form: ActivityForm,
    pub(crate) selected: Option<usize>,
    pub(crate) dialog: Option<Dialog>,
    pub(crate) clock: ClockState,
    pub(crate) colors: ThemeColors,
    pub(crate) clock_size: f32,
}

#[derive(Debug, Clone)]
pub(crate) enum Message {
    StartHourChanged(String),
    StartMinuteChanged(String),
    EndHourChanged(String),
    EndMinuteChanged(String),
    DescriptionChanged(String),
    Add,
    Select(usize),
    DeleteSelected,
    ResetRequested,
    ResetConfirmed,
    DismissDialog,
    Tick,
}

pub(crate) fn run(settings: Settings) -> iced::Result {
    tracing::info!(
        version = env!("FIRTA_PLAN_VERSION"),
        commit = env!("FIRTA_PLAN_COMMIT"),
        data_file = %settings.data_file.display(),
        theme = ?settings.theme,
        "firta-plan starting"
    );

    let window = Size::new(
        PANEL_WIDTH + settings.clock_size + CLOCK_PADDING * 2.0,
        settings.clock_size + CLOCK_PADDING * 2.0,
    );

    iced::application(
        move || DailyPlan::new(&settings),
        DailyPlan::update,
        DailyPlan::view,
    )
    .title("Firta's Daily Plan")
    .style(DailyPlan::style)
    .subscription(DailyPlan::subscription)
    .window_size(window)
    .run()
}

impl DailyPlan {
    pub(crate) fn new(settings: &Settings) -> Self {
        let colors = theme::resolve(settings.theme);
        let planner = Planner::load(PlanStore::new(&settings.data_file), colors.palette);
        let mut clock = ClockState::new(ClockTime::now());
        clock.refresh_activities();
        Self {
            planner,
            form: ActivityForm::default(),
            selected: None,
            dialog: None,
            clock,
            colors,
            clock_size: settings.clock_size,
        }
    }

    /// The plan changed: drop the selection and redraw the slices.
    fn plan_changed(&mut self) {
        self.selected = None;
        self.clock.refresh_activities();
        tracing::trace!(
            redraws = self.clock.activity_redraws(),
            "activity layer invalidated"
        );
    }

    pub(crate) fn update(&mut self, message: Message) {
        match message {
            Message::StartHourChanged(value) => self.form.start_hour = value,
            Message::StartMinuteChanged(value) => self.form.start_minute = value,
            Message::EndHourChanged(value) => self.form.end_hour = value,
            Message::EndMinuteChanged(value) => self.form.end_minute = value,
            Message::DescriptionChanged(value) => self.form.description = value,
            Message::Add => {
                if self.dialog.is_some() {
                    return;
                }
                let added = self.planner.add(&self.form).map(|_| ());
                match added {
                    Ok(()) => {
                        self.form.clear();
                        self.plan_changed();
                    }
                    Err(e) => {
                        tracing::debug!(error = %e, form = ?self.form, "add rejected");
                        self.dialog = Some(Dialog::from_error(e));
                    }
                }
            }
            Message::Select(i) => {
                if self.selected == Some(i) {
                    self.selected = None;
                } else {
                    self.selected = Some(i);
                }
            }
            Message::DeleteSelected => {
                if self.planner.delete(self.selected).is_some() {
                    self.plan_changed();
                }
            }
            Message::ResetRequested => {
                self.dialog = Some(Dialog::ConfirmReset);
            }
            Message::ResetConfirmed => {
                if self.dialog.take() == Some(Dialog::ConfirmReset) {
                    self.planner.reset();
                    self.plan_changed();
                }
            }
            Message::DismissDialog => {
                self.dialog = None;
            }
            Message::Tick => {
                self.clock.tick(ClockTime::now());
                tracing::trace!(redraws = self.clock.hand_redraws(), "hands redrawn");
            }
        }
    }

    pub(crate) fn view(&self) -> Element<'_, Message> {
        let clock = canvas(ClockCanvas {
            state: &self.clock,
            activities: self.planner.activities(),
            colors: &self.colors,
        })
        .width(self.clock_size)
        .height(self.clock_size);

        let clock_panel = container(clock)
            .padding(CLOCK_PADDING)
            .center_x(Length::Fill)
            .height(Length::Fill)
            .style(self.colors.app_style());

        let base: Element<'_, Message> = row![self.view_panel(), clock_panel]
            .width(Length::Fill)
            .height(Length::Fill)
            .into();

        match &self.dialog {
            Some(dialog) => self.view_modal(base, dialog),
            None => base,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run_with(TICK_MS, tick::tick_stream)
    }

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.colors.app_bg,
            text_color: if self.colors.is_dark {
                Color::WHITE
            } else {
                self.colors.text
            },
        }
    }
}
