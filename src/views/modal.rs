use iced::widget::{button, center, column, container, mouse_area, opaque, row, space, stack, text};
use iced::{Element, Length};

use crate::app::{DailyPlan, Dialog, Message};
use crate::planner::Severity;

const DIALOG_WIDTH: f32 = 340.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 13.0;

impl DailyPlan {
    /// Lay `dialog` over `base`, blocking input to everything underneath.
    pub(crate) fn view_modal<'a>(
        &'a self,
        base: Element<'a, Message>,
        dialog: &'a Dialog,
    ) -> Element<'a, Message> {
        let colors = &self.colors;

        let dialog_button = |label: &'static str, message: Message, fill| {
            button(text(label).size(BODY_SIZE).width(Length::Fill).center())
                .on_press(message)
                .width(90)
                .padding(6)
                .style(colors.button_style(fill))
        };

        let (title, body, buttons, dismiss) = match dialog {
            Dialog::Notice {
                title,
                message,
                severity,
            } => {
                let accent = match severity {
                    Severity::Error => colors.error,
                    Severity::Warning => colors.text,
                };
                let ok = dialog_button("OK", Message::DismissDialog, colors.btn_add);
                (
                    text(*title).size(TITLE_SIZE).color(accent),
                    text(message.as_str()).size(BODY_SIZE).color(colors.text),
                    row![space::horizontal(), ok],
                    Message::DismissDialog,
                )
            }
            Dialog::ConfirmReset => {
                let yes = dialog_button("Yes", Message::ResetConfirmed, colors.btn_reset);
                let no = dialog_button("No", Message::DismissDialog, colors.btn_add);
                (
                    text("Reset").size(TITLE_SIZE).color(colors.text),
                    text("Delete all schedules?").size(BODY_SIZE).color(colors.text),
                    row![space::horizontal(), yes, no].spacing(8),
                    Message::DismissDialog,
                )
            }
        };

        let card = container(column![title, body, buttons].spacing(16))
            .padding(20)
            .width(DIALOG_WIDTH)
            .style(colors.modal_style());

        stack![
            base,
            opaque(
                mouse_area(center(opaque(card)).style(colors.backdrop_style()))
                    .on_press(dismiss)
            )
        ]
        .into()
    }
}
