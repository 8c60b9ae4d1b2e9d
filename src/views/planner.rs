use iced::font::{Family, Style, Weight};
use iced::widget::{button, column, container, row, scrollable, space, text, text_input};
use iced::{Element, Font, Length};

use crate::app::{DailyPlan, Message, PANEL_WIDTH};
use crate::theme::ThemeColors;

const FIELD_WIDTH: f32 = 56.0;
const LABEL_SIZE: f32 = 12.0;
const LIST_SIZE: f32 = 12.0;

const HEADING_FONT: Font = Font {
    family: Family::Serif,
    weight: Weight::Bold,
    ..Font::DEFAULT
};
const LIST_HEADING_FONT: Font = Font {
    family: Family::Serif,
    style: Style::Italic,
    ..Font::DEFAULT
};
const BUTTON_FONT: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

fn field_label(label: &str, colors: &ThemeColors) -> Element<'static, Message> {
    text(label.to_string())
        .size(LABEL_SIZE)
        .color(colors.text)
        .into()
}

/// `HH : MM` pair of small inputs.
fn time_row<'a>(
    hour: &'a str,
    minute: &'a str,
    on_hour: fn(String) -> Message,
    on_minute: fn(String) -> Message,
    colors: &ThemeColors,
) -> Element<'a, Message> {
    row![
        text_input("HH", hour)
            .on_input(on_hour)
            .on_submit(Message::Add)
            .width(FIELD_WIDTH)
            .padding(4),
        text(":").color(colors.text),
        text_input("MM", minute)
            .on_input(on_minute)
            .on_submit(Message::Add)
            .width(FIELD_WIDTH)
            .padding(4),
    ]
    .spacing(8)
    .align_y(iced::alignment::Vertical::Center)
    .into()
}

impl DailyPlan {
    pub(crate) fn view_panel(&self) -> Element<'_, Message> {
        let colors = &self.colors;
        let form = &self.form;

        let heading = text("Planner")
            .size(24)
            .font(HEADING_FONT)
            .color(colors.text);

        let start = time_row(
            &form.start_hour,
            &form.start_minute,
            Message::StartHourChanged,
            Message::StartMinuteChanged,
            colors,
        );
        let end = time_row(
            &form.end_hour,
            &form.end_minute,
            Message::EndHourChanged,
            Message::EndMinuteChanged,
            colors,
        );
        let description = text_input("", &form.description)
            .on_input(Message::DescriptionChanged)
            .on_submit(Message::Add)
            .padding(4);

        let action = |label: &'static str, message: Message, fill| {
            button(text(label).size(LABEL_SIZE).font(BUTTON_FONT).width(Length::Fill).center())
                .on_press(message)
                .width(Length::Fill)
                .padding(6)
                .style(colors.button_style(fill))
        };

        let buttons = column![
            action("Add to Schedule", Message::Add, colors.btn_add),
            action("Delete Selected", Message::DeleteSelected, colors.btn_delete),
            action("Reset All", Message::ResetRequested, colors.btn_reset),
        ]
        .spacing(8);

        let list_heading = text("Your List:")
            .size(15)
            .font(LIST_HEADING_FONT)
            .color(colors.text);

        let mut rows = column![].spacing(1);
        for (i, activity) in self.planner.activities().iter().enumerate() {
            let entry = button(
                text(format!(" {}", activity.display_text()))
                    .size(LIST_SIZE)
                    .color(colors.list_text),
            )
            .on_press(Message::Select(i))
            .width(Length::Fill)
            .padding(3)
            .style(colors.row_button_style());

            let entry = if self.selected == Some(i) {
                container(entry).style(colors.selected_style())
            } else {
                container(entry)
            };
            rows = rows.push(entry.width(Length::Fill));
        }

        let list = container(scrollable(rows).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(4)
            .style(colors.list_style());

        let content = column![
            heading,
            space::Space::new().height(12),
            field_label("Start Time (HH : MM):", colors),
            start,
            field_label("End Time (HH : MM):", colors),
            end,
            field_label("Activity Name:", colors),
            description,
            space::Space::new().height(8),
            buttons,
            space::Space::new().height(12),
            list_heading,
            list,
        ]
        .spacing(6);

        container(content)
            .padding(25)
            .width(PANEL_WIDTH)
            .height(Length::Fill)
            .style(colors.panel_style())
            .into()
    }
}
