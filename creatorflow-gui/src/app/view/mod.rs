pub mod contact;
pub mod home;
pub mod pricing;

use iced::{
    font::Weight,
    widget::{button, text, Column, Row, Space},
    Alignment, Element, Font, Length,
};

use creatorflow::content::AGENCY_NAME;

use super::message::{Message, Page};

pub const BOLD: Font = Font {
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const H1_SIZE: u16 = 48;
pub const H2_SIZE: u16 = 32;
pub const H3_SIZE: u16 = 20;
pub const CAPTION_SIZE: u16 = 13;

/// Label, title and subtitle opening every section.
pub fn section_header<'a>(label: &'a str, title: &'a str, subtitle: &'a str) -> Column<'a, Message> {
    Column::new()
        .spacing(10)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(text(label).size(CAPTION_SIZE).font(BOLD))
        .push(text(title).size(H2_SIZE).font(BOLD))
        .push(text(subtitle))
}

pub fn nav<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(20)
        .align_y(Alignment::Center)
        .push(
            button(text(AGENCY_NAME).size(H3_SIZE).font(BOLD))
                .style(button::text)
                .on_press(Message::Navigate(Page::Home)),
        )
        .push(Space::with_width(Length::Fill))
        .push(
            button(text("Reload"))
                .style(button::text)
                .on_press(Message::Reload),
        )
        .push(
            button(text("Work with CreatorFlow"))
                .style(button::primary)
                .on_press(Message::Navigate(Page::Contact)),
        )
        .into()
}
