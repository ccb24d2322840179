use iced::{
    widget::{button, container, scrollable, text, Column, Row, Space},
    Alignment, Element, Length,
};

use creatorflow::{
    content::{
        AGENCY_NAME, CONTACT_EMAIL, PORTFOLIO, PROCESS, SERVICES, SOCIAL_LINKS, TAGLINE,
        TESTIMONIAL,
    },
    session::CurrencySession,
};

use super::{nav, pricing::pricing_section, section_header, BOLD, CAPTION_SIZE, H1_SIZE, H3_SIZE};
use crate::app::message::{Message, Page};

pub fn home(pricing: &CurrencySession) -> Element<Message> {
    scrollable(
        Column::new()
            .spacing(80)
            .padding(40)
            .max_width(1200)
            .push(nav())
            .push(hero())
            .push(services())
            .push(portfolio())
            .push(process())
            .push(pricing_section(pricing))
            .push(testimonial())
            .push(call_to_action())
            .push(footer()),
    )
    .width(Length::Fill)
    .into()
}

fn hero<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(25)
        .align_x(Alignment::Center)
        .width(Length::Fill)
        .push(text(TAGLINE).size(CAPTION_SIZE).font(BOLD))
        .push(text("We Build Websites That Convert.").size(H1_SIZE).font(BOLD))
        .push(text(
            "Clean, modern websites for creators, startups and growing businesses.",
        ))
        .push(
            Row::new()
                .spacing(15)
                .push(
                    button(text("Start Your Project"))
                        .style(button::primary)
                        .on_press(Message::Navigate(Page::Contact)),
                )
                .push(
                    button(text("View Our Work"))
                        .style(button::secondary)
                        .on_press_maybe(
                            PORTFOLIO
                                .first()
                                .map(|work| Message::OpenUrl(work.url.to_string())),
                        ),
                ),
        )
        .into()
}

fn services<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(30)
        .push(section_header(
            "SERVICES",
            "What We Build.",
            "Everything you need to look professional online.",
        ))
        .push(SERVICES.iter().fold(Row::new().spacing(20), |row, service| {
            row.push(
                container(
                    Column::new()
                        .spacing(10)
                        .push(text(service.title).size(H3_SIZE).font(BOLD))
                        .push(text(service.description)),
                )
                .padding(20)
                .width(Length::FillPortion(1))
                .style(container::bordered_box),
            )
        }))
        .into()
}

fn portfolio<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(30)
        .push(section_header(
            "PORTFOLIO",
            "Selected Work.",
            "A few of the websites we designed and built.",
        ))
        .push(PORTFOLIO.iter().fold(Row::new().spacing(20), |row, work| {
            row.push(
                button(
                    Column::new()
                        .spacing(5)
                        .push(text(work.name).size(H3_SIZE).font(BOLD))
                        .push(text("Visit site ↗").size(CAPTION_SIZE)),
                )
                .padding(20)
                .width(Length::FillPortion(1))
                .style(button::secondary)
                .on_press(Message::OpenUrl(work.url.to_string())),
            )
        }))
        .into()
}

fn process<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(30)
        .push(section_header(
            "PROCESS",
            "How It Works.",
            "From idea to launch in three simple steps.",
        ))
        .push(PROCESS.iter().fold(Row::new().spacing(20), |row, step| {
            row.push(
                Column::new()
                    .spacing(10)
                    .width(Length::FillPortion(1))
                    .push(
                        Row::new()
                            .spacing(10)
                            .push(text(step.number).size(H3_SIZE).font(BOLD))
                            .push(text(step.name).size(CAPTION_SIZE)),
                    )
                    .push(text(step.title).size(H3_SIZE))
                    .push(text(step.description)),
            )
        }))
        .into()
}

fn testimonial<'a>() -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .push(text(format!("\u{201c}{}\u{201d}", TESTIMONIAL.quote)).size(H3_SIZE))
            .push(text(TESTIMONIAL.author).font(BOLD))
            .push(text(TESTIMONIAL.role).size(CAPTION_SIZE)),
    )
    .padding(40)
    .width(Length::Fill)
    .into()
}

fn call_to_action<'a>() -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .push(text("Ready to Build Your Website?").size(H1_SIZE).font(BOLD))
            .push(text("Tell us about your project and get a reply within 24 hours."))
            .push(
                button(text("Get Started"))
                    .style(button::primary)
                    .on_press(Message::Navigate(Page::Contact)),
            ),
    )
    .padding(40)
    .style(container::bordered_box)
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(20)
        .align_y(Alignment::Center)
        .push(text(AGENCY_NAME).font(BOLD))
        .push(text(CONTACT_EMAIL).size(CAPTION_SIZE))
        .push(Space::with_width(Length::Fill))
        .push(SOCIAL_LINKS.iter().fold(Row::new().spacing(10), |row, (name, url)| {
            row.push(
                button(text(*name).size(CAPTION_SIZE))
                    .style(button::text)
                    .on_press(Message::OpenUrl(url.to_string())),
            )
        }))
        .into()
}
