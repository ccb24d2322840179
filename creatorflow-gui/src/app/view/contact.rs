use iced::{
    widget::{button, container, pick_list, scrollable, text, text_input, Column, Row},
    Alignment, Element, Length,
};

use creatorflow::{
    contact::{ContactFormState, Field, ProjectType, SubmissionStatus},
    content::{CONTACT_EMAIL, SOCIAL_LINKS},
};

use super::{nav, BOLD, CAPTION_SIZE, H1_SIZE, H3_SIZE};
use crate::app::message::{ContactMessage, Message, Page};

pub fn contact_page(state: &ContactFormState) -> Element<Message> {
    let panel = if state.status == SubmissionStatus::Success {
        success()
    } else {
        form(state)
    };

    scrollable(
        Column::new()
            .spacing(50)
            .padding(40)
            .max_width(1200)
            .push(nav())
            .push(
                button(text("← Back to home"))
                    .style(button::text)
                    .on_press(Message::Navigate(Page::Home)),
            )
            .push(
                Row::new()
                    .spacing(60)
                    .push(info())
                    .push(container(panel).width(Length::FillPortion(3))),
            ),
    )
    .width(Length::Fill)
    .into()
}

fn info<'a>() -> Element<'a, Message> {
    Column::new()
        .spacing(25)
        .width(Length::FillPortion(2))
        .push(text("Let's Build Something Great.").size(H1_SIZE).font(BOLD))
        .push(text(
            "Tell us about your project and we will get back to you with next steps.",
        ))
        .push(
            Column::new()
                .spacing(5)
                .push(text("EMAIL").size(CAPTION_SIZE).font(BOLD))
                .push(
                    button(text(CONTACT_EMAIL))
                        .style(button::text)
                        .on_press(Message::OpenUrl(format!("mailto:{}", CONTACT_EMAIL))),
                ),
        )
        .push(
            SOCIAL_LINKS
                .iter()
                .fold(
                    Column::new()
                        .spacing(5)
                        .push(text("SOCIAL").size(CAPTION_SIZE).font(BOLD)),
                    |col, (name, url)| {
                        col.push(
                            button(text(*name))
                                .style(button::text)
                                .on_press(Message::OpenUrl(url.to_string())),
                        )
                    },
                ),
        )
        .push(
            Column::new()
                .spacing(5)
                .push(text("RESPONSE TIME").size(CAPTION_SIZE).font(BOLD))
                .push(text("Within 24 hours")),
        )
        .into()
}

fn input<'a>(
    label: &'a str,
    placeholder: &'a str,
    field: &'a Field,
    warning: &'a str,
    on_input: fn(String) -> ContactMessage,
) -> Column<'a, Message> {
    Column::new()
        .spacing(5)
        .push(text(label).size(CAPTION_SIZE).font(BOLD))
        .push(
            text_input(placeholder, &field.value)
                .on_input(move |value| Message::from(on_input(value)))
                .padding(10),
        )
        .push_maybe(
            (!field.valid).then(|| text(warning).size(CAPTION_SIZE).style(text::danger)),
        )
}

fn form(state: &ContactFormState) -> Element<Message> {
    let sending = state.status == SubmissionStatus::Sending;
    container(
        Column::new()
            .spacing(20)
            .push(text("Start Your Project").size(H3_SIZE).font(BOLD))
            .push(input(
                "NAME",
                "John Doe",
                &state.form.name,
                "Please enter your name",
                ContactMessage::NameEdited,
            ))
            .push(input(
                "EMAIL",
                "john@example.com",
                &state.form.email,
                "Please enter a valid email address",
                ContactMessage::EmailEdited,
            ))
            .push(
                Column::new()
                    .spacing(5)
                    .push(text("PROJECT TYPE").size(CAPTION_SIZE).font(BOLD))
                    .push(
                        pick_list(ProjectType::ALL, state.form.project, |project| {
                            Message::from(ContactMessage::ProjectSelected(project))
                        })
                        .placeholder("Select an option")
                        .padding(10)
                        .width(Length::Fill),
                    ),
            )
            .push(input(
                "MESSAGE",
                "Tell us about your project...",
                &state.form.message,
                "Please enter a message",
                ContactMessage::MessageEdited,
            ))
            .push_maybe(state.shows_error_banner().then(|| {
                text("Something went wrong. Please try again or email us directly.")
                    .style(text::danger)
            }))
            .push(
                button(text(if sending { "SENDING…" } else { "SEND MESSAGE" }).font(BOLD))
                    .style(button::primary)
                    .padding(12)
                    .width(Length::Fill)
                    .on_press_maybe(
                        state
                            .can_submit()
                            .then(|| Message::from(ContactMessage::Submit)),
                    ),
            ),
    )
    .padding(30)
    .style(container::bordered_box)
    .into()
}

fn success<'a>() -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .width(Length::Fill)
            .push(text("✓").size(H1_SIZE))
            .push(text("Message Sent!").size(H3_SIZE).font(BOLD))
            .push(text(
                "Thank you for reaching out. We will get back to you within 24 hours.",
            ))
            .push(
                button(text("Send Another"))
                    .style(button::secondary)
                    .on_press(ContactMessage::SendAnother.into()),
            ),
    )
    .padding(30)
    .style(container::bordered_box)
    .into()
}
