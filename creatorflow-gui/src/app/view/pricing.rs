use iced::{
    widget::{button, container, text, Column, Row, Space},
    Alignment, Element, Length,
};

use creatorflow::{
    pricing::{Currency, PricedPlan},
    session::CurrencySession,
};

use super::{section_header, BOLD, CAPTION_SIZE, H3_SIZE};
use crate::app::message::{Message, Page, PricingMessage};

pub fn pricing_section(session: &CurrencySession) -> Element<Message> {
    Column::new()
        .spacing(30)
        .push(section_header(
            "PRICING",
            "Simple, Transparent Pricing.",
            "No hidden fees. No surprises. Just clean websites at clear prices.",
        ))
        .push(currency_row(session))
        .push(
            session
                .plans()
                .into_iter()
                .fold(Row::new().spacing(20), |row, card| row.push(plan_card(card))),
        )
        .into()
}

fn currency_row(session: &CurrencySession) -> Element<Message> {
    let currency = session.active_currency();
    let config = currency.config();

    let detecting = session
        .is_loading()
        .then(|| text("Detecting your location…").size(CAPTION_SIZE));

    let detected = session.shows_auto_detected().then(|| {
        text(format!(
            "Auto-detected: {} {}",
            config.flag,
            session.detected_country().unwrap_or_default()
        ))
        .size(CAPTION_SIZE)
    });

    let selector = Column::new()
        .spacing(5)
        .push(
            button(text(format!(
                "{} {} {}",
                config.flag,
                currency,
                if session.is_dropdown_open() { "▴" } else { "▾" }
            )))
            .style(button::secondary)
            .on_press(PricingMessage::ToggleDropdown.into()),
        )
        .push_maybe(session.is_dropdown_open().then(|| currency_list(currency)));

    Row::new()
        .spacing(15)
        .align_y(Alignment::Start)
        .push(Space::with_width(Length::Fill))
        .push_maybe(detecting)
        .push_maybe(detected)
        .push(selector)
        .into()
}

fn currency_list<'a>(active: Currency) -> Element<'a, Message> {
    let close = button(text("Close").size(CAPTION_SIZE))
        .style(button::text)
        .on_press(PricingMessage::CloseDropdown.into());
    Currency::ALL
        .iter()
        .fold(Column::new().spacing(2).push(close), |col, currency| {
            let config = currency.config();
            let entry = button(
                Row::new()
                    .spacing(10)
                    .push(text(config.flag))
                    .push(text(currency.to_static_str()).font(BOLD))
                    .push(text(config.name)),
            )
            .width(Length::Fixed(260.0))
            .on_press(PricingMessage::SelectCurrency(*currency).into());
            col.push(if *currency == active {
                entry.style(button::primary)
            } else {
                entry.style(button::text)
            })
        })
        .into()
}

fn plan_card<'a>(card: PricedPlan) -> Element<'a, Message> {
    let plan = card.plan;
    let features = plan
        .features
        .iter()
        .fold(Column::new().spacing(8), |col, feature| {
            col.push(text(format!("✓ {}", feature)))
        });

    let cta = button(text(plan.call_to_action)).on_press(Message::Navigate(Page::Contact));
    let cta = if plan.featured {
        cta.style(button::primary)
    } else {
        cta.style(button::secondary)
    };

    container(
        Column::new()
            .spacing(15)
            .push_maybe(
                plan.featured
                    .then(|| text("MOST POPULAR").size(CAPTION_SIZE).font(BOLD)),
            )
            .push(text(plan.tier.to_string()).size(H3_SIZE))
            .push(text(card.price).size(36).font(BOLD))
            .push(text(plan.description))
            .push(features)
            .push(cta),
    )
    .padding(25)
    .width(Length::FillPortion(1))
    .style(container::bordered_box)
    .into()
}
