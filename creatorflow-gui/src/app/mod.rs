pub mod message;
pub mod view;

use std::sync::Arc;

use iced::{Element, Task};

use creatorflow::{
    attempt_with_default,
    contact::{ContactFormState, ContactSubmission, SubmissionId},
    session::{CurrencySession, GeoOutcome, SessionId},
};

use crate::services::{contact::ContactApi, geolocation::GeoLocator};

pub use message::{ContactMessage, Message, Page, PricingMessage};

/// Runs the lookup of session `id`. Any locator error resolves to no country.
async fn lookup_country(id: SessionId, geo: Arc<dyn GeoLocator>) -> PricingMessage {
    let country =
        attempt_with_default(async move { geo.detect_country().await.map(Some) }, None).await;
    PricingMessage::GeoResolved(id, country)
}

async fn submit_contact(
    id: SubmissionId,
    api: Arc<dyn ContactApi>,
    submission: ContactSubmission,
) -> ContactMessage {
    let res = api.submit(&submission).await.map_err(|e| e.to_string());
    ContactMessage::Submitted(id, res)
}

pub struct App {
    page: Page,
    pricing: CurrencySession,
    contact: ContactFormState,
    geo: Arc<dyn GeoLocator>,
    contact_api: Arc<dyn ContactApi>,
}

impl App {
    pub fn new(geo: Arc<dyn GeoLocator>, contact_api: Arc<dyn ContactApi>) -> (Self, Task<Message>) {
        let app = Self {
            page: Page::Home,
            pricing: CurrencySession::new(),
            contact: ContactFormState::default(),
            geo,
            contact_api,
        };
        let task = app.detect_currency();
        (app, task)
    }

    pub fn title(&self) -> String {
        match self.page {
            Page::Home => "CreatorFlow".to_string(),
            Page::Contact => "CreatorFlow - Contact".to_string(),
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn pricing(&self) -> &CurrencySession {
        &self.pricing
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    /// Starts the lookup for the current pricing session. Pricing is displayed with the
    /// default currency meanwhile.
    fn detect_currency(&self) -> Task<Message> {
        Task::perform(
            lookup_country(self.pricing.id(), self.geo.clone()),
            Message::from,
        )
    }

    fn navigate(&mut self, page: Page) -> Task<Message> {
        if page == self.page {
            return Task::none();
        }
        self.page = page;
        // Leaving a page tears its session down, results of its pending requests are
        // dropped.
        self.pricing = CurrencySession::new();
        self.contact = ContactFormState::default();
        match page {
            Page::Home => self.detect_currency(),
            Page::Contact => Task::none(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Navigate(page) => self.navigate(page),
            Message::Reload => {
                log::info!("Reloading");
                self.pricing = CurrencySession::new();
                self.contact = ContactFormState::default();
                match self.page {
                    Page::Home => self.detect_currency(),
                    Page::Contact => Task::none(),
                }
            }
            Message::OpenUrl(url) => {
                if let Err(e) = open::that_detached(&url) {
                    log::error!("Error opening '{}': {}", url, e);
                }
                Task::none()
            }
            Message::Pricing(msg) => {
                self.update_pricing(msg);
                Task::none()
            }
            Message::Contact(msg) => self.update_contact(msg),
        }
    }

    fn update_pricing(&mut self, msg: PricingMessage) {
        match msg {
            PricingMessage::GeoResolved(id, country) => {
                match self.pricing.on_geo_result(id, country) {
                    GeoOutcome::Detected(currency) => {
                        log::info!("Showing prices in {}", currency)
                    }
                    GeoOutcome::FellBack => {
                        log::info!("Country not detected or not covered, showing default prices")
                    }
                    GeoOutcome::KeptManual => {
                        log::info!("Keeping manually selected currency")
                    }
                    GeoOutcome::Discarded => {}
                }
            }
            PricingMessage::ToggleDropdown => self.pricing.toggle_dropdown(),
            PricingMessage::CloseDropdown => self.pricing.close_dropdown(),
            PricingMessage::SelectCurrency(currency) => {
                log::info!("Currency selected manually: {}", currency);
                self.pricing.select_manually(currency);
            }
        }
    }

    fn update_contact(&mut self, msg: ContactMessage) -> Task<Message> {
        match msg {
            ContactMessage::NameEdited(name) => self.contact.edit_name(name),
            ContactMessage::EmailEdited(email) => self.contact.edit_email(email),
            ContactMessage::ProjectSelected(project) => self.contact.select_project(project),
            ContactMessage::MessageEdited(message) => self.contact.edit_message(message),
            ContactMessage::Submit => {
                let Some((id, submission)) = self.contact.start_submission() else {
                    return Task::none();
                };
                return Task::perform(
                    submit_contact(id, self.contact_api.clone(), submission),
                    Message::from,
                );
            }
            ContactMessage::Submitted(id, res) => self.contact.on_submitted(id, res),
            ContactMessage::SendAnother => self.contact.send_another(),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        match self.page {
            Page::Home => view::home::home(&self.pricing),
            Page::Contact => view::contact::contact_page(&self.contact),
        }
    }
}
