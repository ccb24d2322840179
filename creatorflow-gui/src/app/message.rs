use creatorflow::{
    contact::{ProjectType, SubmissionId},
    pricing::Currency,
    session::SessionId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Contact,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    /// Full reload: every session value goes back to its initial state.
    Reload,
    OpenUrl(String),
    Pricing(PricingMessage),
    Contact(ContactMessage),
}

#[derive(Debug, Clone)]
pub enum PricingMessage {
    /// Outcome of the lookup started for a session, `None` if it failed.
    GeoResolved(SessionId, Option<String>),
    ToggleDropdown,
    CloseDropdown,
    SelectCurrency(Currency),
}

#[derive(Debug, Clone)]
pub enum ContactMessage {
    NameEdited(String),
    EmailEdited(String),
    ProjectSelected(ProjectType),
    MessageEdited(String),
    Submit,
    /// Outcome of the submission with the given id.
    Submitted(SubmissionId, Result<(), String>),
    SendAnother,
}

impl From<PricingMessage> for Message {
    fn from(msg: PricingMessage) -> Self {
        Message::Pricing(msg)
    }
}

impl From<ContactMessage> for Message {
    fn from(msg: ContactMessage) -> Self {
        Message::Contact(msg)
    }
}
