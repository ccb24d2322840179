//! Contact form model: field values, validation and the submission lifecycle.
//!
//! The form is relayed as-is to a third-party endpoint. A successful submission
//! clears the form; a failed one keeps every value so the visitor can retry.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    NewWebsite,
    WebsiteRedesign,
    LandingPage,
    Other,
}

impl ProjectType {
    pub const ALL: [ProjectType; 4] = [
        ProjectType::NewWebsite,
        ProjectType::WebsiteRedesign,
        ProjectType::LandingPage,
        ProjectType::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::NewWebsite => "New Website",
            ProjectType::WebsiteRedesign => "Website Redesign",
            ProjectType::LandingPage => "Landing Page",
            ProjectType::Other => "Other",
        }
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for ProjectType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectType::ALL
            .into_iter()
            .find(|p| p.label() == s)
            .ok_or_else(|| format!("Unknown project type '{}'", s))
    }
}

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub value: String,
    pub valid: bool,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            value: String::new(),
            valid: true,
        }
    }
}

impl Field {
    fn is_filled(&self) -> bool {
        !self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: Field,
    pub email: Field,
    pub project: Option<ProjectType>,
    pub message: Field,
}

/// JSON body sent to the form relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project: ProjectType,
    pub message: String,
}

/// Tags one submission, so that the result of a POST sent before a reload is not
/// applied to a later submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(uuid::Uuid);

impl SubmissionId {
    fn new() -> Self {
        SubmissionId(uuid::Uuid::new_v4())
    }
}

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

fn is_valid_email(email: &str) -> bool {
    email_address::EmailAddress::parse_with_options(
        email.trim(),
        email_address::Options::default().with_required_tld(),
    )
    .is_ok()
}

#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    pub form: ContactForm,
    pub status: SubmissionStatus,
    in_flight: Option<SubmissionId>,
}

impl ContactFormState {
    pub fn edit_name(&mut self, name: String) {
        self.form.name.valid = true;
        self.form.name.value = name;
    }

    pub fn edit_email(&mut self, email: String) {
        self.form.email.valid = email.is_empty() || is_valid_email(&email);
        self.form.email.value = email;
    }

    pub fn select_project(&mut self, project: ProjectType) {
        self.form.project = Some(project);
    }

    pub fn edit_message(&mut self, message: String) {
        self.form.message.valid = true;
        self.form.message.value = message;
    }

    pub fn is_complete(&self) -> bool {
        self.form.name.is_filled()
            && is_valid_email(&self.form.email.value)
            && self.form.project.is_some()
            && self.form.message.is_filled()
    }

    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Sending
    }

    /// Id of the submission awaiting its result, if any.
    pub fn in_flight(&self) -> Option<SubmissionId> {
        self.in_flight
    }

    pub fn shows_error_banner(&self) -> bool {
        self.status == SubmissionStatus::Error
    }

    /// Moves the form to `Sending` and returns the body to post, tagged with the id its
    /// result must be delivered with.
    ///
    /// Returns `None` while a submission is in flight, or when a field is missing or
    /// invalid, in which case the offending fields are flagged.
    pub fn start_submission(&mut self) -> Option<(SubmissionId, ContactSubmission)> {
        if !self.can_submit() {
            return None;
        }
        let Some(project) = self.form.project.filter(|_| self.is_complete()) else {
            self.form.name.valid = self.form.name.is_filled();
            self.form.email.valid = is_valid_email(&self.form.email.value);
            self.form.message.valid = self.form.message.is_filled();
            return None;
        };

        let id = SubmissionId::new();
        self.status = SubmissionStatus::Sending;
        self.in_flight = Some(id);
        Some((
            id,
            ContactSubmission {
                name: self.form.name.value.trim().to_string(),
                email: self.form.email.value.trim().to_string(),
                project,
                message: self.form.message.value.clone(),
            },
        ))
    }

    /// Records the outcome of submission `id`. Results of any other submission, such as
    /// one sent before the form was torn down, are dropped.
    pub fn on_submitted<E: std::fmt::Display>(
        &mut self,
        id: SubmissionId,
        result: Result<(), E>,
    ) {
        if self.in_flight != Some(id) {
            log::debug!("Ignoring result of submission {}, not in flight", id);
            return;
        }
        self.in_flight = None;
        match result {
            Ok(()) => {
                log::info!("Contact form submitted");
                self.status = SubmissionStatus::Success;
                self.form = ContactForm::default();
            }
            Err(e) => {
                log::error!("Contact form submission failed: {}", e);
                self.status = SubmissionStatus::Error;
            }
        }
    }

    /// Leaves the success acknowledgment for an empty form.
    pub fn send_another(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.form = ContactForm::default();
    }
}
