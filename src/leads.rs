//! Lead capture data: what the forms edit, how it is validated, and the
//! payloads that go over the wire to the webhook.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::config::MIN_PROBLEM_DESCRIPTION_CHARS;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum Service {
    #[default]
    #[serde(rename = "AI Agent")]
    AiAgent,
    #[serde(rename = "AI Phone Agent")]
    AiPhoneAgent,
    #[serde(rename = "Social Media Automation")]
    SocialMediaAutomation,
}

impl Service {
    pub const ALL: [Service; 3] = [
        Service::AiAgent,
        Service::AiPhoneAgent,
        Service::SocialMediaAutomation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Service::AiAgent => "AI Agent",
            Service::AiPhoneAgent => "AI Phone Agent",
            Service::SocialMediaAutomation => "Social Media Automation",
        }
    }

    /// Marketing blurb shown on the landing page feature cards.
    pub fn pitch(&self) -> &'static str {
        match self {
            Service::AiAgent => {
                "24/7 Intelligent Support Systems with advanced natural language processing capabilities"
            }
            Service::AiPhoneAgent => {
                "Customer Service with Virtual Assistant in phone calls for your business"
            }
            Service::SocialMediaAutomation => {
                "Leave the management of your automated social networks to the experts in Artificial Intelligence and recover valuable time"
            }
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown service: {0}")]
pub struct UnknownService(pub String);

impl FromStr for Service {
    type Err = UnknownService;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Service::ALL
            .into_iter()
            .find(|service| service.as_str() == s)
            .ok_or_else(|| UnknownService(s.to_string()))
    }
}

/// Why a form was not submitted. The display text is shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    MissingFullName,
    #[error("Please enter your name")]
    MissingName,
    #[error("Please enter your email")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your company name")]
    MissingCompanyName,
    #[error("Problem description must be at least {} characters", MIN_PROBLEM_DESCRIPTION_CHARS)]
    ProblemDescriptionTooShort { length: usize },
}

fn require(value: &str, err: ValidationError) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(err)
    } else {
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    require(email, ValidationError::MissingEmail)?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// Length as a browser reports it for a text field, in UTF-16 code units.
pub fn char_count(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Navigation-state handed from the landing page to a form page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeadHandoff {
    pub email: String,
}

impl LeadHandoff {
    /// Only forwards an email that has something besides whitespace in it.
    /// The value is forwarded as typed.
    pub fn from_capture(email: &str) -> Option<Self> {
        if email.trim().is_empty() {
            None
        } else {
            Some(Self {
                email: email.to_string(),
            })
        }
    }
}

/// Stamped onto every submission at the moment the visitor hits submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmissionMeta {
    pub submitted_at: String,
    pub user_agent: String,
}

impl SubmissionMeta {
    pub fn new(now: DateTime<Utc>, user_agent: impl Into<String>) -> Self {
        Self {
            submitted_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            user_agent: user_agent.into(),
        }
    }

    /// Reads the clock and `navigator.userAgent` from the browser.
    pub fn capture() -> Self {
        let user_agent = web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_default();
        Self::new(Utc::now(), user_agent)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    FullName,
    Email,
    Service,
    CompanyName,
    ProblemDescription,
    AdditionalInfo,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub full_name: String,
    pub email: String,
    pub service: Service,
    pub company_name: String,
    pub problem_description: String,
    pub additional_info: String,
}

impl ContactForm {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Fresh form, with the email prefilled when one was handed over.
    pub fn from_handoff(handoff: Option<&LeadHandoff>) -> Self {
        Self::with_email(handoff.map(|h| h.email.clone()).unwrap_or_default())
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::FullName => self.full_name = value,
            ContactField::Email => self.email = value,
            ContactField::Service => {
                if let Ok(service) = value.parse() {
                    self.service = service;
                }
            }
            ContactField::CompanyName => self.company_name = value,
            ContactField::ProblemDescription => self.problem_description = value,
            ContactField::AdditionalInfo => self.additional_info = value,
        }
    }

    pub fn problem_description_len(&self) -> usize {
        char_count(&self.problem_description)
    }

    /// Checks the rules in display order and stops at the first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.full_name, ValidationError::MissingFullName)?;
        check_email(&self.email)?;
        require(&self.company_name, ValidationError::MissingCompanyName)?;
        let length = self.problem_description_len();
        if length < MIN_PROBLEM_DESCRIPTION_CHARS {
            return Err(ValidationError::ProblemDescriptionTooShort { length });
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InitializeField {
    Name,
    Email,
    Service,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitializeForm {
    pub name: String,
    pub email: String,
    pub service: Service,
}

impl InitializeForm {
    pub fn with_email(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn from_handoff(handoff: Option<&LeadHandoff>) -> Self {
        Self::with_email(handoff.map(|h| h.email.clone()).unwrap_or_default())
    }

    pub fn set(&mut self, field: InitializeField, value: String) {
        match field {
            InitializeField::Name => self.name = value,
            InitializeField::Email => self.email = value,
            InitializeField::Service => {
                if let Ok(service) = value.parse() {
                    self.service = service;
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, ValidationError::MissingName)?;
        check_email(&self.email)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub full_name: String,
    pub email: String,
    pub service: Service,
    pub company_name: String,
    pub problem_description: String,
    pub additional_info: String,
    pub submitted_at: String,
    pub user_agent: String,
}

impl ContactSubmission {
    pub fn from_form(form: &ContactForm, meta: SubmissionMeta) -> Result<Self, ValidationError> {
        form.validate()?;
        Ok(Self {
            full_name: form.full_name.clone(),
            email: form.email.clone(),
            service: form.service,
            company_name: form.company_name.clone(),
            problem_description: form.problem_description.clone(),
            additional_info: form.additional_info.clone(),
            submitted_at: meta.submitted_at,
            user_agent: meta.user_agent,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeSubmission {
    pub name: String,
    pub email: String,
    pub service: Service,
    pub submitted_at: String,
    pub user_agent: String,
}

impl InitializeSubmission {
    pub fn from_form(form: &InitializeForm, meta: SubmissionMeta) -> Result<Self, ValidationError> {
        form.validate()?;
        Ok(Self {
            name: form.name.clone(),
            email: form.email.clone(),
            service: form.service,
            submitted_at: meta.submitted_at,
            user_agent: meta.user_agent,
        })
    }
}
