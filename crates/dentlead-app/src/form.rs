use std::net::IpAddr;

use chrono::Utc;

use dentlead_core::ids::SubmissionId;
use dentlead_core::lead::{LeadContact, LeadMetadata, LeadPayload, SubmissionReceipt};
use dentlead_core::locale::{thank_you_path, Locale, HOME_DIAL_CODE};
use dentlead_core::phone::{self, digits_only, PhoneErrorKind};
use dentlead_ports::outbound::{LeadSink, Translator};

use crate::error::AppError;
use crate::inference::DialCodeInference;
use crate::selector::CountrySelector;

pub const REQUIRED_FIELD_KEY: &str = "contactForm.required";
pub const SUBMIT_ERROR_KEY: &str = "contactForm.submitError";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Submitted { redirect: String },
    /// The CRM call failed; field values are kept for another attempt.
    Failed { error_key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    Phone(PhoneErrorKind),
    MissingField(FormField),
}

impl Rejection {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::Phone(kind) => kind.translation_key(),
            Self::MissingField(_) => REQUIRED_FIELD_KEY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted(SubmissionReceipt),
    Rejected(Rejection),
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub dial_code: String,
    /// Digits only.
    pub local_number: String,
    pub email: String,
    pub phone_touched: bool,
    pub phone_error: PhoneErrorKind,
    pub status: SubmissionStatus,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            name: String::new(),
            dial_code: HOME_DIAL_CODE.to_string(),
            local_number: String::new(),
            email: String::new(),
            phone_touched: false,
            phone_error: PhoneErrorKind::None,
            status: SubmissionStatus::Idle,
        }
    }
}

/// Drives one contact form from page load to submission.
pub struct ContactFormController<S>
where
    S: LeadSink,
{
    state: FormState,
    selector: CountrySelector,
    page_path: String,
    metadata: LeadMetadata,
    client_ip: Option<String>,
    inferred: bool,
    sink: S,
}

impl<S> ContactFormController<S>
where
    S: LeadSink,
{
    pub fn new(sink: S, page_path: impl Into<String>, metadata: LeadMetadata) -> Self {
        let state = FormState::default();
        Self {
            selector: CountrySelector::new(state.dial_code.clone()),
            state,
            page_path: page_path.into(),
            metadata,
            client_ip: None,
            inferred: false,
            sink,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn selector(&self) -> &CountrySelector {
        &self.selector
    }

    pub fn selector_mut(&mut self) -> &mut CountrySelector {
        &mut self.selector
    }

    /// Runs the starting dial code inference. Only the first call has any
    /// effect; later calls leave the user's choice alone.
    pub async fn mount(&mut self, inference: &DialCodeInference, client_ip: Option<IpAddr>) {
        if self.inferred {
            return;
        }
        self.inferred = true;

        let initial = inference
            .infer(&self.page_path, client_ip, &self.state.dial_code)
            .await;
        if self.selector.set_value(&initial.dial_code).is_ok() {
            self.state.dial_code = initial.dial_code;
        }
        self.client_ip = initial.ip;
    }

    /// Address sent with the lead when no inference runs for this form.
    pub fn set_client_ip(&mut self, client_ip: Option<IpAddr>) {
        self.client_ip = client_ip.map(|ip| ip.to_string());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.state.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.state.email = email.into();
    }

    /// Longest local number the phone input should accept for the current dial code.
    pub fn phone_input_max_len(&self) -> usize {
        phone::max_digits_for(&self.state.dial_code)
    }

    pub fn edit_local_number(&mut self, raw: &str) {
        self.state.local_number = digits_only(raw);
        self.state.phone_touched = true;
        if self.state.local_number.is_empty() {
            self.state.phone_error = PhoneErrorKind::None;
        } else {
            self.revalidate_phone();
        }
    }

    /// Switches the dial code, re-checking any number already typed.
    pub fn change_dial_code(&mut self, dial_code: &str) -> Result<(), AppError> {
        self.selector.set_value(dial_code)?;
        self.state.dial_code = dial_code.to_string();
        if !self.state.local_number.is_empty() {
            self.revalidate_phone();
        }
        Ok(())
    }

    /// Picks a country from the open dropdown.
    pub fn choose_country(&mut self, index: usize) -> Result<(), AppError> {
        match self.selector.select(index) {
            Some(dial_code) => self.change_dial_code(dial_code),
            None => Ok(()),
        }
    }

    fn revalidate_phone(&mut self) {
        let verdict = phone::validate(&self.state.dial_code, &self.state.local_number);
        self.state.phone_error = verdict.error_kind;
    }

    /// Inline message under the phone field, once the visitor has typed in it.
    pub fn phone_error_message(&self, translator: &dyn Translator) -> Option<String> {
        if !self.state.phone_touched || self.state.phone_error == PhoneErrorKind::None {
            return None;
        }
        Some(translator.t(self.state.phone_error.translation_key()))
    }

    pub fn status_message(&self, translator: &dyn Translator) -> Option<String> {
        match &self.state.status {
            SubmissionStatus::Failed { error_key } => Some(translator.t(error_key)),
            _ => None,
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.state.status = SubmissionStatus::Idle;
        let verdict = phone::validate(&self.state.dial_code, &self.state.local_number);
        if !verdict.valid {
            self.state.phone_touched = true;
            self.state.phone_error = verdict.error_kind;
            tracing::debug!(error_kind = ?verdict.error_kind, "submission blocked by phone check");
            return SubmitOutcome::Rejected(Rejection::Phone(verdict.error_kind));
        }
        if self.state.name.trim().is_empty() {
            return SubmitOutcome::Rejected(Rejection::MissingField(FormField::Name));
        }
        if self.state.email.trim().is_empty() {
            return SubmitOutcome::Rejected(Rejection::MissingField(FormField::Email));
        }

        let id = SubmissionId::new();
        match self.send().await {
            Ok(()) => {
                let redirect = thank_you_path(&self.page_path);
                tracing::info!(submission_id = %id, redirect = %redirect, "lead submitted");
                self.state.status = SubmissionStatus::Submitted {
                    redirect: redirect.clone(),
                };
                SubmitOutcome::Submitted(SubmissionReceipt {
                    id,
                    redirect,
                    submitted_at: Utc::now(),
                })
            }
            Err(e) => {
                tracing::warn!(submission_id = %id, error = %e, "lead submission failed");
                self.state.status = SubmissionStatus::Failed {
                    error_key: SUBMIT_ERROR_KEY,
                };
                SubmitOutcome::Failed
            }
        }
    }

    async fn send(&self) -> Result<(), AppError> {
        let payload = LeadPayload::assemble(
            LeadContact {
                name: &self.state.name,
                dial_code: &self.state.dial_code,
                local_number: &self.state.local_number,
                email: &self.state.email,
            },
            Locale::for_path(&self.page_path),
            &self.metadata,
            self.client_ip.clone(),
        )?;
        self.sink.submit(&payload).await?;
        Ok(())
    }
}
