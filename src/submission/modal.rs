use super::SubmissionError;
use crate::domain::WaitlistAck;
use crate::domain::WaitlistForm;

pub const SUCCESS_MESSAGE: &str = "You have successfully joined the waiting list!";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "This email is already on our waiting list.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    FullName,
    Position,
    Country,
}

/// Which of the two screens the modal shows. "Submitting" is not a step of
/// its own: it is the `Form` step with the submit button disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Form,
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SubmissionStatus {
    fn idle() -> Self {
        Self {
            kind: StatusKind::Idle,
            message: String::new(),
        }
    }
}

/// Transient notification for failures that aren't worth a result screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessage {
    pub message: String,
}

/// Follow-up the caller must schedule after a state transition. The modal
/// itself knows nothing about time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timer {
    /// Clear the success status and close the modal.
    AutoClose,
    /// Clear the toast.
    ToastDismiss,
}

/// State of the "join the waiting list" modal.
///
/// ```text
/// Form --begin_submit--> Form (submitting) --resolve(Ok)--------> Result:Success --AutoClose--> closed
///                                          --resolve(duplicate)-> Result:Error --try_again--> Form
///                                          --resolve(other)-----> Form + toast
/// ```
#[derive(Debug, Clone)]
pub struct WaitlistModal {
    form: WaitlistForm,
    submitting: bool,
    status: SubmissionStatus,
    toast: Option<ToastMessage>,
    open: bool,
}

impl Default for WaitlistModal {
    fn default() -> Self { Self::with_form(WaitlistForm::default()) }
}

impl WaitlistModal {
    pub fn new() -> Self { Self::default() }

    /// Open the modal with pre-filled fields (e.g. a re-rendered form post)
    pub fn with_form(form: WaitlistForm) -> Self {
        Self {
            form,
            submitting: false,
            status: SubmissionStatus::idle(),
            toast: None,
            open: true,
        }
    }

    pub fn step(&self) -> Step {
        match self.status.kind {
            StatusKind::Idle => Step::Form,
            StatusKind::Success | StatusKind::Error => Step::Result,
        }
    }

    pub fn form(&self) -> &WaitlistForm { &self.form }

    pub fn status(&self) -> &SubmissionStatus { &self.status }

    pub fn toast(&self) -> Option<&ToastMessage> { self.toast.as_ref() }

    /// While `true`, the submit button is disabled.
    pub fn is_submitting(&self) -> bool { self.submitting }

    pub fn is_open(&self) -> bool { self.open }

    pub fn update(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) {
        let value = value.into();
        match field {
            Field::Email => self.form.email = value,
            Field::FullName => self.form.full_name = value,
            Field::Position => self.form.position = value,
            Field::Country => self.form.country = value,
        }
    }

    /// Only one request may be outstanding per modal.
    pub fn begin_submit(&mut self) -> Result<(), SubmissionError> {
        if self.submitting {
            return Err(SubmissionError::InFlight);
        }
        self.submitting = true;
        self.status = SubmissionStatus::idle();
        Ok(())
    }

    /// Apply the API's answer. Returns the timer to schedule, if any.
    pub fn resolve(
        &mut self,
        outcome: &Result<WaitlistAck, SubmissionError>,
    ) -> Option<Timer> {
        // a rejected double submit never got past `begin_submit`; the request
        // that is actually in flight still owns the modal
        if let Err(SubmissionError::InFlight) = outcome {
            return None;
        }
        self.submitting = false;
        match outcome {
            Ok(_) => {
                self.status = SubmissionStatus {
                    kind: StatusKind::Success,
                    message: SUCCESS_MESSAGE.to_owned(),
                };
                self.form = WaitlistForm::default();
                Some(Timer::AutoClose)
            }
            Err(SubmissionError::DuplicateEmail(_)) => {
                self.status = SubmissionStatus {
                    kind: StatusKind::Error,
                    message: DUPLICATE_EMAIL_MESSAGE.to_owned(),
                };
                None
            }
            // everything else: keep the form (and its data) usable
            Err(e) => Some(self.show_toast(e.user_message())),
        }
    }

    pub fn show_toast(
        &mut self,
        message: impl Into<String>,
    ) -> Timer {
        self.toast = Some(ToastMessage {
            message: message.into(),
        });
        Timer::ToastDismiss
    }

    /// "Try Again" on the error screen: back to the form, data intact.
    pub fn try_again(&mut self) { self.dismiss_status(); }

    pub fn dismiss_status(&mut self) { self.status = SubmissionStatus::idle(); }

    pub fn dismiss_toast(&mut self) { self.toast = None; }

    pub fn close(&mut self) {
        self.dismiss_status();
        self.dismiss_toast();
        self.open = false;
    }

    pub fn reopen(&mut self) { self.open = true; }
}
