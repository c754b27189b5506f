//! The waitlist modal: what happens between "Join" and the result screen.
//!
//! `modal` is the pure state machine, `flow` drives it against the API and
//! owns the dismiss timers, `error` classifies what the API sends back.

mod error;
mod flow;
mod modal;

pub use error::error_message;
pub use error::is_duplicate_email;
pub use error::SubmissionError;
pub use error::GENERIC_ERROR_MESSAGE;
pub use flow::WaitlistSubmissionFlow;
pub use modal::Field;
pub use modal::StatusKind;
pub use modal::Step;
pub use modal::SubmissionStatus;
pub use modal::Timer;
pub use modal::ToastMessage;
pub use modal::WaitlistModal;
pub use modal::DUPLICATE_EMAIL_MESSAGE;
pub use modal::SUCCESS_MESSAGE;
