use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use tokio::task::JoinHandle;
use uuid::Uuid;

use super::Field;
use super::SubmissionError;
use super::Timer;
use super::WaitlistModal;
use crate::configuration::ModalSettings;
use crate::domain::WaitlistAck;
use crate::domain::WaitlistEntry;
use crate::domain::WaitlistForm;
use crate::waitlist_client::WaitlistClient;

type CloseCallback = Arc<dyn Fn() + Send + Sync>;

/// State shared with the timer tasks. Locks are never held across an
/// `.await`.
///
/// Lock order is `timers`, then `modal`. Anything that arms a timer, and every
/// timer that fires, holds `timers` for the whole check-and-update, so a
/// timer can only ever touch the state it was armed for.
struct Shared {
    timers: Mutex<Timers>,
    modal: Mutex<WaitlistModal>,
    mounted: AtomicBool,
    on_close: CloseCallback,
}

/// A pending timer task, stamped with the generation it was armed with
struct Armed {
    generation: u64,
    handle: JoinHandle<()>,
}

#[derive(Default)]
struct Timers {
    next_generation: u64,
    auto_close: Option<Armed>,
    toast_dismiss: Option<Armed>,
}

impl Timers {
    fn slot(
        &mut self,
        timer: Timer,
    ) -> &mut Option<Armed> {
        match timer {
            Timer::AutoClose => &mut self.auto_close,
            Timer::ToastDismiss => &mut self.toast_dismiss,
        }
    }

    fn cancel(
        &mut self,
        timer: Timer,
    ) {
        if let Some(armed) = self.slot(timer).take() {
            armed.handle.abort();
        }
    }
}

impl Shared {
    // a panic while holding a lock leaves the state consistent (every
    // transition is a handful of assignments), so poisoning is ignored
    fn modal(&self) -> MutexGuard<'_, WaitlistModal> {
        self.modal.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn timers(&self) -> MutexGuard<'_, Timers> {
        self.timers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_mounted(&self) -> bool { self.mounted.load(Ordering::SeqCst) }

    fn cancel(
        &self,
        timer: Timer,
    ) {
        self.timers().cancel(timer);
    }

    /// Apply `change` to the modal and arm whichever timer it asks for. A timer
    /// of the same kind that is still pending is aborted: a newer toast
    /// restarts the countdown.
    fn arm(
        self: &Arc<Self>,
        settings: &ModalSettings,
        change: impl FnOnce(&mut WaitlistModal) -> Option<Timer>,
    ) {
        let mut timers = self.timers();
        let Some(timer) = change(&mut *self.modal()) else {
            return;
        };
        let delay = match timer {
            Timer::AutoClose => settings.success_dismiss(),
            Timer::ToastDismiss => settings.toast_dismiss(),
        };

        timers.next_generation += 1;
        let generation = timers.next_generation;
        let shared = Arc::clone(self);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            shared.fire(timer, generation);
        });

        timers.cancel(timer);
        *timers.slot(timer) = Some(Armed { generation, handle });
    }

    /// Body of an expired timer. Does nothing if the timer has been cancelled
    /// or re-armed since.
    fn fire(
        &self,
        timer: Timer,
        generation: u64,
    ) {
        if !self.is_mounted() {
            return;
        }
        {
            let mut timers = self.timers();
            let current = timers.slot(timer).as_ref().map(|armed| armed.generation);
            if current != Some(generation) {
                return;
            }
            // this is the task running right now; just forget it
            *timers.slot(timer) = None;
            match timer {
                Timer::AutoClose => self.modal().close(),
                Timer::ToastDismiss => self.modal().dismiss_toast(),
            }
        }
        // locks released: the callback may well call back into the flow
        if timer == Timer::AutoClose {
            tracing::info!("auto-closed waitlist modal");
            (self.on_close)();
        }
    }
}

/// One "join the waiting list" modal, wired to the API.
///
/// Wraps a `WaitlistModal` and takes care of everything the state machine
/// leaves to its caller: the network call, the success auto-close (which
/// invokes `on_close`), and the toast auto-dismiss.
///
/// Timers are `tokio` tasks, so the flow must be used from within a runtime.
/// Dropping the flow (or calling `unmount`) cancels them; a response that
/// arrives after that is ignored.
pub struct WaitlistSubmissionFlow {
    id: Uuid,
    client: Arc<WaitlistClient>,
    settings: ModalSettings,
    shared: Arc<Shared>,
}

impl WaitlistSubmissionFlow {
    pub fn new(
        client: Arc<WaitlistClient>,
        settings: ModalSettings,
        on_close: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            client,
            settings,
            shared: Arc::new(Shared {
                timers: Mutex::new(Timers::default()),
                modal: Mutex::new(WaitlistModal::new()),
                mounted: AtomicBool::new(true),
                on_close: Arc::new(on_close),
            }),
        }
    }

    /// Copy of the current modal state, for rendering.
    pub fn snapshot(&self) -> WaitlistModal { self.shared.modal().clone() }

    pub fn update(
        &self,
        field: Field,
        value: impl Into<String>,
    ) {
        self.shared.modal().update(field, value);
    }

    /// Replace all four fields at once.
    pub fn fill(
        &self,
        form: WaitlistForm,
    ) {
        let mut modal = self.shared.modal();
        modal.update(Field::Email, form.email);
        modal.update(Field::FullName, form.full_name);
        modal.update(Field::Position, form.position);
        modal.update(Field::Country, form.country);
    }

    /// Parse whatever is currently in the form, then `submit` it. A form that
    /// doesn't parse never reaches the API; its problem is shown as a toast.
    pub async fn submit_form(&self) -> Result<WaitlistAck, SubmissionError> {
        let form = self.shared.modal().form().clone();
        match WaitlistEntry::try_from(form) {
            Ok(entry) => self.submit(entry).await,
            Err(e) => {
                tracing::warn!(error.message = %e, "waitlist form did not parse");
                self.shared
                    .arm(&self.settings, |modal| Some(modal.show_toast(e.clone())));
                Err(SubmissionError::Invalid(e))
            }
        }
    }

    /// Send `entry` to the waitlist API, exactly once. No retries: on failure
    /// the user resubmits by hand (and a duplicate is then reported by the
    /// API as such).
    #[tracing::instrument(
        name = "Submitting waitlist entry",
        skip(self, entry),
        fields(
            flow_id = %self.id,
            email = %entry.email,
            position = entry.position.code(),
        )
    )]
    pub async fn submit(
        &self,
        entry: WaitlistEntry,
    ) -> Result<WaitlistAck, SubmissionError> {
        self.shared.modal().begin_submit()?;
        // a fresh submission supersedes a pending success screen
        self.shared.cancel(Timer::AutoClose);

        let outcome = self.client.add_to_waitlist(&entry).await;

        match &outcome {
            Ok(_) => tracing::info!("joined the waiting list"),
            // the user is told so inline, and can fix the address
            Err(e @ SubmissionError::DuplicateEmail(_)) => {
                tracing::info!(error.message = %e, "email is already on the waiting list")
            }
            Err(e) => tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "failed to join the waiting list"
            ),
        }

        self.finish(&outcome);
        outcome
    }

    /// Apply an outcome to the modal and arm its timer.
    pub(crate) fn finish(
        &self,
        outcome: &Result<WaitlistAck, SubmissionError>,
    ) {
        // nobody is looking anymore; leave the (dead) state alone
        if !self.shared.is_mounted() {
            tracing::warn!("waitlist modal went away before the response arrived");
            return;
        }
        self.shared.arm(&self.settings, |modal| modal.resolve(outcome));
    }

    /// "Try Again" on the duplicate-email screen
    pub fn try_again(&self) { self.shared.modal().try_again(); }

    pub fn dismiss_status(&self) {
        let mut timers = self.shared.timers();
        timers.cancel(Timer::AutoClose);
        self.shared.modal().dismiss_status();
    }

    pub fn dismiss_toast(&self) {
        let mut timers = self.shared.timers();
        timers.cancel(Timer::ToastDismiss);
        self.shared.modal().dismiss_toast();
    }

    /// User closed the modal (the ✕ button)
    pub fn close(&self) {
        {
            let mut timers = self.shared.timers();
            timers.cancel(Timer::AutoClose);
            timers.cancel(Timer::ToastDismiss);
            self.shared.modal().close();
        }
        (self.shared.on_close)();
    }

    pub fn reopen(&self) { self.shared.modal().reopen(); }

    /// The view is gone: stop all timers, and ignore any late response.
    pub fn unmount(&self) {
        self.shared.mounted.store(false, Ordering::SeqCst);
        let mut timers = self.shared.timers();
        timers.cancel(Timer::AutoClose);
        timers.cancel(Timer::ToastDismiss);
    }
}

impl Drop for WaitlistSubmissionFlow {
    fn drop(&mut self) { self.unmount(); }
}
