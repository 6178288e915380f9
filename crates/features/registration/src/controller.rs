//! Observable owner of the form state.
//!
//! All mutations go through [`RegistrationController`] and are published on a
//! `watch` channel; front-ends subscribe and re-render with
//! [`presenter::render`](crate::presenter::render).

use crate::field::FieldId;
use crate::form::{RegistrationForm, SubmitRejection};
use crate::gateway::{HttpUserGateway, SubmissionResult, UserGateway};
use crate::error::RegistrationError;
use crate::presenter::{self, FormView};
use nwatch_domain::config::{ClientConfig, NavigationConfig};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Moves the host application to another route.
pub trait Navigator: Send + Sync + 'static {
    fn navigate(&self, route: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str) + Send + Sync + 'static,
{
    fn navigate(&self, route: &str) {
        self(route);
    }
}

/// Forwards routes to a UI loop that owns the actual router.
impl Navigator for mpsc::UnboundedSender<String> {
    fn navigate(&self, route: &str) {
        if self.send(route.to_owned()).is_err() {
            warn!(route, "Navigation receiver is gone");
        }
    }
}

/// Result of [`RegistrationController::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No request was sent.
    Rejected(SubmitRejection),
    /// The request completed with this result.
    Settled(SubmissionResult),
}

/// Returns the form to a non-submitting state if a submission is dropped before it settles.
struct SubmittingGuard<'a> {
    state: &'a watch::Sender<RegistrationForm>,
}

impl Drop for SubmittingGuard<'_> {
    fn drop(&mut self) {
        self.state.send_if_modified(|form| {
            let was_submitting = form.is_submitting();
            form.abandon();
            was_submitting
        });
    }
}

pub struct RegistrationController<G> {
    state: Arc<watch::Sender<RegistrationForm>>,
    gateway: Arc<G>,
    navigator: Arc<dyn Navigator>,
    navigation: NavigationConfig,
}

impl<G> Clone for RegistrationController<G> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            gateway: Arc::clone(&self.gateway),
            navigator: Arc::clone(&self.navigator),
            navigation: self.navigation.clone(),
        }
    }
}

impl<G> std::fmt::Debug for RegistrationController<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegistrationController")
            .field("form", &*self.state.borrow())
            .field("navigation", &self.navigation)
            .finish_non_exhaustive()
    }
}

impl RegistrationController<HttpUserGateway> {
    /// Wires the HTTP gateway and navigation settings from the client config.
    ///
    /// # Errors
    /// Fails when the configured API base URL is unusable.
    pub fn from_config(
        config: &ClientConfig,
        navigator: impl Navigator,
    ) -> Result<Self, RegistrationError> {
        let gateway = HttpUserGateway::new(&config.api)?;
        Ok(Self::new(gateway, navigator, config.navigation.clone()))
    }
}

impl<G: UserGateway> RegistrationController<G> {
    pub fn new(gateway: G, navigator: impl Navigator, navigation: NavigationConfig) -> Self {
        let (state, _) = watch::channel(RegistrationForm::new());
        Self {
            state: Arc::new(state),
            gateway: Arc::new(gateway),
            navigator: Arc::new(navigator),
            navigation,
        }
    }

    /// A copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> RegistrationForm {
        self.state.borrow().clone()
    }

    /// A receiver notified on every state change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<RegistrationForm> {
        self.state.subscribe()
    }

    /// The current render snapshot.
    #[must_use]
    pub fn view(&self) -> FormView {
        presenter::render(&self.state.borrow())
    }

    pub fn set_value(&self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        self.state.send_modify(|form| form.set_value(field, value));
    }

    pub fn set_first_name(&self, value: impl Into<String>) {
        self.set_value(FieldId::FirstName, value);
    }

    pub fn set_last_name(&self, value: impl Into<String>) {
        self.set_value(FieldId::LastName, value);
    }

    pub fn set_email(&self, value: impl Into<String>) {
        self.set_value(FieldId::Email, value);
    }

    pub fn set_notification_enabled(&self, enabled: bool) {
        self.state.send_modify(|form| form.set_notification_enabled(enabled));
    }

    pub fn touch(&self, field: FieldId) {
        self.state.send_if_modified(|form| {
            let first_visit = !form.control(field).is_touched();
            form.touch(field);
            first_visit
        });
    }

    pub fn touch_all(&self) {
        self.state.send_modify(RegistrationForm::touch_all);
    }

    /// Validates, sends the registration and records the result.
    ///
    /// At most one request is in flight per form. On success the landing route
    /// is opened by a detached task once the configured delay has passed.
    pub async fn submit(&self) -> SubmitOutcome {
        let mut begun = Err(SubmitRejection::AlreadySubmitting);
        self.state.send_if_modified(|form| {
            begun = form.begin_submit();
            !matches!(begun, Err(SubmitRejection::AlreadySubmitting))
        });

        let payload = match begun {
            Ok(payload) => payload,
            Err(reason) => {
                debug!(?reason, "Submit rejected");
                return SubmitOutcome::Rejected(reason);
            },
        };

        let _guard = SubmittingGuard { state: &self.state };
        debug!(email = %payload.email, "Submitting registration");

        let result = match self.gateway.register(&payload).await {
            Ok(registered) => {
                info!(
                    status = registered.status,
                    id = registered.user.as_ref().map(|user| user.id),
                    "User registered"
                );
                SubmissionResult::Success
            },
            Err(err) => {
                error!(status = err.status(), error = %err, "Registration error");
                err.classify()
            },
        };

        self.state.send_modify(|form| form.settle(result));

        if result == SubmissionResult::Success {
            self.schedule_redirect();
        }

        SubmitOutcome::Settled(result)
    }

    fn schedule_redirect(&self) {
        let state = Arc::clone(&self.state);
        let navigator = Arc::clone(&self.navigator);
        let route = self.navigation.landing_route.clone();
        let delay = self.navigation.redirect_delay();

        debug!(%route, ?delay, "Redirect scheduled");
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            info!(%route, "Leaving registration page");
            navigator.navigate(&route);
            state.send_if_modified(|form| {
                let before = form.status();
                form.mark_idle();
                before != form.status()
            });
        });
    }
}
