//! User registration feature slice.
//!
//! Layers, bottom-up:
//! * [`field`]: the three text fields, their labels and rule sets.
//! * [`validator`]: pure rule evaluation.
//! * [`gateway`]: the `POST /api/users` call and response classification.
//! * [`presenter`]: messages and the [`FormView`] render snapshot.
//! * [`controller`]: the observable form that ties them together.
//!
//! ```rust,no_run
//! use nwatch_domain::config::ClientConfig;
//! use nwatch_registration::{RegistrationController, SubmitOutcome};
//!
//! # async fn run() -> Result<(), nwatch_registration::RegistrationError> {
//! let controller = RegistrationController::from_config(&ClientConfig::default(), |route: &str| {
//!     println!("go to {route}");
//! })?;
//! controller.set_first_name("Jo");
//! controller.set_last_name("Li");
//! controller.set_email("jo@example.com");
//!
//! if let SubmitOutcome::Settled(result) = controller.submit().await {
//!     println!("{result:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod controller;
mod error;
pub mod field;
pub mod form;
pub mod gateway;
pub mod model;
pub mod presenter;
pub mod validator;

pub use crate::controller::{Navigator, RegistrationController, SubmitOutcome};
pub use crate::error::{CONFLICT_STATUS, RegistrationError, RegistrationErrorExt};
pub use crate::field::{FieldId, Rule};
pub use crate::form::{RegistrationForm, SubmissionStatus, SubmitRejection};
pub use crate::gateway::{HttpUserGateway, Registered, SubmissionResult, UserGateway};
pub use crate::model::{CreatedUser, UserPayload};
pub use crate::presenter::{Banner, BannerKind, FieldView, FormView};
