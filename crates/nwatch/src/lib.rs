//! Facade crate for `NeoWatch` client features and shared modules.
//! Re-exports domain/kernel primitives and wires feature slices from config.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `nwatch` with the `client` feature.
//! - Call `nwatch::registration_form` with a loaded config and a navigator.

pub use nwatch_domain as domain;
pub use nwatch_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "client")]
    pub use nwatch_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
        #[cfg(feature = "client")]
        "registration",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Builds the registration form backed by the HTTP user service.
///
/// # Errors
/// Returns an error if the configured API endpoint is unusable.
#[cfg(feature = "client")]
pub fn registration_form(
    config: &domain::config::ClientConfig,
    navigator: impl features::registration::Navigator,
) -> Result<
    features::registration::RegistrationController<features::registration::HttpUserGateway>,
    features::registration::RegistrationError,
> {
    features::registration::RegistrationController::from_config(config, navigator)
}
