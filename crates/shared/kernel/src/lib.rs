//! Kernel utilities shared across slices and applications.
//! Keep this crate lightweight; today it owns layered configuration loading.
//!
//! ## Config loading (non-wasm)
//! ```rust,no_run
//! # #[cfg(not(target_arch = "wasm32"))]
//! # {
//! use nwatch_kernel::config::load_client_config;
//! let cfg = load_client_config(None::<&str>).unwrap();
//! assert!(!cfg.api.base_url.is_empty());
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;

pub use nwatch_domain as domain;
