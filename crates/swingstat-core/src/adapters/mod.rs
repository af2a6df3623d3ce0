//! History source adapters.

pub mod tradier;

pub use tradier::{TradierAdapter, TRADIER_API_KEY_ENV, TRADIER_BASE_URL, TRADIER_SANDBOX_URL};
