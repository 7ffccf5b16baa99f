//! Typed Rust client for the Azure Communication Services SMS API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for the JSON
//! wire format, and a small client layer that renders the message template, performs one
//! HTTP call and folds the per-recipient results into a single outcome.
//!
//! ```rust,no_run
//! use acs_sms::{AcsClient, RawPhoneNumber, TemplateParams};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AcsClient::new(
//!         "...",
//!         "Your code is {code}",
//!         &["https://my-resource.communication.azure.com"],
//!     )?;
//!     let params = TemplateParams::from([("code".to_owned(), "4821".to_owned())]);
//!     let from = RawPhoneNumber::new("+18005550100")?;
//!     let to = RawPhoneNumber::new("+14255550123")?;
//!     client.send_message(&params, &[from, to]).await?;
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod domain;
mod transport;

pub use client::{AcsClient, AcsClientBuilder, AcsError};
pub use crate::config::AcsSettings;
pub use domain::{
    ApiKey, Endpoint, MessageTemplate, PhoneNumber, RawPhoneNumber, RecipientResult,
    RepeatabilityResult, SMS_API_VERSION, SendMessage, SendMessageResponse, TemplateParams,
    ValidationError,
};
