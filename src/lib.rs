//! # Activities
//!
//! Client core for the activities sign-up API.
//!
//! The API serves a mapping of activity name to details and accepts sign-up
//! and unregister calls for a participant email. This crate holds everything
//! a front-end needs to talk to it and render the result:
//!
//! - [`model`]: wire types for `GET /activities` and the POST responses
//! - [`view`]: per-card view-model (spots left, avatar badges, selector options)
//! - [`endpoints`]: URL builders for the three endpoints
//! - [`message`]: status message rules and the fixed user-facing texts
//! - [`error`]: client error type
//!
//! With the default `native` feature the crate also provides a `reqwest`
//! based [`ActivitiesClient`], TOML/env [`Config`] and the `activities-cli`
//! binary. The browser front-end (`activities-ui`) depends on this crate with
//! `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use activities::{ActivitiesClient, ActivityCard, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let client = ActivitiesClient::new(&config.api)?;
//!
//!     let activities = client.list().await?;
//!     for card in ActivityCard::from_activities(&activities) {
//!         println!("{}: {}", card.name, card.availability());
//!     }
//!
//!     let message = client.signup("Chess Club", "emma@example.edu").await?;
//!     println!("{}", message);
//!
//!     Ok(())
//! }
//! ```

pub mod endpoints;
pub mod error;
pub mod message;
pub mod model;
pub mod view;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;

pub use error::{ClientError, ClientResult};
pub use message::{MessageKind, StatusMessage};
pub use model::{Activities, ActivityDetails, ApiMessage};
pub use view::{ActivityCard, ParticipantView, SelectOption};

#[cfg(feature = "native")]
pub use client::ActivitiesClient;
#[cfg(feature = "native")]
pub use config::{ApiConfig, Config, ConfigError, LoggingConfig};
