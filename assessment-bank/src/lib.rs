//! # Assessment bank client
//!
//! Client for the assessment bank REST service that stores StarLogo Nova
//! projects as "assessment taken" records.
//!
//! ## Example
//!
//! ```rust,no_run
//! use assessment_bank::{client::AssessmentBankClient, rest::HttpAssessmentBankClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HttpAssessmentBankClient::new("http://localhost:8080", "sln-proxy")?;
//!     let bank = client.get_or_create_bank().await?;
//!     let offered = client.get_or_create_assessment_offered(&bank.id).await?;
//!     let takens = client.list_assessments_taken(&bank.id, &offered.id).await?;
//!
//!     for taken in takens {
//!         println!("{}: {}", taken.id, taken.title());
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod rest;
pub mod types;

pub use client::AssessmentBankClient;
pub use error::BankError;
