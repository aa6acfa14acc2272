pub mod client;

pub use client::HttpAssessmentBankClient;
