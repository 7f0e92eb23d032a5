//! External classification service

pub mod client;

pub use client::{ClassifierClient, ClassifierError, INFO_FAILURE_MESSAGE};
