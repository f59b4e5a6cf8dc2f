//! Client for publishing provider verification results to a pact broker
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]

pub mod auth;
pub mod client;
pub mod error;
pub mod publish;

pub use auth::{
    BrokerAuth,
    BrokerClientOptions,
};
pub use client::PactBrokerClient;
pub use error::{
    BrokerClientError,
    Result,
};
pub use publish::{
    PublishResult,
    PublishVerificationResults,
};
