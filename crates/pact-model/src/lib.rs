//! `pact-model`
//!
//! Shared types describing a verified pact: who the consumer and provider are,
//! where the pact was loaded from, and the broker links attached to it.

pub mod attributes;
pub mod pact;
pub mod source;

pub use attributes::{
    PUBLISH_VERIFICATION_RESULTS_LINK,
    PactAttributes,
};
pub use pact::{
    Consumer,
    Pact,
    Provider,
};
pub use source::{
    BrokerUrlSource,
    PactSource,
};
