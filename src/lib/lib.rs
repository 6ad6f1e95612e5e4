#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Mandrill delivery method
//!
//! Translates composed mail into Mandrill payloads and dispatches them
//! through a Mandrill API client, either as a plain message send or as a
//! server-side template send.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    delivery::{DeliveryMethod, Settings},
    mail::{Attachment, Mail},
    mandrill::{
        errors::MandrillError, ApiConnector, DeliveryMode, Message, MessagesApi, Template,
        TemplateContent,
    },
};
pub use infrastructure::config::MandrillConfig;
