//! Delivery method: submits composed mail to Mandrill

mod method;

pub use method::{DeliveryMethod, Settings};
