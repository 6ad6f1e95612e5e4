//! Domain logic: the mail boundary, Mandrill payloads and the delivery method

pub mod delivery;
pub mod mail;
pub mod mandrill;
