//! Actors that are not plain resource stores.

mod notification_service;

pub use notification_service::*;
