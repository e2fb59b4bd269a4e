//! Network access from the browser.

pub mod api;
pub mod exchange;
