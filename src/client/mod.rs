//! Form client — the browser page's behavior, without the browser.
//!
//! A [`session::Session`] holds the birth-details form, the two request
//! flows and their results. [`api::HttpApi`] carries requests to the
//! backend and [`view::render`] draws the page as text.

pub mod api;
pub mod form;
pub mod session;
pub mod view;
