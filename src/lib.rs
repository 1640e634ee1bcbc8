//! # pirate-assist-ui
//!
//! Leptos + WASM front-end for assembling crew piracy reports. Users search
//! the backend catalogs (members, ships, locations, resources), collect hits
//! as removable result boxes grouped into named field-sets, optionally attach
//! a screenshot, and post the assembled document to the Discord relay.
//!
//! This crate contains the root component, the form components, application
//! state, the phrase parser for quantified booty entries, and the REST client
//! for the `/api` backend.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod parse;
pub mod state;
pub mod util;
