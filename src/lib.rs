// src/lib.rs

//! Order Dashboard - admin front end for an order processing backend
//!
//! Views over orders, payments and inventory on top of a typed API client,
//! a generic data table and a layered configuration. Runs as a desktop app
//! or in the browser.

#![deny(unsafe_code)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::result_large_err)]
#![allow(clippy::type_complexity)]

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = tracing_wasm::try_set_as_global_default() {
        web_sys::console::error_1(&format!("Failed to set up tracing: {:?}", e).into());
    }

    tracing::info!(version = VERSION, "Starting Order Dashboard");
    dioxus::launch(ui::App);
}

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod platform;
pub mod session;
pub mod table;
pub mod types;
pub mod ui;
pub mod utils;

#[cfg(not(target_arch = "wasm32"))]
pub mod logging;

pub use error::{Error, ErrorKind, Result, ResultExt};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
