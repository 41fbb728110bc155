// src/ui/mod.rs - Dioxus front end

pub use app::App;

pub mod app;
pub mod components;
pub mod layout;
pub mod pages;
pub mod router;
pub mod services;
pub mod state;

pub use components::*;
pub use layout::*;
pub use pages::{Dashboard, Inventory, Login, NotFound, OrderDetail, Orders, Payments};
pub use router::Route;
pub use services::{use_api, use_services, AppServices};
pub use state::*;
