// src/platform/mod.rs - Platform abstraction for HTTP transport and key-value storage

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod network;
pub mod storage;

pub use network::{CORRELATION_HEADER, HttpMethod, NetworkArc, NetworkProvider, NetworkRequest, NetworkResponse};
pub use storage::{MemoryStorage, StorageArc, StorageProvider};

use crate::error::Result;

/// Platform services the dashboard runs on
#[derive(Clone)]
pub struct Providers {
    pub network: NetworkArc,
    pub storage: StorageArc,
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers").finish_non_exhaustive()
    }
}

/// Providers for the current target: reqwest and files on native, fetch and
/// localStorage on the web
pub fn create_providers() -> Result<Providers> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        native::create_providers()
    }

    #[cfg(target_arch = "wasm32")]
    {
        web::create_providers()
    }
}
