// src/ui/services/mod.rs - Shared services handed to the views through context

use std::sync::Arc;

use dioxus::prelude::*;

use crate::api::{ApiClient, UnauthorizedHandler};
use crate::config::AppConfig;
use crate::platform::Providers;
use crate::session::SessionStore;

mod remote;

pub use remote::{use_remote, Remote};

/// Everything a view needs to talk to the backend
#[derive(Debug, Clone)]
pub struct AppServices {
    pub api: ApiClient,
    pub session: SessionStore,
    pub config: AppConfig,
}

impl AppServices {
    /// Wires the session store and the API client over the platform providers
    pub fn build(
        config: AppConfig,
        providers: Providers,
        on_unauthorized: Arc<dyn UnauthorizedHandler>,
    ) -> Self {
        let session = SessionStore::new(providers.storage);
        let api = ApiClient::standard(
            &config.api,
            providers.network,
            session.clone(),
            on_unauthorized,
        );

        Self {
            api,
            session,
            config,
        }
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>()
}

pub fn use_api() -> ApiClient {
    use_services().api
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::IgnoreUnauthorized;
    use crate::platform::{MemoryStorage, NetworkArc, NetworkProvider, NetworkRequest, NetworkResponse};

    #[derive(Debug)]
    struct Offline;

    #[async_trait::async_trait]
    impl NetworkProvider for Offline {
        async fn request(&self, request: NetworkRequest) -> crate::error::Result<NetworkResponse> {
            Err(crate::error::Error::network(request.url, "offline"))
        }
    }

    #[tokio::test]
    async fn build_shares_the_session_with_the_client() {
        let network: NetworkArc = Arc::new(Offline);
        let providers = Providers {
            network,
            storage: Arc::new(MemoryStorage::new()),
        };
        let services = AppServices::build(
            AppConfig::default(),
            providers,
            Arc::new(IgnoreUnauthorized),
        );

        services.session.set_token("abc").await.unwrap();
        assert!(services.session.is_authenticated());
        assert_eq!(
            services.api.api_url("/orders"),
            "http://localhost:8080/api/orders"
        );

        let err = services.api.list_inventory().await.unwrap_err();
        assert_eq!(err.status(), 0);
        assert_eq!(err.code(), "NETWORK_ERROR");
    }
}
