//! Selects storage and credential adapters and wires them into [`HttpState`].

use std::sync::Arc;

use bloglist::domain::ports::{BlogRepository, UserRepository};
use bloglist::inbound::http::state::{HttpState, HttpStatePorts};
use bloglist::outbound::memory::InMemoryStore;
use bloglist::outbound::persistence::DieselStore;
use bloglist::outbound::security::{BcryptPasswordHasher, JwtTokenService};
use tracing::info;

use super::ServerConfig;

fn build_repositories(config: &ServerConfig) -> (Arc<dyn BlogRepository>, Arc<dyn UserRepository>) {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL store");
            let store = Arc::new(DieselStore::new(pool.clone()));
            (store.clone(), store)
        }
        None => {
            info!("using in-memory store; data is lost on restart");
            let store = Arc::new(InMemoryStore::new());
            (store.clone(), store)
        }
    }
}

/// Build handler state for `config`.
pub(super) fn build_http_state(config: &ServerConfig) -> HttpState {
    let (blogs, users) = build_repositories(config);
    HttpState::new(HttpStatePorts {
        blogs,
        users,
        tokens: Arc::new(JwtTokenService::new(
            config.token_secret.as_slice(),
            config.token_ttl_secs,
        )),
        hasher: Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
    })
}
