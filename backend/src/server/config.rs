//! HTTP server configuration object.

use bloglist::outbound::persistence::DbPool;
use zeroize::Zeroizing;

/// Everything [`super::create_server`] needs beyond the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) token_secret: Zeroizing<Vec<u8>>,
    pub(crate) token_ttl_secs: u64,
    pub(crate) bcrypt_cost: u32,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration backed by the in-memory store.
    #[must_use]
    pub fn new(
        bind_addr: (String, u16),
        token_secret: Zeroizing<Vec<u8>>,
        token_ttl_secs: u64,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            bind_addr,
            token_secret,
            token_ttl_secs,
            bcrypt_cost,
            db_pool: None,
        }
    }

    /// Persist through PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
