pub mod config;
pub mod domain {
    pub mod api;
    pub mod events;
    pub mod gig;
    pub mod money;
    pub mod rating;
    pub mod withdrawal;
}
pub mod identity;
pub mod http {
    pub mod handlers {
        pub mod gig;
        pub mod ops;
        pub mod wallet;
        pub mod withdrawals_admin;
    }
    pub mod middleware {
        pub mod internal_auth;
        pub mod rate_limit;
    }
}
pub mod repo {
    pub mod gigs_repo;
    pub mod outbox_repo;
    pub mod users_repo;
    pub mod wallets_repo;
    pub mod withdrawals_repo;
}
pub mod service {
    pub mod outbox_relay;
    pub mod settlement_service;
    pub mod withdrawal_service;
}

#[derive(Clone)]
pub struct AppState {
    pub withdrawal_service: service::withdrawal_service::WithdrawalService,
    pub settlement_service: service::settlement_service::SettlementService,
    pub wallets_repo: repo::wallets_repo::WalletsRepo,
    pub withdrawals_repo: repo::withdrawals_repo::WithdrawalsRepo,
    pub identity: std::sync::Arc<dyn identity::IdentityProvider>,
    pub redis_client: redis::Client,
    pub pool: sqlx::PgPool,
}
