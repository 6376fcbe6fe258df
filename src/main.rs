use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use gigpay::config::AppConfig;
use gigpay::domain::money::WithdrawalPolicy;
use gigpay::identity::HeaderIdentity;
use gigpay::repo::gigs_repo::GigsRepo;
use gigpay::repo::outbox_repo::OutboxRepo;
use gigpay::repo::wallets_repo::WalletsRepo;
use gigpay::repo::withdrawals_repo::WithdrawalsRepo;
use gigpay::service::outbox_relay::OutboxRelay;
use gigpay::service::settlement_service::SettlementService;
use gigpay::service::withdrawal_service::WithdrawalService;
use gigpay::AppState;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&cfg.database_url)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    let wallets_repo = WalletsRepo { pool: pool.clone() };
    let withdrawals_repo = WithdrawalsRepo { pool: pool.clone() };
    let gigs_repo = GigsRepo { pool: pool.clone() };
    let outbox_repo = OutboxRepo { pool: pool.clone() };

    let withdrawal_service = WithdrawalService {
        pool: pool.clone(),
        wallets_repo: wallets_repo.clone(),
        withdrawals_repo: withdrawals_repo.clone(),
        policy: WithdrawalPolicy::new(cfg.min_withdrawal, cfg.fee_rate),
    };
    let settlement_service = SettlementService {
        pool: pool.clone(),
        gigs_repo: gigs_repo.clone(),
    };

    let relay = OutboxRelay {
        outbox_repo,
        redis_client: redis::Client::open(cfg.redis_url.clone())?,
        stream_key: cfg.stream_key.clone(),
    };
    tokio::spawn(relay.run());

    let state = AppState {
        withdrawal_service,
        settlement_service,
        wallets_repo,
        withdrawals_repo,
        identity: Arc::new(HeaderIdentity),
        redis_client: redis::Client::open(cfg.redis_url.clone())?,
        pool,
    };

    let internal_key = cfg.internal_api_key.clone();
    let internal_routes = Router::new()
        .route(
            "/internal/withdrawals/pending",
            get(gigpay::http::handlers::withdrawals_admin::list_pending),
        )
        .layer(from_fn_with_state(
            internal_key,
            gigpay::http::middleware::internal_auth::require_internal_api_key,
        ));

    let app = Router::new()
        .route("/health", get(gigpay::http::handlers::ops::health))
        .route(
            "/api/wallet/withdraw",
            post(gigpay::http::handlers::wallet::submit_withdrawal),
        )
        .route(
            "/api/wallet/withdraw/quote",
            get(gigpay::http::handlers::wallet::withdrawal_quote),
        )
        .route("/api/wallet", get(gigpay::http::handlers::wallet::get_wallet))
        .route(
            "/api/wallet/withdrawals",
            get(gigpay::http::handlers::wallet::list_withdrawals),
        )
        .route(
            "/api/gig/complete",
            post(gigpay::http::handlers::gig::complete_gig),
        )
        .route("/ops/readiness", get(gigpay::http::handlers::ops::readiness))
        .route("/ops/liveness", get(gigpay::http::handlers::ops::liveness))
        .merge(internal_routes)
        .layer(from_fn_with_state(
            gigpay::http::middleware::rate_limit::RateLimitState {
                redis_client: redis::Client::open(cfg.redis_url.clone())?,
                max_per_minute: 300,
            },
            gigpay::http::middleware::rate_limit::enforce,
        ))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
