use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // A001 Рекламодатели
        // ========================================
        .route(
            "/api/advertisers",
            get(handlers::a001_advertiser::list_all).post(handlers::a001_advertiser::upsert),
        )
        .route(
            "/api/advertisers/export",
            get(handlers::a001_advertiser::export),
        )
        .route(
            "/api/advertisers/:id",
            get(handlers::a001_advertiser::get_by_id).delete(handlers::a001_advertiser::delete),
        )
        .route(
            "/api/advertisers/:id/status",
            post(handlers::a001_advertiser::set_status),
        )
        // ========================================
        // A002 Кампании
        // ========================================
        .route(
            "/api/campaigns",
            get(handlers::a002_campaign::list).post(handlers::a002_campaign::upsert),
        )
        .route("/api/campaigns/export", get(handlers::a002_campaign::export))
        .route(
            "/api/campaigns/:id",
            get(handlers::a002_campaign::get_by_id).delete(handlers::a002_campaign::delete),
        )
        .route(
            "/api/campaigns/:id/status",
            post(handlers::a002_campaign::set_status),
        )
        .route(
            "/api/campaigns/:id/budget",
            post(handlers::a002_campaign::set_budget),
        )
        // ========================================
        // A003 Группы объявлений
        // ========================================
        .route(
            "/api/ad_groups",
            get(handlers::a003_ad_group::list).post(handlers::a003_ad_group::upsert),
        )
        .route("/api/ad_groups/export", get(handlers::a003_ad_group::export))
        .route(
            "/api/ad_groups/:id",
            get(handlers::a003_ad_group::get_by_id).delete(handlers::a003_ad_group::delete),
        )
        .route(
            "/api/ad_groups/:id/status",
            post(handlers::a003_ad_group::set_status),
        )
        .route(
            "/api/ad_groups/:id/budget",
            post(handlers::a003_ad_group::set_budget),
        )
        // ========================================
        // A004 Креативы
        // ========================================
        .route(
            "/api/creatives",
            get(handlers::a004_creative::list).post(handlers::a004_creative::upsert),
        )
        .route("/api/creatives/export", get(handlers::a004_creative::export))
        .route(
            "/api/creatives/:id",
            get(handlers::a004_creative::get_by_id).delete(handlers::a004_creative::delete),
        )
        .route(
            "/api/creatives/:id/status",
            post(handlers::a004_creative::set_status),
        )
        // ========================================
        // Аналитика
        // ========================================
        .route(
            "/api/d400/rtb-metrics/live",
            get(handlers::d400_rtb_metrics::get_live),
        )
        .route(
            "/api/d401/fraud-detection",
            get(handlers::d401_fraud_detection::get_fraud_detection),
        )
        .route(
            "/api/d402/audience-insights",
            get(handlers::d402_audience_insights::get_audience_insights),
        )
        .route(
            "/api/d403/device-breakdown",
            get(handlers::d403_device_breakdown::get_device_breakdown),
        )
        .route(
            "/api/d404/creative-performance",
            get(handlers::d404_creative_performance::get_creative_performance),
        )
}
