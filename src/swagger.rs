use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::dashboard::get_dashboard,
        handlers::dashboard::get_stats,
        handlers::dashboard::get_courses,
        handlers::dashboard::get_ads,
        handlers::dashboard::refresh,
        handlers::entitlement::get_entitlements,
    ),
    components(
        schemas(
            Account,
            AccountTier,
            Session,
            Course,
            CourseLevel,
            Advertisement,
            AdvertisementResponse,
            AdPlacement,
            AdStatus,
            DashboardStats,
            AdStats,
            DataMode,
            ErrorNotice,
            DashboardState,
            EntitlementSet,
            ApiError,
        )
    ),
    tags(
        (name = "dashboard", description = "Dashboard state and aggregation API"),
        (name = "entitlement", description = "Tier entitlement resolution API"),
    ),
    info(
        title = "EduPlat Backend API",
        version = "1.0.0",
        description = "EduPlat dashboard REST API documentation",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
