use actix_web::{HttpResponse, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::AvailabilityService;

#[utoipa::path(
    get,
    path = "/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "获取仪表盘状态成功", body = DashboardState)
    )
)]
pub async fn get_dashboard(availability: web::Data<AvailabilityService>) -> Result<HttpResponse> {
    let state = availability.state().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(state)))
}

#[utoipa::path(
    get,
    path = "/dashboard/stats",
    tag = "dashboard",
    responses(
        (status = 200, description = "获取统计快照成功", body = DashboardStats)
    )
)]
pub async fn get_stats(availability: web::Data<AvailabilityService>) -> Result<HttpResponse> {
    let state = availability.state().await;
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.stats)))
}

#[utoipa::path(
    get,
    path = "/dashboard/courses",
    tag = "dashboard",
    responses(
        (status = 200, description = "获取课程记录成功", body = [Course])
    )
)]
pub async fn get_courses(availability: web::Data<AvailabilityService>) -> Result<HttpResponse> {
    let state = availability.state().await;
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "mode": state.mode,
            "courses": state.courses
        }
    })))
}

#[utoipa::path(
    get,
    path = "/dashboard/ads",
    tag = "dashboard",
    responses(
        (status = 200, description = "获取广告记录与统计成功", body = [AdvertisementResponse])
    )
)]
pub async fn get_ads(availability: web::Data<AvailabilityService>) -> Result<HttpResponse> {
    let state = availability.state().await;
    // 状态推导沿用快照生成时刻，与 ad_stats 保持同一个 now
    let now = state.refreshed_at;
    let advertisements: Vec<AdvertisementResponse> = state
        .advertisements
        .iter()
        .map(|ad| ad.to_response(now))
        .collect();
    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "advertisements": advertisements,
            "stats": state.ad_stats
        }
    })))
}

#[utoipa::path(
    post,
    path = "/dashboard/refresh",
    tag = "dashboard",
    responses(
        (status = 200, description = "重新初始化完成", body = DashboardState)
    )
)]
pub async fn refresh(availability: web::Data<AvailabilityService>) -> Result<HttpResponse> {
    let state = availability.initialize().await;
    log::info!(
        "Dashboard refreshed via API in {} mode (generation {})",
        state.mode,
        state.generation
    );
    Ok(HttpResponse::Ok().json(ApiResponse::success_with_message(
        state,
        "Dashboard refreshed".to_string(),
    )))
}

pub fn dashboard_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/dashboard")
            .route("", web::get().to(get_dashboard))
            .route("/stats", web::get().to(get_stats))
            .route("/courses", web::get().to(get_courses))
            .route("/ads", web::get().to(get_ads))
            .route("/refresh", web::post().to(refresh)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::external::SupabaseStore;
    use crate::services::StatsService;
    use actix_web::{App, test};
    use std::sync::Arc;

    fn demo_service() -> AvailabilityService {
        // 未配置的存储：稳定的演示模式，测试不出网
        let store = Arc::new(SupabaseStore::new(Default::default()));
        AvailabilityService::new(store, StatsService::new(), DashboardConfig::default())
    }

    #[actix_web::test]
    async fn test_get_dashboard_serves_demo_state() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(demo_service()))
                .configure(dashboard_config),
        )
        .await;

        let req = test::TestRequest::get().uri("/dashboard").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["mode"], "demo");
        assert!(body["data"]["error_notice"].is_null());
    }

    #[actix_web::test]
    async fn test_refresh_bumps_generation() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(demo_service()))
                .configure(dashboard_config),
        )
        .await;

        let req = test::TestRequest::post().uri("/dashboard/refresh").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["generation"], 1);
    }

    #[actix_web::test]
    async fn test_get_stats_matches_demo_records() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(demo_service()))
                .configure(dashboard_config),
        )
        .await;

        let req = test::TestRequest::get().uri("/dashboard/stats").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        // 两门演示课程：1250 + 890 次浏览
        assert_eq!(body["data"]["total_courses"], 2);
        assert_eq!(body["data"]["total_views"], 2140);
        assert_eq!(body["data"]["total_students"], 214);
        assert_eq!(body["data"]["completion_rate"], 78.5);
    }
}
