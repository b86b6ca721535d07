use actix_web::{HttpResponse, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::{AvailabilityService, EntitlementService};

#[utoipa::path(
    get,
    path = "/entitlements",
    tag = "entitlement",
    responses(
        (status = 200, description = "获取当前账户能力集合成功", body = EntitlementSet)
    )
)]
pub async fn get_entitlements(
    availability: web::Data<AvailabilityService>,
    entitlements: web::Data<EntitlementService>,
) -> Result<HttpResponse> {
    let state = availability.state().await;
    // 匿名访客按 basic 处理，绝不放大权限
    let tier = state
        .account
        .as_ref()
        .map(|account| account.account_type)
        .unwrap_or_default();
    let set = entitlements.resolve(tier);

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": {
            "tier": tier,
            "entitlements": set
        }
    })))
}

pub fn entitlement_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/entitlements").route("", web::get().to(get_entitlements)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::external::SupabaseStore;
    use crate::services::StatsService;
    use actix_web::{App, test};
    use std::sync::Arc;

    #[actix_web::test]
    async fn test_anonymous_viewer_gets_basic_set() {
        let store = Arc::new(SupabaseStore::new(Default::default()));
        let availability =
            AvailabilityService::new(store, StatsService::new(), DashboardConfig::default());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(availability))
                .app_data(web::Data::new(EntitlementService::new()))
                .configure(entitlement_config),
        )
        .await;

        let req = test::TestRequest::get().uri("/entitlements").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["tier"], "basic");
        assert_eq!(body["data"]["entitlements"]["max_courses"], 3);
        assert_eq!(body["data"]["entitlements"]["ai_insights"], false);
    }
}
