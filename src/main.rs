use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use eduplat_backend::{
    config::Config,
    external::SupabaseStore,
    handlers,
    middlewares::create_cors,
    services::*,
    swagger::swagger_config,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let ts = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");
            let level = record.level().as_str().to_ascii_lowercase();
            let msg_json = serde_json::to_string(&format!("{}", record.args()))
                .unwrap_or_else(|_| "\"<invalid utf8>\"".to_string());
            writeln!(
                buf,
                "{{\"timestamp\":\"{}\",\"level\":\"{}\",\"message\":{},\"target\":\"{}\"}}",
                ts,
                level,
                msg_json,
                record.target(),
            )
        })
        .target(Target::Stdout)
        .init();

    // 加载配置
    let config = Config::from_toml().expect("Failed to load configuration file");

    // 创建远端记录存储客户端
    let store = Arc::new(SupabaseStore::new(config.supabase.clone()));

    // 创建服务
    let entitlement_service = EntitlementService::new();
    let stats_service = StatsService::new();
    let availability_service =
        AvailabilityService::new(store, stats_service, config.dashboard.clone());

    // 首次初始化：每一步失败都有回退，从不阻塞启动
    let state = availability_service.initialize().await;
    log::info!(
        "Dashboard initialized in {} mode (generation {})",
        state.mode,
        state.generation
    );
    if let Some(notice) = &state.error_notice {
        log::warn!("Startup degraded: {} - {}", notice.code, notice.message);
    }

    // 后台定时刷新（间隔为 0 表示关闭）
    if config.dashboard.refresh_interval_secs > 0 {
        let availability = availability_service.clone();
        let interval = config.dashboard.refresh_interval_secs;
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(interval)).await;
                let state = availability.initialize().await;
                log::info!(
                    "Dashboard refreshed in {} mode (generation {})",
                    state.mode,
                    state.generation
                );
            }
        });
    }

    // 启动HTTP服务器
    log::info!(
        "Starting HTTP server at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(availability_service.clone()))
            .app_data(web::Data::new(entitlement_service.clone()))
            .configure(swagger_config)
            .service(
                web::scope("/api/v1")
                    .configure(handlers::dashboard_config)
                    .configure(handlers::entitlement_config),
            )
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
