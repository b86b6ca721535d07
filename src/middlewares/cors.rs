use actix_cors::Cors;

pub fn create_cors() -> Cors {
    Cors::default()
        .allowed_origin_fn(|_, _req_head| {
            // 生产环境应限制允许的域名
            true
        })
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        // 本地开发放宽，防止前端自定义 Header 导致预检失败
        .allow_any_header()
        .max_age(3600)
}
