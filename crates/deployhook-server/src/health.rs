use actix_http::StatusCode;
use actix_web::{web, HttpResponse, Responder};

use crate::server::AppContext;

pub(crate) async fn health_check_route(ctx: web::Data<AppContext>) -> impl Responder {
    let state_status = ctx.state_service.health_check().await.is_ok();
    let dispatch_status = ctx.deploy_service.health_check().await.is_ok();
    let status_code = if state_status && dispatch_status {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    HttpResponse::build(status_code).json(serde_json::json!({
        "state": state_status,
        "dispatch": dispatch_status,
    }))
}
