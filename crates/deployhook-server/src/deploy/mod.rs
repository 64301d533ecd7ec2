//! Deploy handlers.

mod admin;
mod manual;
mod push;

use actix_web::{guard, http::header::ContentType, web, HttpResponse, Route};

use self::{
    admin::{set_project_hook, set_project_shell, set_target_branch, set_user_deploy},
    manual::manual_deploy,
    push::push_event,
};

const SUCCESS: &str = "success";
const FAIL: &str = "fail";

pub(crate) fn success_response() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(SUCCESS)
}

pub(crate) fn fail_response() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body(FAIL)
}

pub(crate) fn sentinel_response(ok: bool) -> HttpResponse {
    if ok {
        success_response()
    } else {
        fail_response()
    }
}

fn get_or_post() -> Route {
    web::route().guard(guard::Any(guard::Get()).or(guard::Post()))
}

/// Register deploy routes. The user route must stay ahead of the project
/// toggle route as both have the same shape.
pub(crate) fn configure_deploy_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/manual/{project}").route(get_or_post().to(manual_deploy)))
        .service(web::resource("/git/branch").route(get_or_post().to(set_target_branch)))
        .service(
            web::resource("/user/{user}/auto/deploy").route(get_or_post().to(set_user_deploy)),
        )
        .service(
            web::resource("/{project}/auto/deploy").route(get_or_post().to(set_project_hook)),
        )
        .service(
            web::resource("/{project}/deploy/shell").route(get_or_post().to(set_project_shell)),
        )
        .service(web::resource("/{project}").route(web::post().to(push_event)));
}
