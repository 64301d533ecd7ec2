//! Push webhook handler.

use actix_web::{web, HttpResponse};
use deployhook_core::use_cases::push::{ProcessPushEventInterface, PushOutcome};
use serde_json::Value;
use shaku::HasComponent;
use tracing::warn;

use super::sentinel_response;
use crate::{
    metrics::{DENIED_PUSH_EVENTS, DUPLICATE_PUSH_EVENTS},
    server::AppContext,
};

#[tracing::instrument(skip_all, fields(project = path.as_str()))]
pub(crate) async fn push_event(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> HttpResponse {
    let core_ctx = ctx.as_core_context();
    let process_push_event: &dyn ProcessPushEventInterface = ctx.core_module.resolve_ref();

    match process_push_event.run(&core_ctx, &path, &payload).await {
        Ok(outcome) => {
            match outcome {
                PushOutcome::Duplicate => DUPLICATE_PUSH_EVENTS.inc(),
                PushOutcome::Denied(_) => DENIED_PUSH_EVENTS.inc(),
                PushOutcome::Dispatched(_) => (),
            }

            sentinel_response(outcome.is_dispatched())
        }
        Err(e) => {
            warn!(project = %path.as_str(), error = %e, message = "Push event rejected");
            sentinel_response(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web::Data};
    use deployhook_dispatch_interface::MockDeployService;
    use deployhook_models::DeployCommand;
    use deployhook_state_interface::StateService;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use crate::server::{build_actix_app, tests::build_context, AppContext};

    async fn enable_venus(ctx: &AppContext) {
        ctx.state_service
            .projects_set_hook_enabled("venus", true)
            .await
            .unwrap();
        ctx.state_service
            .users_set_deploy_enabled("sunshuhan", true)
            .await
            .unwrap();
    }

    fn payload(branch_ref: &str) -> serde_json::Value {
        json!({
            "object_kind": "push",
            "ref": branch_ref,
            "checkout_sha": "abc123",
            "user_name": "sunshuhan",
            "user_email": "sunshuhan@example.com"
        })
    }

    #[actix_web::test]
    async fn push_then_replay() {
        let mut deploy_service = MockDeployService::new();
        deploy_service
            .expect_dispatch()
            .once()
            .withf(|command| {
                command
                    == &DeployCommand::new("venus", "/opt/notify.sh venus sunshuhan@example.com")
            })
            .return_once(|_| Ok(()));

        let ctx = build_context(deploy_service);
        enable_venus(&ctx).await;
        let app = test::init_service(build_actix_app(Data::new(ctx))).await;

        for expected in ["success", "fail"] {
            let req = test::TestRequest::post()
                .uri("/deploy/venus")
                .set_json(payload("refs/heads/deploy-test"))
                .to_request();
            let body = test::call_and_read_body(&app, req).await;
            assert_eq!(body, expected);
        }
    }

    #[actix_web::test]
    async fn push_on_other_branch() {
        let ctx = build_context(MockDeployService::new());
        enable_venus(&ctx).await;
        let app = test::init_service(build_actix_app(Data::new(ctx))).await;

        let req = test::TestRequest::post()
            .uri("/deploy/venus")
            .set_json(payload("refs/heads/master"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "fail");
    }

    #[actix_web::test]
    async fn push_without_commit() {
        let ctx = build_context(MockDeployService::new());
        enable_venus(&ctx).await;
        let app = test::init_service(build_actix_app(Data::new(ctx))).await;

        let req = test::TestRequest::post()
            .uri("/deploy/venus")
            .set_json(json!({"ref": "refs/heads/deploy-test", "user_name": "sunshuhan"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "fail");
    }

    #[actix_web::test]
    async fn push_with_invalid_json() {
        let app = test::init_service(build_actix_app(Data::new(build_context(
            MockDeployService::new(),
        ))))
        .await;

        let req = test::TestRequest::post()
            .uri("/deploy/venus")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert_eq!(test::read_body(resp).await, "fail");
    }
}
