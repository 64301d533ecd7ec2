//! Manual deploy handler.

use actix_web::{web, HttpResponse};
use deployhook_core::use_cases::deploys::DispatchDeployInterface;
use serde::Deserialize;
use shaku::HasComponent;
use tracing::{info, warn};

use super::success_response;
use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct ManualDeployQuery {
    email: Option<String>,
}

/// Dispatches without going through the deploy gate. Always answers `success`.
#[tracing::instrument(skip_all, fields(project = path.as_str(), email = ?query.email))]
pub(crate) async fn manual_deploy(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<ManualDeployQuery>,
) -> HttpResponse {
    let core_ctx = ctx.as_core_context();
    let email = query
        .email
        .as_deref()
        .filter(|email| !email.is_empty())
        .unwrap_or(&ctx.config.deploy.default_email);

    match ctx.state_service.target_branch_get().await {
        Ok(branch) => info!(
            target_branch = %branch,
            shell_path_template = %ctx.config.deploy.shell_path_template,
            message = "Manual deploy"
        ),
        Err(e) => warn!(error = %e, message = "Could not read target branch"),
    }

    let dispatch_deploy: &dyn DispatchDeployInterface = ctx.core_module.resolve_ref();
    if let Err(e) = dispatch_deploy.run(&core_ctx, &path, email).await {
        warn!(project = %path.as_str(), error = %e, message = "Manual deploy failed");
    }

    success_response()
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web::Data};
    use deployhook_core::{
        use_cases::deploys::{DispatchDeployInterface, MockDispatchDeployInterface},
        CoreModule, DomainError,
    };
    use deployhook_dispatch_interface::MockDeployService;
    use deployhook_models::DeployCommand;
    use deployhook_state_interface::StateService;
    use pretty_assertions::assert_eq;

    use crate::server::{build_actix_app, tests::build_context};

    #[actix_web::test]
    async fn manual_with_email() {
        let mut deploy_service = MockDeployService::new();
        deploy_service
            .expect_dispatch()
            .once()
            .withf(|command| command == &DeployCommand::new("site", "/opt/notify.sh site me@x.com"))
            .return_once(|_| Ok(()));

        let app =
            test::init_service(build_actix_app(Data::new(build_context(deploy_service)))).await;

        let req = test::TestRequest::get()
            .uri("/deploy/manual/site?email=me@x.com")
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "success");
    }

    #[actix_web::test]
    async fn manual_with_default_email() {
        let mut deploy_service = MockDeployService::new();
        deploy_service
            .expect_dispatch()
            .once()
            .withf(|command| {
                command == &DeployCommand::new("site", "/opt/notify.sh site deploy@localhost")
            })
            .return_once(|_| Ok(()));

        let app =
            test::init_service(build_actix_app(Data::new(build_context(deploy_service)))).await;

        let req = test::TestRequest::post()
            .uri("/deploy/manual/site")
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "success");
    }

    #[actix_web::test]
    async fn manual_with_empty_email() {
        let mut deploy_service = MockDeployService::new();
        deploy_service
            .expect_dispatch()
            .once()
            .withf(|command| {
                command == &DeployCommand::new("site", "/opt/notify.sh site deploy@localhost")
            })
            .return_once(|_| Ok(()));

        let app =
            test::init_service(build_actix_app(Data::new(build_context(deploy_service)))).await;

        let req = test::TestRequest::get()
            .uri("/deploy/manual/site?email=")
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "success");
    }

    #[actix_web::test]
    async fn manual_answers_success_on_error() {
        let mut dispatch_deploy = MockDispatchDeployInterface::new();
        dispatch_deploy
            .expect_run()
            .once()
            .return_once(|_, _, _| {
                Err(DomainError::InvalidInput {
                    field: "project".into(),
                })
            });

        let mut ctx = build_context(MockDeployService::new());
        ctx.core_module = CoreModule::builder()
            .with_component_override::<dyn DispatchDeployInterface>(Box::new(dispatch_deploy))
            .build();
        let app = test::init_service(build_actix_app(Data::new(ctx))).await;

        let req = test::TestRequest::post()
            .uri("/deploy/manual/site")
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "success");
    }

    #[actix_web::test]
    async fn manual_ignores_gate() {
        let mut deploy_service = MockDeployService::new();
        deploy_service
            .expect_dispatch()
            .once()
            .return_once(|_| Ok(()));

        let ctx = build_context(deploy_service);
        ctx.state_service
            .projects_set_hook_enabled("site", false)
            .await
            .unwrap();
        let app = test::init_service(build_actix_app(Data::new(ctx))).await;

        let req = test::TestRequest::get()
            .uri("/deploy/manual/site")
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "success");
    }
}
