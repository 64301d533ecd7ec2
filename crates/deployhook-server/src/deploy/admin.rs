//! State toggle handlers.

use actix_web::{web, HttpResponse};
use deployhook_core::use_cases::admin::{
    SetProjectHookEnabledInterface, SetProjectShellOverrideInterface, SetTargetBranchInterface,
    SetUserDeployEnabledInterface,
};
use serde::Deserialize;
use shaku::HasComponent;
use tracing::warn;

use super::sentinel_response;
use crate::server::AppContext;

#[derive(Debug, Deserialize)]
pub(crate) struct EnableQuery {
    enable: Option<String>,
}

impl EnableQuery {
    /// Absent or empty means enabled. `None` for an unknown spelling.
    fn enabled(&self) -> Option<bool> {
        parse_flag(self.enable.as_deref().unwrap_or_default())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "" | "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShellQuery {
    path: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BranchQuery {
    branch: Option<String>,
}

fn log_failure<T, E: std::fmt::Display>(result: &Result<T, E>) {
    if let Err(e) = result {
        warn!(error = %e, message = "State update failed");
    }
}

#[tracing::instrument(skip_all, fields(project = path.as_str(), enable = ?query.enable))]
pub(crate) async fn set_project_hook(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<EnableQuery>,
) -> HttpResponse {
    let core_ctx = ctx.as_core_context();
    let set_project_hook_enabled: &dyn SetProjectHookEnabledInterface =
        ctx.core_module.resolve_ref();

    let Some(enabled) = query.enabled() else {
        warn!(enable = ?query.enable, message = "Unknown enable value");
        return sentinel_response(false);
    };

    let result = set_project_hook_enabled.run(&core_ctx, &path, enabled).await;
    log_failure(&result);
    sentinel_response(result.is_ok())
}

#[tracing::instrument(skip_all, fields(user = path.as_str(), enable = ?query.enable))]
pub(crate) async fn set_user_deploy(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<EnableQuery>,
) -> HttpResponse {
    let core_ctx = ctx.as_core_context();
    let set_user_deploy_enabled: &dyn SetUserDeployEnabledInterface =
        ctx.core_module.resolve_ref();

    let Some(enabled) = query.enabled() else {
        warn!(enable = ?query.enable, message = "Unknown enable value");
        return sentinel_response(false);
    };

    let result = set_user_deploy_enabled.run(&core_ctx, &path, enabled).await;
    log_failure(&result);
    sentinel_response(result.is_ok())
}

#[tracing::instrument(skip_all, fields(project = path.as_str(), shell = ?query.path))]
pub(crate) async fn set_project_shell(
    ctx: web::Data<AppContext>,
    path: web::Path<String>,
    query: web::Query<ShellQuery>,
) -> HttpResponse {
    let core_ctx = ctx.as_core_context();
    let set_project_shell_override: &dyn SetProjectShellOverrideInterface =
        ctx.core_module.resolve_ref();

    let result = set_project_shell_override
        .run(&core_ctx, &path, query.into_inner().path)
        .await;
    log_failure(&result);
    sentinel_response(result.is_ok())
}

#[tracing::instrument(skip_all, fields(branch = ?query.branch))]
pub(crate) async fn set_target_branch(
    ctx: web::Data<AppContext>,
    query: web::Query<BranchQuery>,
) -> HttpResponse {
    let core_ctx = ctx.as_core_context();
    let set_target_branch: &dyn SetTargetBranchInterface = ctx.core_module.resolve_ref();

    let result = set_target_branch
        .run(&core_ctx, query.into_inner().branch)
        .await;
    log_failure(&result);
    sentinel_response(result.is_ok())
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web::Data};
    use deployhook_dispatch_interface::MockDeployService;
    use deployhook_state_interface::StateService;
    use pretty_assertions::assert_eq;

    use super::parse_flag;
    use crate::server::{build_actix_app, tests::build_context};

    #[actix_web::test]
    async fn toggles_are_visible_in_state() {
        let ctx = Data::new(build_context(MockDeployService::new()));
        let app = test::init_service(build_actix_app(ctx.clone())).await;

        for (uri, expected) in [
            ("/deploy/venus/auto/deploy", "success"),
            ("/deploy/user/sunshuhan/auto/deploy?enable=true", "success"),
            ("/deploy/venus/deploy/shell?path=/opt/venus.sh", "success"),
            ("/deploy/git/branch?branch=release", "success"),
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            assert_eq!(test::call_and_read_body(&app, req).await, expected, "{uri}");
        }

        let project = ctx.state_service.projects_get_expect("venus").await.unwrap();
        assert!(project.hook_enabled);
        assert_eq!(project.shell_override.as_deref(), Some("/opt/venus.sh"));
        assert!(
            ctx.state_service
                .users_get_expect("sunshuhan")
                .await
                .unwrap()
                .deploy_enabled
        );
        assert_eq!(ctx.state_service.target_branch_get().await.unwrap(), "release");
    }

    #[actix_web::test]
    async fn disable_project_hook() {
        let ctx = Data::new(build_context(MockDeployService::new()));
        let app = test::init_service(build_actix_app(ctx.clone())).await;

        let req = test::TestRequest::post()
            .uri("/deploy/venus/auto/deploy?enable=false")
            .to_request();
        assert_eq!(test::call_and_read_body(&app, req).await, "success");
        assert!(
            !ctx.state_service
                .projects_get_expect("venus")
                .await
                .unwrap()
                .hook_enabled
        );
    }

    #[actix_web::test]
    async fn empty_enable_means_enabled() {
        let ctx = Data::new(build_context(MockDeployService::new()));
        let app = test::init_service(build_actix_app(ctx.clone())).await;

        for uri in [
            "/deploy/venus/auto/deploy?enable=",
            "/deploy/user/sunshuhan/auto/deploy?enable=",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            assert_eq!(test::call_and_read_body(&app, req).await, "success", "{uri}");
        }

        assert!(
            ctx.state_service
                .projects_get_expect("venus")
                .await
                .unwrap()
                .hook_enabled
        );
        assert!(
            ctx.state_service
                .users_get_expect("sunshuhan")
                .await
                .unwrap()
                .deploy_enabled
        );
    }

    #[actix_web::test]
    async fn boolean_spellings() {
        let ctx = Data::new(build_context(MockDeployService::new()));
        let app = test::init_service(build_actix_app(ctx.clone())).await;

        for (value, expected) in [
            ("0", false),
            ("ON", true),
            ("no", false),
            ("Yes", true),
            ("off", false),
            ("1", true),
            ("FALSE", false),
        ] {
            let req = test::TestRequest::get()
                .uri(&format!("/deploy/venus/auto/deploy?enable={value}"))
                .to_request();
            assert_eq!(test::call_and_read_body(&app, req).await, "success", "{value}");
            assert_eq!(
                ctx.state_service
                    .projects_get_expect("venus")
                    .await
                    .unwrap()
                    .hook_enabled,
                expected,
                "{value}"
            );
        }
    }

    #[actix_web::test]
    async fn parse_flag_values() {
        assert_eq!(parse_flag(""), Some(true));
        assert_eq!(parse_flag(" True "), Some(true));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[actix_web::test]
    async fn missing_parameters_fail() {
        let ctx = Data::new(build_context(MockDeployService::new()));
        let app = test::init_service(build_actix_app(ctx.clone())).await;

        for uri in [
            "/deploy/venus/deploy/shell",
            "/deploy/git/branch",
            "/deploy/venus/auto/deploy?enable=maybe",
        ] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 200, "{uri}");
            assert_eq!(test::read_body(resp).await, "fail", "{uri}");
        }

        assert_eq!(
            ctx.state_service.target_branch_get().await.unwrap(),
            "deploy-test"
        );
        assert_eq!(ctx.state_service.projects_get("venus").await.unwrap(), None);
    }
}
