//! Server module.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    error,
    middleware::Logger,
    web::{self, Data},
    App, HttpResponse, HttpServer,
};
use deployhook_config::Config;
use deployhook_core::{CoreContext, CoreModule};
use deployhook_dispatch_interface::DeployService;
use deployhook_state_interface::StateService;
use sentry_actix::Sentry;
use tracing::info;

use crate::{
    deploy::{configure_deploy_handlers, fail_response},
    health::health_check_route,
    metrics::build_metrics_handler,
    Result, ServerError,
};

/// App context.
pub struct AppContext {
    /// Config.
    pub config: Config,
    /// Core module.
    pub core_module: CoreModule,
    /// Admin state and dedup cache.
    pub state_service: Box<dyn StateService>,
    /// Deploy command runner.
    pub deploy_service: Box<dyn DeployService>,
}

impl AppContext {
    /// Create new app context using adapters.
    pub fn new_with_adapters(
        config: Config,
        core_module: CoreModule,
        state_service: Box<dyn StateService>,
        deploy_service: Box<dyn DeployService>,
    ) -> Self {
        Self {
            config,
            core_module,
            state_service,
            deploy_service,
        }
    }

    /// Convert the context for the core module.
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            state_service: self.state_service.as_ref(),
            deploy_service: self.deploy_service.as_ref(),
        }
    }
}

/// Build Actix app.
pub fn build_actix_app(
    context: Data<AppContext>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let prometheus = build_metrics_handler();

    App::new()
        .app_data(context)
        .wrap(prometheus)
        .wrap(Sentry::new())
        .wrap(Logger::default())
        .service(web::scope("/deploy").configure(configure_deploy_handlers))
        .route("/health", web::get().to(health_check_route))
        .route(
            "/",
            web::get().to(|| async {
                HttpResponse::Ok().json(serde_json::json!({"message": "Welcome on deployhook!" }))
            }),
        )
        // Hook callers only understand the plain text sentinels.
        .app_data(
            web::JsonConfig::default()
                .content_type_required(false)
                .error_handler(|err, _req| {
                    error::InternalError::from_response(err, fail_response()).into()
                }),
        )
        .app_data(web::QueryConfig::default().error_handler(|err, _req| {
            error::InternalError::from_response(err, fail_response()).into()
        }))
}

/// Run deploy server.
pub async fn run_deploy_server(context: AppContext) -> Result<()> {
    let address = get_bind_address(&context.config);

    info!(
        version = context.config.version,
        address = %address,
        message = "Starting deploy server",
    );

    run_deploy_server_internal(address, context).await
}

fn get_bind_address(config: &Config) -> String {
    format!("{}:{}", config.server.bind_ip, config.server.bind_port)
}

async fn run_deploy_server_internal(ip_with_port: String, context: AppContext) -> Result<()> {
    let context = Data::new(context);
    let cloned_context = context.clone();

    let mut server = HttpServer::new(move || build_actix_app(context.clone()));

    if let Some(workers) = cloned_context.config.server.workers_count {
        server = server.workers(workers as usize);
    }

    server
        .bind(ip_with_port)
        .map_err(|e| ServerError::IoError { source: e })?
        .run()
        .await
        .map_err(|e| ServerError::IoError { source: e })
}
