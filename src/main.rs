use actix_web::{App, HttpServer, middleware::Logger, web};
use chrono::Local; // timestamp in log lines
use env_logger::{Env, Target};
use std::io::Write; // for env_logger custom formatter
use std::sync::Arc;

use otp_gateway::{
    config::Config, external::TwilioVerifyService, handlers, middlewares::create_cors,
    services::VerificationService,
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

    let config = Config::from_toml().map_err(std::io::Error::other)?;

    // One provider client for the whole process, shared by every worker
    let provider = TwilioVerifyService::new(config.twilio.clone()).map_err(std::io::Error::other)?;
    let verification_service =
        VerificationService::new(Arc::new(provider), config.twilio.verify_service_sid.clone());

    log::info!(
        "Server running at {}:{}",
        config.server.host,
        config.server.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(create_cors())
            .app_data(web::Data::new(verification_service.clone()))
            .configure(handlers::otp_config)
    })
    .bind((config.server.host.as_str(), config.server.port))?
    .run()
    .await
}
