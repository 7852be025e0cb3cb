//! 服务入口：加载配置、初始化日志、启动 HTTP 服务。

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use qqmusic_resolver::{Resolver, api, config::Settings};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = Settings::load();
    let bind_addr = (settings.bind.clone(), settings.port);

    let resolver = web::Data::new(Resolver::new(&settings).context("初始化解析器失败")?);

    info!("服务监听于 http://{}:{}", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(resolver.clone())
            .service(api::song_endpoint)
            .service(api::health_endpoint)
    })
    .bind(bind_addr)
    .context("绑定监听地址失败")?
    .run()
    .await?;

    Ok(())
}
