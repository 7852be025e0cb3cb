//! 对外 HTTP 接口。

use actix_web::{HttpResponse, Responder, get, web};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::{error::ResolverError, resolver::Resolver};

/// `/song` 接口的查询参数。
#[derive(Debug, Deserialize)]
pub struct SongQuery {
    /// 歌曲链接或带歌曲 ID 的 URL。
    url: Option<String>,
}

/// `GET /song?url=...` — 解析歌曲链接，返回元数据、歌词与各音质直链。
#[get("/song")]
pub async fn song_endpoint(
    query: web::Query<SongQuery>,
    resolver: web::Data<Resolver>,
) -> impl Responder {
    let Some(url) = query.url.as_deref() else {
        return HttpResponse::BadRequest().json(json!({"error": "url parameter is required"}));
    };

    match resolver.resolve(url).await {
        Ok(envelope) => HttpResponse::Ok().json(envelope),
        Err(ResolverError::MissingSongId) => HttpResponse::BadRequest()
            .json(json!({"error": "could not extract song id from url"})),
        Err(e) => {
            error!("解析请求失败: {e}");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
    }
}

/// `GET /health` — 存活探针。
#[get("/health")]
pub async fn health_endpoint() -> impl Responder {
    HttpResponse::Ok().json(json!({"healthy": true}))
}
