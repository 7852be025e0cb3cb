#![warn(missing_docs)]

//! # QQ Music Resolver
//!
//! 一个小型 HTTP 服务：输入一条 QQ 音乐歌曲链接，
//! 解析出歌曲元数据、歌词和各音质的下载直链，合并成一个 JSON 响应。
//!
//! ## 主要功能
//!
//! - **链接解析**: 支持 `/songDetail/` 路径、`id=` 参数和官方短链三种形态。
//! - **歌曲信息**: 歌名、专辑、歌手、封面，以及 mid / id 两种标识。
//! - **播放直链**: 依次获取 flac / m4a / 128 / 320 / ape 五档音质，
//!   无权限的档位自动跳过。
//! - **歌词**: 原文与翻译，Base64 解码后原样返回。
//!
//! ## 用法
//!
//! ```rust,no_run
//! use qqmusic_resolver::{Resolver, config::Settings};
//!
//! async {
//!     let settings = Settings::default();
//!     let resolver = Resolver::new(&settings).unwrap();
//!
//!     match resolver
//!         .resolve("https://y.qq.com/n/ryqq/songDetail/00126fAV2ZKaOd")
//!         .await
//!     {
//!         Ok(envelope) => println!("取到 {} 个音质的直链。", envelope.music_urls.len()),
//!         Err(e) => eprintln!("发生错误: {e}"),
//!     }
//! };
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod qq;
pub mod resolver;

pub use crate::{
    error::{ResolverError, Result},
    resolver::Resolver,
};
