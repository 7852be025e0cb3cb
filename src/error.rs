//! 定义了整个服务的错误类型 `ResolverError`。

use std::{io, string::FromUtf8Error};
use thiserror::Error;

/// 服务的通用错误枚举。
#[derive(Error, Debug)]
pub enum ResolverError {
    /// 网络请求失败 (源自 `reqwest::Error`)
    #[error("网络请求失败: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// JSON 解析失败 (源自 `serde_json::Error`)
    #[error("JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Base64 解码失败 (源自 `base64::DecodeError`)
    #[error("Base64 解码失败: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// UTF-8 转换失败 (源自 `string::FromUtf8Error`)
    #[error("UTF-8 转换失败: {0}")]
    FromUtf8(#[from] FromUtf8Error),

    /// I/O 错误 (源自 `io::Error`)
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    /// 输入的链接中提取不到歌曲 ID
    #[error("无法从链接中提取歌曲 ID")]
    MissingSongId,

    /// API 返回错误或空数据
    #[error("API 为 `{0}` 返回了错误或空数据")]
    ApiError(String),

    /// 响应结构不符合预期
    #[error("响应解析失败: {0}")]
    Parser(String),

    /// 内部错误
    #[error("内部错误: {0}")]
    Internal(String),
}

/// `ResolverError` 的 `Result` 类型别名，方便在函数签名中使用。
pub type Result<T> = std::result::Result<T, ResolverError>;
