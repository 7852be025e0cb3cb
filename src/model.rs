//! 定义了对外 JSON 响应使用的核心数据模型。
//!
//! 这些结构体的序列化结果就是 `/song` 接口的响应体，
//! 字段名与线上格式一一对应，不要随意改名。

use std::collections::BTreeMap;

use serde::Serialize;

/// 歌曲标识，区分 QQ 音乐的两个命名空间。
///
/// 同一首歌同时拥有一个纯数字 id 和一个字母数字 mid，
/// 两者不可互换，接口参数也不同。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SongId {
    /// 数字形式的歌曲 ID。
    Id(u64),
    /// 字符串形式的媒体 ID (songmid)。
    Mid(String),
}

impl SongId {
    /// 对从链接里提取出的原始标识分类：能解析成数字的按 id 处理，否则按 mid 处理。
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<u64>() {
            Ok(id) => Self::Id(id),
            Err(_) => Self::Mid(raw.to_string()),
        }
    }
}

/// 处理后的歌曲元数据。
#[derive(Debug, Clone, Serialize)]
pub struct SongMetadata {
    /// 歌曲名。
    pub name: String,
    /// 专辑名。
    pub album: String,
    /// 所有演唱者姓名，以 ", " 连接后的展示字符串。
    pub singer: String,
    /// 专辑封面图片 URL。
    pub pic: String,
    /// 歌曲的媒体 ID (mid)。
    pub mid: String,
    /// 歌曲的数字 ID。
    pub id: u64,
}

/// 元数据查询的两种结果形态。
///
/// 序列化时不带标签，`NotFound` 直接输出 `{"msg": "..."}`。
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum SongLookup {
    /// 成功获取到歌曲信息。
    Found(SongMetadata),
    /// 歌曲不存在或接口返回异常。
    NotFound {
        /// 提示信息。
        msg: String,
    },
}

/// 单个音质的下载直链。
#[derive(Debug, Clone, Serialize)]
pub struct DownloadLink {
    /// 完整的下载 URL，已强制为 https。
    pub url: String,
    /// 实际确认的音质标签。以 purl 前缀为准，接口可能降级音质。
    pub bitrate: String,
}

/// 解码后的歌词内容。两个字段都可能为空字符串。
#[derive(Debug, Clone, Default, Serialize)]
pub struct LyricPayload {
    /// 原文歌词。
    pub lyric: String,
    /// 翻译歌词，没有翻译时为空。
    pub tylyric: String,
}

/// 歌词获取的两种结果形态。
///
/// 序列化时不带标签，`Error` 直接输出 `{"error": "..."}`。
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum LyricOutcome {
    /// 成功解码出的歌词。
    Lyric(LyricPayload),
    /// 获取或解码失败。
    Error {
        /// 错误提示。
        error: String,
    },
}

/// 单次请求的聚合响应。
#[derive(Debug, Serialize)]
pub struct ResponseEnvelope {
    /// 歌曲元数据。
    pub song: SongLookup,
    /// 歌词内容。
    pub lyric: LyricOutcome,
    /// 音质标识到下载直链的映射，取不到链接的音质不会出现。
    pub music_urls: BTreeMap<&'static str, DownloadLink>,
}
