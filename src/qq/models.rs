//! 此模块定义了所有用于反序列化 QQ 音乐 API 响应的数据结构。

use serde::Deserialize;

/// 一个通用的结构体，用于捕获所有 musicu.fcg 业务对象中都存在的 `code` 字段。
#[derive(Debug, Deserialize)]
pub struct BusinessCode {
    /// 业务返回码，0 表示成功。
    pub code: i32,
}

// =================================================================
// 歌曲信息接口 ( fcg_play_single_song.fcg ) 的模型
// =================================================================

/// 歌曲信息接口的顶层响应。
#[derive(Debug, Deserialize)]
pub struct SongInfoResponse {
    /// API 返回码，0 表示成功。
    pub code: i32,
    /// 歌曲数组，查询成功时首个元素即目标歌曲；查不到时为空。
    #[serde(default)]
    pub data: Vec<SongInfo>,
}

/// 歌曲信息接口返回的单首歌曲。
///
/// 接口偶尔会缺字段，所有字段都按可缺省处理，
/// 展示层再统一补 "Unknown"。
#[derive(Debug, Deserialize)]
pub struct SongInfo {
    /// 歌曲的数字 ID。
    pub id: Option<u64>,
    /// 歌曲的媒体 ID (mid)。
    pub mid: Option<String>,
    /// 歌曲名。
    pub name: Option<String>,
    /// 演唱者列表。
    #[serde(default)]
    pub singer: Vec<Singer>,
    /// 所属专辑信息。
    pub album: Option<Album>,
}

/// 代表一位演唱者的信息。
#[derive(Debug, Deserialize)]
pub struct Singer {
    /// 演唱者姓名。
    pub name: Option<String>,
}

/// 代表一张专辑的简要信息。
#[derive(Debug, Deserialize)]
pub struct Album {
    /// 专辑的媒体 ID (mid)。
    pub mid: Option<String>,
    /// 专辑名。
    pub name: Option<String>,
}

// =================================================================
// 歌曲播放链接接口 ( vkey.GetVkeyServer.CgiGetVkey ) 的模型
// =================================================================

/// 用于包装 `CgiGetVkey` 业务对象的容器结构体。
#[derive(Debug, Deserialize)]
pub struct VkeyApiResult {
    /// 包含了核心业务数据的对象。
    pub data: VkeyData,
}

/// `CgiGetVkey` 的核心响应数据。
#[derive(Debug, Deserialize)]
pub struct VkeyData {
    /// 一个列表，其中每一项都包含了单首歌曲的链接信息。
    #[serde(default)]
    pub midurlinfo: Vec<MidUrlInfo>,
    /// 可用的流媒体主机前缀列表，下标 1 是要拼接的 CDN 主机。
    #[serde(default)]
    pub sip: Vec<String>,
}

/// 包含拼接播放链接所需关键信息。
#[derive(Debug, Deserialize)]
pub struct MidUrlInfo {
    /// 播放链接的关键部分 (文件路径)，需要和 `sip` 拼接成完整 URL。
    /// 为空表示该音质无权限获取。
    #[serde(default)]
    pub purl: String,
    /// 对应的歌曲字符串 ID (songmid)。
    #[serde(default)]
    pub songmid: String,
}

// =================================================================
// 歌词接口 ( music.musichallSong.PlayLyricInfo.GetPlayLyricInfo ) 的模型
// =================================================================

/// 用于包装 `GetPlayLyricInfo` 业务对象的容器。
#[derive(Debug, Deserialize)]
pub struct LyricApiResult {
    /// 包含了核心歌词数据的对象。
    pub data: LyricApiResponse,
}

/// `GetPlayLyricInfo` 的核心数据，歌词内容是 Base64 编码的文本。
#[derive(Debug, Deserialize)]
pub struct LyricApiResponse {
    /// Base64 编码的原文歌词，没有歌词时为空。
    #[serde(default)]
    pub lyric: String,
    /// Base64 编码的翻译歌词，没有翻译时为空。
    #[serde(default)]
    pub trans: String,
}

// =================================================================
// 旧版歌词接口 ( fcg_query_lyric_new.fcg ) 的模型
// =================================================================

/// 旧版歌词接口的响应。
#[derive(Debug, Deserialize)]
pub struct LegacyLyricResponse {
    /// Base64 编码的歌词内容，没有歌词时为空。
    #[serde(default)]
    pub lyric: String,
}

// =================================================================
// 音质档位
// =================================================================

/// 歌曲文件类型枚举，覆盖服务支持的全部音质档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongFileType {
    /// M4A，体积最小。
    M4a,
    /// 128kbps MP3。
    Mp3_128,
    /// 320kbps MP3。
    Mp3_320,
    /// FLAC 无损。
    Flac,
    /// APE 无损。
    Ape,
}

impl SongFileType {
    /// 获取该文件类型对应的类型码和扩展名。
    ///
    /// 类型码同时出现在请求文件名的开头和响应 purl 的开头，
    /// 两个方向必须使用同一张表。
    #[must_use]
    pub fn get_parts(&self) -> (&'static str, &'static str) {
        match self {
            Self::M4a => ("C400", ".m4a"),
            Self::Mp3_128 => ("M500", ".mp3"),
            Self::Mp3_320 => ("M800", ".mp3"),
            Self::Flac => ("F000", ".flac"),
            Self::Ape => ("A000", ".ape"),
        }
    }

    /// 该档位对外展示的音质标签。
    #[must_use]
    pub fn bitrate(&self) -> &'static str {
        match self {
            Self::M4a => "M4A",
            Self::Mp3_128 => "128kbps",
            Self::Mp3_320 => "320kbps",
            Self::Flac => "FLAC",
            Self::Ape => "ape",
        }
    }

    /// 对外 JSON 中 `music_urls` 使用的键名。
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Self::M4a => "m4a",
            Self::Mp3_128 => "128",
            Self::Mp3_320 => "320",
            Self::Flac => "flac",
            Self::Ape => "ape",
        }
    }

    /// 从 purl 开头的 4 位类型码反查档位，用于确认接口实际给出的音质。
    #[must_use]
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "C400" => Some(Self::M4a),
            "M500" => Some(Self::Mp3_128),
            "M800" => Some(Self::Mp3_320),
            "F000" => Some(Self::Flac),
            "A000" => Some(Self::Ape),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_TYPES: [SongFileType; 5] = [
        SongFileType::M4a,
        SongFileType::Mp3_128,
        SongFileType::Mp3_320,
        SongFileType::Flac,
        SongFileType::Ape,
    ];

    #[test]
    fn test_prefix_table_round_trips() {
        // 请求方向 (get_parts) 和响应方向 (from_prefix) 必须保持一致
        for file_type in ALL_TYPES {
            let (prefix, _) = file_type.get_parts();
            assert_eq!(SongFileType::from_prefix(prefix), Some(file_type));
        }
    }

    #[test]
    fn test_unknown_prefix() {
        assert_eq!(SongFileType::from_prefix("X999"), None);
        assert_eq!(SongFileType::from_prefix(""), None);
    }

    #[test]
    fn test_keys_are_distinct() {
        let mut keys: Vec<&str> = ALL_TYPES.iter().map(SongFileType::key).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), ALL_TYPES.len());
    }
}
