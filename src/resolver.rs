//! 把各个 QQ 音乐接口调用串成一次完整的解析流程。

use std::collections::BTreeMap;
use std::time::Duration;

use tracing::{debug, warn};

use crate::{
    config::Settings,
    error::{ResolverError, Result},
    model::{LyricOutcome, ResponseEnvelope, SongId, SongLookup},
    qq::{QQMusic, models::SongFileType},
};

/// 每次请求依次尝试的音质顺序。
const FILE_TYPES: [SongFileType; 5] = [
    SongFileType::Flac,
    SongFileType::M4a,
    SongFileType::Mp3_128,
    SongFileType::Mp3_320,
    SongFileType::Ape,
];

/// 请求编排器。
///
/// 持有 QQ 音乐客户端和节流配置，把一条歌曲链接解析成聚合响应：
/// 提取 ID → 歌曲信息 → 逐个音质取直链 → 歌词。
/// 各阶段的失败都被吸收成响应里的缺省形态，只有提取不到 ID 会返回错误。
pub struct Resolver {
    client: QQMusic,
    tier_delay: Duration,
}

impl Resolver {
    /// 根据配置创建编排器。
    pub fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            client: QQMusic::new(settings)?,
            tier_delay: Duration::from_millis(settings.tier_delay_ms),
        })
    }

    /// 解析一条歌曲链接，返回聚合响应。
    ///
    /// 链接里提取不到歌曲 ID 时返回 [`ResolverError::MissingSongId`]，
    /// 由接口层转成 400。
    pub async fn resolve(&self, url: &str) -> Result<ResponseEnvelope> {
        let raw_id = self
            .client
            .resolve_song_id(url)
            .await?
            .ok_or(ResolverError::MissingSongId)?;
        let song_id = SongId::from_raw(&raw_id);
        debug!("从链接解析出歌曲标识: {song_id:?}");

        let song = match self.client.song_info(&song_id).await {
            Ok(lookup) => lookup,
            Err(e) => {
                warn!("获取歌曲信息失败: {e}");
                SongLookup::NotFound {
                    msg: "信息获取错误/歌曲不存在".to_string(),
                }
            }
        };

        // 查不到歌曲时直接返回，后续阶段没有可用的 mid / id
        let SongLookup::Found(meta) = &song else {
            return Ok(ResponseEnvelope {
                song,
                lyric: LyricOutcome::Error {
                    error: "无法获取歌词".to_string(),
                },
                music_urls: BTreeMap::new(),
            });
        };
        let (mid, id) = (meta.mid.clone(), meta.id);

        let mut music_urls = BTreeMap::new();
        for file_type in FILE_TYPES {
            match self.client.song_url(&mid, file_type).await {
                Ok(Some(link)) => {
                    music_urls.insert(file_type.key(), link);
                }
                // 无权限音质直接跳过
                Ok(None) => {}
                Err(e) => warn!("获取 {} 音质链接失败: {e}", file_type.key()),
            }
            tokio::time::sleep(self.tier_delay).await;
        }

        let lyric = match self.client.play_lyric(id).await {
            Ok(payload) => LyricOutcome::Lyric(payload),
            Err(e) => {
                warn!("获取歌词失败: {e}");
                LyricOutcome::Error {
                    error: "无法获取歌词".to_string(),
                }
            }
        };

        Ok(ResponseEnvelope {
            song,
            lyric,
            music_urls,
        })
    }
}
