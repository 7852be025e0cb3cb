//! QQ 音乐私有接口的客户端模块。
//!
//! 封装了解析一首歌所需的全部请求：短链重定向、从 URL 提取歌曲 ID、
//! 歌曲信息、多音质播放链接和歌词。

use std::time::Duration;

use base64::{Engine, prelude::BASE64_STANDARD};
use chrono::Utc;
use rand::seq::SliceRandom;
use reqwest::{Client, header, redirect};
use serde_json::json;
use tracing::trace;

use crate::{
    config::Settings,
    error::{ResolverError, Result},
    model::{DownloadLink, LyricPayload, SongId, SongLookup, SongMetadata},
};

pub mod models;

use self::models::SongFileType;

const MUSIC_U_FCG_URL: &str = "https://u.y.qq.com/cgi-bin/musicu.fcg";
const SONG_INFO_URL: &str = "https://c.y.qq.com/v8/fcg-bin/fcg_play_single_song.fcg";
const LEGACY_LYRIC_URL: &str = "https://c.y.qq.com/lyric/fcgi-bin/fcg_query_lyric_new.fcg";

const GET_VKEY_MODULE: &str = "vkey.GetVkeyServer";
const GET_VKEY_METHOD: &str = "CgiGetVkey";

const GET_LYRIC_MODULE: &str = "music.musichallSong.PlayLyricInfo";
const GET_LYRIC_METHOD: &str = "GetPlayLyricInfo";

/// 官方短链服务的主机，这种链接要先解一次重定向才能拿到真正的歌曲页。
const SHORT_LINK_HOST: &str = "c6.y.qq.com";
const SONG_DETAIL_MARKER: &str = "/songDetail/";

/// sip 列表中用作 CDN 主机的下标。
const STREAM_HOST_INDEX: usize = 1;

const DESKTOP_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/123.0.0.0 Safari/537.36";

/// 专辑没有封面 mid 时使用的兜底封面。
const DEFAULT_COVER_URL: &str = "https://axidiqolol53.objectstorage.ap-seoul-1.oci.customer-oci.com/n/axidiqolol53/b/lusic/o/resources/cover.jpg";

/// 根据专辑 mid 构造 800x800 封面图片 URL。
fn album_cover_url(album_mid: &str) -> String {
    format!("https://y.qq.com/music/photo_new/T002R800x800M000{album_mid}.jpg?max_age=2592000")
}

/// QQ 音乐私有接口的客户端。
///
/// 一个实例持有 HTTP 连接池和会话凭证，可以在多次请求间复用。
pub struct QQMusic {
    http_client: Client,
    /// 专用于短链解析的客户端，禁用了自动重定向。
    redirect_client: Client,
    cookies: Vec<(String, String)>,
    guid: String,
    uin: String,
}

impl QQMusic {
    /// 根据配置创建一个新的客户端实例。
    pub fn new(settings: &Settings) -> Result<Self> {
        let http_client = Client::builder().timeout(Duration::from_secs(10)).build()?;
        let redirect_client = Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            http_client,
            redirect_client,
            cookies: parse_cookie_str(&settings.cookie),
            guid: settings.guid.clone(),
            uin: settings.uin.clone(),
        })
    }

    /// 更新会话凭证，之后发出的请求立即使用新 Cookie。
    pub fn set_cookie(&mut self, cookie_str: &str) {
        self.cookies = parse_cookie_str(cookie_str);
    }

    /// 从歌曲链接中解析出歌曲 ID。
    ///
    /// 短链会先发一次不跟随重定向的请求，从 `Location` 头里取目标地址，
    /// 再按普通链接提取。两种形态都不匹配时返回 `None`。
    pub async fn resolve_song_id(&self, url: &str) -> Result<Option<String>> {
        if url.contains(SHORT_LINK_HOST) {
            let response = self
                .redirect_client
                .get(url)
                .header(header::USER_AGENT, DESKTOP_USER_AGENT)
                .send()
                .await?;
            let Some(location) = response
                .headers()
                .get(header::LOCATION)
                .and_then(|value| value.to_str().ok())
            else {
                return Ok(None);
            };
            return Ok(Self::extract_song_id(location));
        }
        Ok(Self::extract_song_id(url))
    }

    /// 从 URL 字符串中提取歌曲 ID，不涉及网络。
    ///
    /// 优先识别 `/songDetail/{id}/` 形式的路径段，
    /// 其次识别 `id=` 查询参数，都没有则返回 `None`。
    #[must_use]
    pub fn extract_song_id(url: &str) -> Option<String> {
        if let Some(pos) = url.find(SONG_DETAIL_MARKER) {
            let rest = &url[pos + SONG_DETAIL_MARKER.len()..];
            return rest.split('/').next().map(ToString::to_string);
        }
        if let Some(pos) = url.find("id=") {
            let rest = &url[pos + 3..];
            return rest.split('&').next().map(ToString::to_string);
        }
        None
    }

    /// 获取歌曲信息。
    ///
    /// 按传入标识的命名空间选择 `songid` 或 `songmid` 参数。
    /// 接口查不到歌曲时返回 [`SongLookup::NotFound`]，不算错误。
    pub async fn song_info(&self, song_id: &SongId) -> Result<SongLookup> {
        let mut form: Vec<(&str, String)> = Vec::with_capacity(3);
        match song_id {
            SongId::Id(id) => form.push(("songid", id.to_string())),
            SongId::Mid(mid) => form.push(("songmid", mid.clone())),
        }
        form.push(("platform", "yqq".to_string()));
        form.push(("format", "json".to_string()));

        let mut request = self
            .http_client
            .post(SONG_INFO_URL)
            .header(header::USER_AGENT, DESKTOP_USER_AGENT)
            .form(&form);
        if let Some(cookie) = self.cookie_header() {
            request = request.header(header::COOKIE, cookie);
        }

        let response: models::SongInfoResponse = request.send().await?.json().await?;
        Ok(song_lookup_from_response(response, song_id))
    }

    /// 获取指定音质的播放链接。
    ///
    /// 返回 `Ok(None)` 表示该音质无权限获取（VIP / 付费歌曲），
    /// 这是正常结果而不是错误。
    pub async fn song_url(
        &self,
        songmid: &str,
        file_type: SongFileType,
    ) -> Result<Option<DownloadLink>> {
        let (prefix, extension) = file_type.get_parts();
        let filename = format!("{prefix}{songmid}{songmid}{extension}");

        let payload = json!({
            "req_1": {
                "module": GET_VKEY_MODULE,
                "method": GET_VKEY_METHOD,
                "param": {
                    "filename": [filename],
                    "guid": self.guid,
                    "songmid": [songmid],
                    "songtype": [0],
                    "uin": self.uin,
                    "loginflag": 1,
                    "platform": "20",
                },
            },
            "loginUin": self.uin,
            "comm": {
                "uin": self.uin,
                "format": "json",
                "ct": 24,
                "cv": 0,
            },
        });

        let business_object = self.execute_api_request("req_1", &payload).await?;
        let result: models::VkeyApiResult = serde_json::from_value(business_object)?;

        link_from_vkey(&result.data)
    }

    /// 获取歌词及其翻译。
    ///
    /// 接口没有歌词内容时返回两个空字符串的 [`LyricPayload`]。
    pub async fn play_lyric(&self, song_id: u64) -> Result<LyricPayload> {
        let request_key = format!("{GET_LYRIC_MODULE}.{GET_LYRIC_METHOD}");

        // param 和 comm 里的大量空白字段表示匿名会话，不能省略
        let payload = json!({
            &request_key: {
                "module": GET_LYRIC_MODULE,
                "method": GET_LYRIC_METHOD,
                "param": {
                    "trans_t": 0,
                    "roma_t": 0,
                    "crypt": 0,
                    "lrc_t": 0,
                    "interval": 208,
                    "trans": 1,
                    "ct": 6,
                    "singerName": "",
                    "type": 0,
                    "qrc_t": 0,
                    "cv": 80600,
                    "roma": 1,
                    "songID": song_id,
                    "qrc": 0,
                    "albumName": "",
                    "songName": "",
                },
            },
            "comm": {
                "wid": "",
                "tmeAppID": "qqmusic",
                "authst": "",
                "uid": "",
                "gray": "0",
                "OpenUDID": "",
                "ct": "6",
                "patch": "2",
                "psrf_qqopenid": "",
                "sid": "",
                "psrf_access_token_expiresAt": "",
                "cv": "80600",
                "gzip": "0",
                "qq": "",
                "nettype": "2",
                "psrf_qqunionid": "",
                "psrf_qqaccess_token": "",
                "tmeLoginType": "2",
            },
        });

        let business_object = self.execute_api_request(&request_key, &payload).await?;
        let result: models::LyricApiResult = serde_json::from_value(business_object)?;

        decode_lyric_payload(&result.data)
    }

    /// 通过旧版歌词接口按 mid 获取原文歌词。
    ///
    /// 这是历史遗留路径，主流程不再使用。没有歌词时返回 `Ok(None)`。
    pub async fn legacy_lyric(&self, songmid: &str) -> Result<Option<String>> {
        let timestamp = Utc::now().timestamp().to_string();
        let login_uin = random_login_uin();

        let mut request = self
            .http_client
            .get(LEGACY_LYRIC_URL)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .header(header::REFERER, "https://y.qq.com/")
            .query(&[
                ("_", timestamp.as_str()),
                ("format", "json"),
                ("loginUin", login_uin.as_str()),
                ("songmid", songmid),
            ]);
        if let Some(cookie) = self.cookie_header() {
            request = request.header(header::COOKIE, cookie);
        }

        let response: models::LegacyLyricResponse =
            request.send().await?.error_for_status()?.json().await?;
        if response.lyric.is_empty() {
            return Ok(None);
        }

        let lyric = String::from_utf8(BASE64_STANDARD.decode(&response.lyric)?)?;
        Ok(Some(lyric))
    }

    /// 向 musicu.fcg 发送一个业务请求并取出对应的业务对象。
    ///
    /// 响应里以 `request_key` 为键的对象会被取出，并校验其 `code` 为 0。
    async fn execute_api_request(
        &self,
        request_key: &str,
        payload: &serde_json::Value,
    ) -> Result<serde_json::Value> {
        let mut request = self
            .http_client
            .post(MUSIC_U_FCG_URL)
            .header(header::USER_AGENT, DESKTOP_USER_AGENT)
            .json(payload);
        if let Some(cookie) = self.cookie_header() {
            request = request.header(header::COOKIE, cookie);
        }

        let response_text = request.send().await?.text().await?;

        trace!("原始 JSON 响应 {request_key}: {response_text}");

        let mut response_value: serde_json::Value = serde_json::from_str(&response_text)?;

        if let Some(business_object) = response_value
            .get_mut(request_key)
            .map(serde_json::Value::take)
        {
            let business_code: models::BusinessCode =
                serde_json::from_value(business_object.clone())?;

            if business_code.code == 0 {
                Ok(business_object)
            } else {
                Err(ResolverError::ApiError(format!(
                    "QQ 音乐 API 业务错误 ({}): code = {}",
                    request_key, business_code.code
                )))
            }
        } else {
            Err(ResolverError::Parser(format!(
                "响应中未找到键: '{request_key}'"
            )))
        }
    }

    fn cookie_header(&self) -> Option<String> {
        if self.cookies.is_empty() {
            return None;
        }
        Some(
            self.cookies
                .iter()
                .map(|(key, value)| format!("{key}={value}"))
                .collect::<Vec<_>>()
                .join("; "),
        )
    }
}

/// 把 "k1=v1; k2=v2" 形式的 Cookie 字符串拆成键值对，跳过没有 `=` 的片段。
fn parse_cookie_str(cookie_str: &str) -> Vec<(String, String)> {
    cookie_str
        .split("; ")
        .filter_map(|part| {
            let (key, value) = part.split_once('=')?;
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// 把歌曲信息接口的响应整理成对外的元数据形态。
///
/// `data` 数组为空时返回 [`SongLookup::NotFound`]。
/// 个别字段缺失时回退到 "Unknown" 或请求方传入的标识。
fn song_lookup_from_response(
    response: models::SongInfoResponse,
    requested: &SongId,
) -> SongLookup {
    let Some(info) = response.data.into_iter().next() else {
        return SongLookup::NotFound {
            msg: "信息获取错误/歌曲不存在".to_string(),
        };
    };

    let singer = info
        .singer
        .iter()
        .map(|s| s.name.as_deref().unwrap_or("Unknown"))
        .collect::<Vec<_>>()
        .join(", ");

    let pic = match info.album.as_ref().and_then(|album| album.mid.as_deref()) {
        Some(album_mid) if !album_mid.is_empty() => album_cover_url(album_mid),
        _ => DEFAULT_COVER_URL.to_string(),
    };

    let (fallback_mid, fallback_id) = match requested {
        SongId::Mid(mid) => (mid.clone(), 0),
        SongId::Id(id) => (String::new(), *id),
    };

    SongLookup::Found(SongMetadata {
        name: info.name.unwrap_or_else(|| "Unknown".to_string()),
        album: info
            .album
            .and_then(|album| album.name)
            .unwrap_or_else(|| "Unknown".to_string()),
        singer,
        pic,
        mid: info.mid.unwrap_or(fallback_mid),
        id: info.id.unwrap_or(fallback_id),
    })
}

/// 从 `CgiGetVkey` 的响应数据拼出下载直链。
///
/// purl 为空表示该音质无权限，返回 `Ok(None)`。
/// 音质标签按 purl 前 4 位类型码反查，不信任请求时要的档位，
/// 因为接口可能在无权限时用低音质文件顶替。
fn link_from_vkey(data: &models::VkeyData) -> Result<Option<DownloadLink>> {
    let Some(info) = data.midurlinfo.first() else {
        return Err(ResolverError::Parser("midurlinfo 为空".to_string()));
    };
    if info.purl.is_empty() {
        return Ok(None);
    }

    let Some(host) = data.sip.get(STREAM_HOST_INDEX) else {
        return Err(ResolverError::Parser(
            "sip 列表中缺少流媒体主机".to_string(),
        ));
    };

    let url = format!("{}{}", host, info.purl).replace("http://", "https://");
    let bitrate = info
        .purl
        .get(..4)
        .and_then(SongFileType::from_prefix)
        .map(|file_type| file_type.bitrate().to_string())
        .unwrap_or_default();

    Ok(Some(DownloadLink { url, bitrate }))
}

/// 解码歌词接口返回的 Base64 内容。
///
/// `lyric` 字段为空时返回两个空字符串，不视为错误。
fn decode_lyric_payload(data: &models::LyricApiResponse) -> Result<LyricPayload> {
    if data.lyric.is_empty() {
        return Ok(LyricPayload::default());
    }

    let lyric = String::from_utf8(BASE64_STANDARD.decode(&data.lyric)?)?;
    let tylyric = String::from_utf8(BASE64_STANDARD.decode(&data.trans)?)?;

    Ok(LyricPayload {
        lyric,
        tylyric,
    })
}

/// 旧版歌词接口要求带一个 loginUin 参数，匿名访问时用 0-9 的随机排列填充。
fn random_login_uin() -> String {
    let mut digits: Vec<char> = ('0'..='9').collect();
    digits.shuffle(&mut rand::rng());
    digits.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const TEST_SONG_MID: &str = "00126fAV2ZKaOd";
    const TEST_SONG_ID: u64 = 312_214_056;

    fn init_tracing() {
        use tracing_subscriber::{EnvFilter, FmtSubscriber};
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,qqmusic_resolver=trace"));
        let _ = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    #[test]
    fn test_extract_song_id_from_query_param() {
        assert_eq!(
            QQMusic::extract_song_id("https://y.qq.com/n/yqq/song.html?id=123456"),
            Some("123456".to_string())
        );
        // id 后面还有其他参数时只取到 & 为止
        assert_eq!(
            QQMusic::extract_song_id("https://y.qq.com/n/yqq/song.html?id=123456&from=share"),
            Some("123456".to_string())
        );
    }

    #[test]
    fn test_extract_song_id_from_song_detail_path() {
        assert_eq!(
            QQMusic::extract_song_id("https://y.qq.com/n/ryqq/songDetail/abcmid123/extra"),
            Some("abcmid123".to_string())
        );
        assert_eq!(
            QQMusic::extract_song_id("https://y.qq.com/n/ryqq/songDetail/abcmid123"),
            Some("abcmid123".to_string())
        );
    }

    #[test]
    fn test_extract_song_id_prefers_query_param() {
        // 同时带 id= 参数时以参数为准（路径里没有 songDetail 标记）
        assert_eq!(
            QQMusic::extract_song_id("https://y.qq.com/n/yqq/song/abcmid123.html?id=123456"),
            Some("123456".to_string())
        );
    }

    #[test]
    fn test_extract_song_id_no_match() {
        assert_eq!(QQMusic::extract_song_id("https://example.com/whatever"), None);
        assert_eq!(QQMusic::extract_song_id(""), None);
    }

    #[test]
    fn test_parse_cookie_str() {
        let cookies = parse_cookie_str("uin=12345; qm_keyst=Q_H_L_abc; skey=@abc");
        assert_eq!(
            cookies,
            vec![
                ("uin".to_string(), "12345".to_string()),
                ("qm_keyst".to_string(), "Q_H_L_abc".to_string()),
                ("skey".to_string(), "@abc".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_cookie_str_skips_malformed() {
        let cookies = parse_cookie_str("uin=12345; broken; =nokey");
        assert_eq!(cookies, vec![("uin".to_string(), "12345".to_string())]);
        assert!(parse_cookie_str("").is_empty());
    }

    #[test]
    fn test_cookie_values_may_contain_equals() {
        let cookies = parse_cookie_str("token=a=b=c");
        assert_eq!(cookies, vec![("token".to_string(), "a=b=c".to_string())]);
    }

    #[test]
    fn test_song_lookup_from_full_response() {
        let response: models::SongInfoResponse = serde_json::from_value(json!({
            "code": 0,
            "data": [{
                "id": TEST_SONG_ID,
                "mid": TEST_SONG_MID,
                "name": "目及皆是你",
                "singer": [{"name": "小蓝背心"}, {"name": null}],
                "album": {"mid": "003dmKuv4689PG", "name": "目及皆是你"}
            }]
        }))
        .unwrap();

        let lookup =
            song_lookup_from_response(response, &SongId::Mid(TEST_SONG_MID.to_string()));
        let SongLookup::Found(meta) = lookup else {
            panic!("应当解析出歌曲信息");
        };
        assert_eq!(meta.name, "目及皆是你");
        assert_eq!(meta.singer, "小蓝背心, Unknown");
        assert_eq!(
            meta.pic,
            "https://y.qq.com/music/photo_new/T002R800x800M000003dmKuv4689PG.jpg?max_age=2592000"
        );
        assert_eq!(meta.mid, TEST_SONG_MID);
        assert_eq!(meta.id, TEST_SONG_ID);
    }

    #[test]
    fn test_song_lookup_default_cover_when_album_mid_missing() {
        let response: models::SongInfoResponse = serde_json::from_value(json!({
            "code": 0,
            "data": [{
                "id": 1,
                "mid": "000abc",
                "name": "无专辑的歌",
                "singer": [],
                "album": {"name": "单曲"}
            }]
        }))
        .unwrap();

        let lookup = song_lookup_from_response(response, &SongId::Id(1));
        let SongLookup::Found(meta) = lookup else {
            panic!("应当解析出歌曲信息");
        };
        assert_eq!(meta.pic, DEFAULT_COVER_URL);
        assert_eq!(meta.singer, "");
        assert_eq!(meta.album, "单曲");
    }

    #[test]
    fn test_song_lookup_empty_data_is_not_found() {
        let response: models::SongInfoResponse =
            serde_json::from_value(json!({"code": 0, "data": []})).unwrap();

        let lookup = song_lookup_from_response(response, &SongId::Id(999));
        assert!(matches!(
            lookup,
            SongLookup::NotFound { msg } if msg == "信息获取错误/歌曲不存在"
        ));
    }

    #[test]
    fn test_link_from_vkey_builds_https_url() {
        let data: models::VkeyData = serde_json::from_value(json!({
            "midurlinfo": [{"purl": "M800001xeS8622ntLO.mp3?vkey=abc", "songmid": "001xeS8622ntLO"}],
            "sip": ["http://ws.stream.qqmusic.qq.com/", "http://isure.stream.qqmusic.qq.com/"]
        }))
        .unwrap();

        let link = link_from_vkey(&data).unwrap().unwrap();
        assert_eq!(
            link.url,
            "https://isure.stream.qqmusic.qq.com/M800001xeS8622ntLO.mp3?vkey=abc"
        );
        // 请求的是 flac 也好，接口实际给了 M800 就按 320kbps 上报
        assert_eq!(link.bitrate, "320kbps");
    }

    #[test]
    fn test_link_from_vkey_empty_purl_means_restricted() {
        let data: models::VkeyData = serde_json::from_value(json!({
            "midurlinfo": [{"purl": "", "songmid": "001xeS8622ntLO"}],
            "sip": ["http://ws.stream.qqmusic.qq.com/", "http://isure.stream.qqmusic.qq.com/"]
        }))
        .unwrap();

        assert!(link_from_vkey(&data).unwrap().is_none());
    }

    #[test]
    fn test_link_from_vkey_unknown_prefix_has_empty_bitrate() {
        let data: models::VkeyData = serde_json::from_value(json!({
            "midurlinfo": [{"purl": "X999file.bin", "songmid": "001"}],
            "sip": ["http://a/", "http://b/"]
        }))
        .unwrap();

        let link = link_from_vkey(&data).unwrap().unwrap();
        assert_eq!(link.bitrate, "");
    }

    #[test]
    fn test_link_from_vkey_missing_stream_host_is_error() {
        let data: models::VkeyData = serde_json::from_value(json!({
            "midurlinfo": [{"purl": "M500abc.mp3", "songmid": "001"}],
            "sip": ["http://only-one/"]
        }))
        .unwrap();

        assert!(link_from_vkey(&data).is_err());
    }

    #[test]
    fn test_decode_lyric_payload_round_trip() {
        let lyric_text = "[00:00.00]目及皆是你\n[00:05.12]落笔都是爱意";
        let trans_text = "[00:00.00]translation line";
        let data: models::LyricApiResponse = serde_json::from_value(json!({
            "lyric": BASE64_STANDARD.encode(lyric_text),
            "trans": BASE64_STANDARD.encode(trans_text),
        }))
        .unwrap();

        let payload = decode_lyric_payload(&data).unwrap();
        assert_eq!(payload.lyric, lyric_text);
        assert_eq!(payload.tylyric, trans_text);
    }

    #[test]
    fn test_decode_lyric_payload_empty_lyric() {
        let data: models::LyricApiResponse =
            serde_json::from_value(json!({"lyric": "", "trans": ""})).unwrap();

        let payload = decode_lyric_payload(&data).unwrap();
        assert_eq!(payload.lyric, "");
        assert_eq!(payload.tylyric, "");
    }

    #[test]
    fn test_decode_lyric_payload_invalid_base64_is_error() {
        let data: models::LyricApiResponse =
            serde_json::from_value(json!({"lyric": "不是 base64", "trans": ""})).unwrap();

        assert!(decode_lyric_payload(&data).is_err());
    }

    #[test]
    fn test_random_login_uin_shape() {
        let uin = random_login_uin();
        assert_eq!(uin.len(), 10);
        assert!(uin.chars().all(|c| c.is_ascii_digit()));
    }

    #[tokio::test]
    #[ignore]
    async fn test_song_info_live() {
        init_tracing();
        let client = QQMusic::new(&Settings::default()).unwrap();
        let lookup = client
            .song_info(&SongId::Mid(TEST_SONG_MID.to_string()))
            .await
            .unwrap();

        let SongLookup::Found(meta) = lookup else {
            panic!("测试歌曲应当存在");
        };
        assert_eq!(meta.mid, TEST_SONG_MID);
        assert!(!meta.singer.is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_song_url_live() {
        init_tracing();
        let client = QQMusic::new(&Settings::default()).unwrap();
        let link = client
            .song_url("001xeS8622ntLO", SongFileType::Mp3_128)
            .await
            .unwrap();

        // VIP 歌曲会拿到 None，公开曲目应当是一条 https 直链
        if let Some(link) = link {
            assert!(link.url.starts_with("https://"), "直链应当强制为 https");
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_play_lyric_live() {
        init_tracing();
        let client = QQMusic::new(&Settings::default()).unwrap();
        let payload = client.play_lyric(TEST_SONG_ID).await.unwrap();
        assert!(!payload.lyric.is_empty(), "测试歌曲应当有歌词");
    }
}
