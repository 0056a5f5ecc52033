//! Nominatim 逆ジオコーディング
//!
//! 1選択につき1回のGETのみ。リトライもタイムアウトもかけない。
//! 失敗は Err（診断用メッセージ）で返し、呼び出し側が表示文言に落とす。

use serde::Deserialize;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";
const USER_AGENT: &str = "scw-picker/1.0";

#[derive(Debug, Deserialize)]
struct ReverseReply {
    #[serde(default)]
    display_name: Option<String>,
}

/// 座標から表示名を取得
pub async fn reverse_geocode(lat: f64, lng: f64) -> Result<String, String> {
    let url = format!(
        "{}?format=jsonv2&lat={}&lon={}&accept-language=ja",
        NOMINATIM_URL, lat, lng
    );

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let headers = Headers::new().map_err(|e| format!("Headers作成失敗: {:?}", e))?;
    let _ = headers.set("User-Agent", USER_AGENT);
    opts.set_headers(&headers);

    let request = Request::new_with_str_and_init(&url, &opts)
        .map_err(|e| format!("Request作成失敗: {:?}", e))?;
    let window = web_sys::window().ok_or("windowがありません")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("fetch失敗: {:?}", e))?;
    let resp: Response = resp_value.dyn_into().map_err(|_| "Responseへの変換失敗")?;
    if !resp.ok() {
        return Err(format!("status {}", resp.status()));
    }
    let json = JsFuture::from(resp.json().map_err(|e| format!("json()失敗: {:?}", e))?)
        .await
        .map_err(|e| format!("JSON解析失敗: {:?}", e))?;
    let reply: ReverseReply =
        serde_wasm_bindgen::from_value(json).map_err(|e| format!("デシリアライズ失敗: {:?}", e))?;
    match reply.display_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err("display_nameがありません".to_string()),
    }
}
