//! LocalStorage入出力ヘルパー
//!
//! 読み込みは欠落・破損を区別せず None を返す。書き込みは失敗を握りつぶす
//! （容量超過などはここでは扱わない）。

use serde::{de::DeserializeOwned, Serialize};

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

pub fn get_string(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

pub fn set_string(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(key, value);
    }
}

/// JSONとして読み込み。キー欠落・パース失敗は None。
pub fn get_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    serde_json::from_str(&get_string(key)?).ok()
}

/// JSONとして全量書き込み
pub fn set_json<T: Serialize>(key: &str, value: &T) {
    if let Ok(json) = serde_json::to_string(value) {
        set_string(key, &json);
    }
}
