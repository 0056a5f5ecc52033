//! ユーティリティモジュール

pub mod nominatim;
pub mod storage;

use wasm_bindgen::JsValue;

// 共通ヘルパー

/// 同期アラート表示
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// HTML文字列をBlob化してオブジェクトURLを得る（別ウィンドウ表示用）
pub fn html_blob_url(html: &str) -> Result<String, String> {
    let parts = js_sys::Array::new();
    parts.push(&JsValue::from_str(html));
    let bag = web_sys::BlobPropertyBag::new();
    bag.set_type("text/html");
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &bag)
        .map_err(|e| format!("Blob作成失敗: {:?}", e))?;
    web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("URL作成失敗: {:?}", e))
}
