//! Leaflet 1.9 への最小バインディング
//!
//! Leaflet 本体は index.html が CDN から読み込む。ここではこのアプリが
//! 使う範囲（マップ生成・タイルレイヤ・単一マーカー・クリックイベント・
//! ズーム取得）だけを宣言する。

use js_sys::{Array, Function};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    pub type Map;
    pub type TileLayer;
    pub type Marker;
    pub type MouseEvent;
    pub type LatLng;

    /// `L.map(containerId)`
    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn map(container_id: &str) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &Array, zoom: f64);

    #[wasm_bindgen(method, js_name = getZoom)]
    pub fn get_zoom(this: &Map) -> f64;

    #[wasm_bindgen(method)]
    pub fn on(this: &Map, event: &str, handler: &Function);

    /// `L.tileLayer(urlTemplate, options)`
    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);

    /// `L.marker(latlng)`
    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(latlng: &Array) -> Marker;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to_map(this: &Marker, map: &Map);

    #[wasm_bindgen(method, js_name = setLatLng)]
    pub fn set_lat_lng(this: &Marker, latlng: &Array);

    #[wasm_bindgen(method, getter)]
    pub fn latlng(this: &MouseEvent) -> LatLng;

    #[wasm_bindgen(method, getter)]
    pub fn lat(this: &LatLng) -> f64;

    #[wasm_bindgen(method, getter)]
    pub fn lng(this: &LatLng) -> f64;
}

/// `[lat, lng]` 形式の座標配列
pub fn lat_lng(lat: f64, lng: f64) -> Array {
    let pair = Array::new();
    pair.push(&JsValue::from_f64(lat));
    pair.push(&JsValue::from_f64(lng));
    pair
}
