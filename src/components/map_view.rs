//! Leafletマップ表示と選択マーカー管理

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::leaflet;

pub const INITIAL_LAT: f64 = 35.681236;
pub const INITIAL_LNG: f64 = 139.767125;
pub const INITIAL_ZOOM: f64 = 10.0;

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_MAX_ZOOM: f64 = 18.0;
const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

#[derive(Serialize)]
struct TileOptions {
    #[serde(rename = "maxZoom")]
    max_zoom: f64,
    attribution: &'static str,
}

/// マップ本体と単一マーカーのハンドル。
/// マーカーは初回選択で作り、以後は位置を動かすだけ。
pub struct PickerMap {
    map: leaflet::Map,
    marker: Option<leaflet::Marker>,
}

pub type SharedMap = Rc<RefCell<Option<PickerMap>>>;

impl PickerMap {
    pub fn new(on_click: impl Fn(f64, f64) + 'static) -> Result<Self, String> {
        let map = leaflet::map("map");
        let options = serde_wasm_bindgen::to_value(&TileOptions {
            max_zoom: TILE_MAX_ZOOM,
            attribution: TILE_ATTRIBUTION,
        })
        .map_err(|e| format!("タイルオプション変換失敗: {:?}", e))?;
        leaflet::tile_layer(TILE_URL, &options).add_to(&map);
        map.set_view(&leaflet::lat_lng(INITIAL_LAT, INITIAL_LNG), INITIAL_ZOOM);

        let handler = Closure::wrap(Box::new(move |ev: leaflet::MouseEvent| {
            let p = ev.latlng();
            on_click(p.lat(), p.lng());
        }) as Box<dyn FnMut(leaflet::MouseEvent)>);
        map.on("click", handler.as_ref().unchecked_ref());
        handler.forget();

        Ok(PickerMap { map, marker: None })
    }

    pub fn place_marker(&mut self, lat: f64, lng: f64) {
        match &self.marker {
            Some(marker) => marker.set_lat_lng(&leaflet::lat_lng(lat, lng)),
            None => {
                let marker = leaflet::marker(&leaflet::lat_lng(lat, lng));
                marker.add_to_map(&self.map);
                self.marker = Some(marker);
            }
        }
    }

    /// 再センタリング。zoom 省略時は現在のズームを維持する。
    pub fn recenter(&self, lat: f64, lng: f64, zoom: Option<f64>) {
        let zoom = zoom.unwrap_or_else(|| self.map.get_zoom());
        self.map.set_view(&leaflet::lat_lng(lat, lng), zoom);
    }

    pub fn zoom(&self) -> f64 {
        self.map.get_zoom()
    }
}

#[component]
pub fn MapView(map: SharedMap, on_select: Callback<(f64, f64)>) -> impl IntoView {
    // #map がDOMに入ってからでないと L.map が失敗するので、
    // 1tick遅らせて初期化する。
    spawn_local({
        let map = map.clone();
        async move {
            gloo::timers::future::TimeoutFuture::new(0).await;
            match PickerMap::new(move |lat, lng| on_select.call((lat, lng))) {
                Ok(picker) => *map.borrow_mut() = Some(picker),
                Err(e) => web_sys::console::error_1(&e.into()),
            }
        }
    });

    view! { <div id="map"></div> }
}
