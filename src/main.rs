//! 座標ピッカー
//!
//! Leafletで座標を選び、各天気・天文サイトを開くボタンを提供するツール。
//! 対象: SCW / ClearOutside / Windy（ECMWF・GFS・JMA MSM・ICON、4分割は別ウィンドウ）
//!       / LightPollutionMap / Stellarium / Ventusky / meteoblue
//! 機能: 地名表示（Nominatim逆ジオ）、お気に入り登録・呼び出し（最大30件、
//!       localStorage保存）、ライト/ダーク切替、サイトボタン並び替え保存

mod components;
mod leaflet;
mod links;
mod models;
mod stores;
mod utils;

use std::cell::RefCell;
use std::rc::Rc;

use leptos::*;

use components::map_view::SharedMap;
use components::{FavoritesPanel, MapView, SiteButtons};
use models::{parse_coords, Coordinate, Favorite, Pan, PlaceName, Theme};

/// 保存済みテーマ、無ければOS設定
fn initial_theme() -> Theme {
    if let Some(theme) = stores::theme::load() {
        return theme;
    }
    let prefers_dark = web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false);
    if prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
    stores::theme::save(theme);
}

fn scroll_to_buttons() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = document.get_element_by_id("site-buttons") {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[component]
fn App() -> impl IntoView {
    let (selection, set_selection) = create_signal(None::<Coordinate>);
    let (place, set_place) = create_signal(PlaceName::NotFetched);
    let (favorites, set_favorites) = create_signal(stores::favorites::list());
    let (site_order, set_site_order) = create_signal(stores::site_order::load());
    let (theme, set_theme) = create_signal(initial_theme());
    let (coords_input, set_coords_input) = create_signal(String::new());
    let map: SharedMap = Rc::new(RefCell::new(None));

    // テーマ変更は即座に data-theme と localStorage へ反映
    create_effect(move |_| apply_theme(theme.get()));

    // 選択更新の本体。マーカー移動 → 必要なら再センタリング → 地名取得。
    // サイトURLはシグナル経由で再計算される。
    let set_location: Callback<(Coordinate, Pan, bool)> = Callback::new({
        let map = map.clone();
        move |(coord, pan, scroll): (Coordinate, Pan, bool)| {
            set_selection.set(Some(coord));
            if let Some(picker) = map.borrow_mut().as_mut() {
                picker.place_marker(coord.lat, coord.lng);
                match pan {
                    Pan::Keep => {}
                    Pan::Recenter => picker.recenter(coord.lat, coord.lng, None),
                    Pan::RecenterAt(zoom) => picker.recenter(coord.lat, coord.lng, Some(zoom)),
                }
            }
            // 地名は非同期取得。新しい選択が来ても前の取得は打ち切らない
            //（遅れて届いた結果が表示を上書きし得るのは許容済みの挙動）。
            set_place.set(PlaceName::Fetching);
            spawn_local(async move {
                match utils::nominatim::reverse_geocode(coord.lat, coord.lng).await {
                    Ok(name) => set_place.set(PlaceName::Resolved(name)),
                    Err(e) => {
                        web_sys::console::error_1(&e.into());
                        set_place.set(PlaceName::Unavailable);
                    }
                }
            });
            if scroll {
                scroll_to_buttons();
            }
        }
    });

    // 地図クリックは再センタリングしない
    let on_map_select = Callback::new(move |(lat, lng): (f64, f64)| {
        set_location.call((Coordinate { lat, lng }, Pan::Keep, true));
    });
    // お気に入り呼び出しは現在ズームのまま移動
    let on_favorite = Callback::new(move |fav: Favorite| {
        set_location.call((Coordinate { lat: fav.lat, lng: fav.lng }, Pan::Recenter, false));
    });
    // 座標入力はズーム13で移動
    let jump: Callback<()> = Callback::new(move |()| {
        match parse_coords(&coords_input.get_untracked()) {
            Ok(coord) => set_location.call((coord, Pan::RecenterAt(13.0), true)),
            Err(msg) => utils::alert(&msg),
        }
    });

    view! {
        <div class="panel" style="padding-bottom:8px;">
            <div class="row" style="margin-bottom:0;">
                <h1 style="margin:0; font-size:1.25rem;">"座標ピッカー"</h1>
            </div>
        </div>
        <MapView map=map.clone() on_select=on_map_select />
        <div class="panel">
            <div class="row">
                <span>"地図をクリックすると各サイトを開くボタンが有効になります。"</span>
                <button
                    class="secondary"
                    type="button"
                    on:click=move |_| set_theme.set(theme.get_untracked().toggled())
                >
                    {move || theme.get().toggle_label()}
                </button>
            </div>
            <div class="row">
                <label>
                    "座標 "
                    <input
                        type="text"
                        style="width:260px;"
                        placeholder="38.13665621942762, 140.44956778749423"
                        prop:value=move || coords_input.get()
                        on:input=move |ev| set_coords_input.set(event_target_value(&ev))
                        on:keypress=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                jump.call(());
                            }
                        }
                    />
                </label>
                <button class="secondary" type="button" on:click=move |_| jump.call(())>
                    "この座標へ移動"
                </button>
            </div>
            <div class="row">
                "選択座標: "
                <code>
                    {move || selection.get().map(|c| c.text()).unwrap_or_else(|| "未選択".to_string())}
                </code>
            </div>
            <div class="row">"地名: " <code>{move || place.get().display()}</code></div>
            <SiteButtons selection=selection order=site_order set_order=set_site_order map=map.clone() />
            <FavoritesPanel
                favorites=favorites
                set_favorites=set_favorites
                selection=selection
                place=place
                on_activate=on_favorite
            />
            <div class="row" style="display:block;">
                <div><strong>"使い方:"</strong></div>
                <ul style="margin:4px 0 0 18px; padding:0; color:var(--fg); line-height:1.4;">
                    <li>"地図をクリック → 座標と地名を取得し、各サイトボタンが有効になります。"</li>
                    <li>"Windy 4分割ボタンは別ウィンドウで4モデルを表示します（ポップアップ許可が必要な場合あり）。"</li>
                    <li>"お気に入りは最大30件。名称未入力なら地名→座標の順で自動設定。削除は各行の削除ボタン。"</li>
                    <li>"ライト/ダーク切替はブラウザに保存され、再訪時に復元されます。"</li>
                    <li>"サイトボタンはドラッグで並び替えでき、順序は保存されます。"</li>
                </ul>
            </div>
        </div>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
