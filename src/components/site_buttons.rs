//! 外部サイトボタン列（ドラッグで並び替え、順序は保存される）

use leptos::*;

use crate::components::map_view::SharedMap;
use crate::links;
use crate::models::{Coordinate, SiteId};
use crate::stores;
use crate::utils;

#[component]
pub fn SiteButtons(
    selection: ReadSignal<Option<Coordinate>>,
    order: ReadSignal<Vec<SiteId>>,
    set_order: WriteSignal<Vec<SiteId>>,
    map: SharedMap,
) -> impl IntoView {
    let (drag_src, set_drag_src) = create_signal(None::<SiteId>);

    view! {
        <div class="row site-buttons" id="site-buttons">
            {move || {
                let map = map.clone();
                order
                    .get()
                    .into_iter()
                    .map(|id| {
                        let map = map.clone();
                        view! {
                            <button
                                class="btn-drag"
                                draggable="true"
                                class:dragging=move || drag_src.get() == Some(id)
                                disabled=move || selection.get().is_none()
                                on:click=move |_| {
                                    let Some(coord) = selection.get_untracked() else { return };
                                    let zoom = map.borrow().as_ref().map(|m| m.zoom());
                                    open_site(id, coord, zoom);
                                }
                                on:dragstart=move |ev: web_sys::DragEvent| {
                                    set_drag_src.set(Some(id));
                                    if let Some(dt) = ev.data_transfer() {
                                        dt.set_effect_allowed("move");
                                    }
                                }
                                on:dragend=move |_| set_drag_src.set(None)
                                on:dragover=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    if let Some(dt) = ev.data_transfer() {
                                        dt.set_drop_effect("move");
                                    }
                                }
                                on:drop=move |ev: web_sys::DragEvent| {
                                    ev.prevent_default();
                                    let Some(src) = drag_src.get_untracked() else { return };
                                    if src != id {
                                        set_order.set(stores::site_order::apply_move(src, id));
                                    }
                                }
                            >
                                {id.label()}
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

fn open_site(id: SiteId, coord: Coordinate, zoom: Option<f64>) {
    if id == SiteId::WindyQuad {
        open_quad(coord, zoom);
        return;
    }
    if let Some(url) = links::site_url(id, coord.lat, coord.lng, zoom) {
        open_in_new_tab(&url);
    }
}

fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// 4分割ビューを別ウィンドウで開く。ブロックされたら中断してアラート。
fn open_quad(coord: Coordinate, zoom: Option<f64>) {
    let html = links::quad_document(coord.lat, coord.lng, zoom);
    let url = match utils::html_blob_url(&html) {
        Ok(url) => url,
        Err(e) => {
            web_sys::console::error_1(&e.into());
            return;
        }
    };
    let Some(window) = web_sys::window() else { return };
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => {
            // オブジェクトURLは別ウィンドウの読み込みが済んでから解放する
            spawn_local(async move {
                gloo::timers::future::TimeoutFuture::new(10_000).await;
                let _ = web_sys::Url::revoke_object_url(&url);
            });
        }
        _ => {
            let _ = web_sys::Url::revoke_object_url(&url);
            utils::alert("ポップアップがブロックされました。許可してください。");
        }
    }
}
