//! お気に入りパネル（追加・呼び出し・削除・ドラッグ並び替え）
//!
//! 表示は常に localStorage の内容から作り直す。更新系は
//! stores::favorites で読み直し→書き戻ししてからシグナルを更新するので、
//! 画面の並びと保存された並びは一致し続ける。

use leptos::*;

use crate::models::{Coordinate, Favorite, PlaceName};
use crate::stores;
use crate::utils;

#[component]
pub fn FavoritesPanel(
    favorites: ReadSignal<Vec<Favorite>>,
    set_favorites: WriteSignal<Vec<Favorite>>,
    selection: ReadSignal<Option<Coordinate>>,
    place: ReadSignal<PlaceName>,
    on_activate: Callback<Favorite>,
) -> impl IntoView {
    let (name_input, set_name_input) = create_signal(String::new());
    let (drag_src, set_drag_src) = create_signal(None::<usize>);

    let add_favorite = move |_: ev::MouseEvent| {
        let Some(coord) = selection.get_untracked() else { return };
        let name = stores::favorite_name(&name_input.get_untracked(), &place.get_untracked(), coord);
        match stores::favorites::add(Favorite { name, lat: coord.lat, lng: coord.lng }) {
            Ok(()) => {
                set_favorites.set(stores::favorites::list());
                set_name_input.set(String::new());
            }
            Err(msg) => {
                utils::alert(&msg);
                set_favorites.set(stores::favorites::list());
            }
        }
    };

    view! {
        <div class="row">
            <input
                type="text"
                placeholder="お気に入り名（空なら地名か座標）"
                prop:value=move || name_input.get()
                on:input=move |ev| set_name_input.set(event_target_value(&ev))
            />
            <button
                disabled=move || favorites.get().len() >= stores::MAX_FAVS || selection.get().is_none()
                on:click=add_favorite
            >
                {move || {
                    if favorites.get().len() >= stores::MAX_FAVS {
                        "お気に入り上限(30件)"
                    } else {
                        "お気に入りに追加 (最大30件)"
                    }
                }}
            </button>
        </div>
        <div class="row">
            <div><strong>"お気に入り一覧 (最大30件):"</strong></div>
            <div class="fav-list">
                {move || {
                    let favs = favorites.get();
                    if favs.is_empty() {
                        view! { <span>"なし"</span> }.into_view()
                    } else {
                        favs.into_iter()
                            .enumerate()
                            .map(|(idx, fav)| {
                                let coords_text = format!("({:.4}, {:.4})", fav.lat, fav.lng);
                                let name = fav.name.clone();
                                view! {
                                    <div
                                        class="fav-item"
                                        draggable="true"
                                        class:dragging=move || drag_src.get() == Some(idx)
                                        on:dragstart=move |ev: web_sys::DragEvent| {
                                            set_drag_src.set(Some(idx));
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
                                            let Some(from) = drag_src.get_untracked() else { return };
                                            if from != idx {
                                                stores::favorites::reorder(from, idx);
                                                set_favorites.set(stores::favorites::list());
                                            }
                                        }
                                    >
                                        <button on:click=move |_| on_activate.call(fav.clone())>
                                            {name}
                                        </button>
                                        <span class="fav-name">{coords_text}</span>
                                        <button
                                            class="fav-del"
                                            on:click=move |_| {
                                                stores::favorites::remove(idx);
                                                set_favorites.set(stores::favorites::list());
                                            }
                                        >
                                            "削除"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }
                }}
            </div>
        </div>
    }
}
