//! localStorage 永続化ストア（お気に入り・サイト並び順・テーマ）
//!
//! すべての更新系操作はストレージからの読み直し→編集→全量書き戻しで行う。
//! タブ間で同時に書き込むと後勝ちになるのは元からの仕様で、ここでも踏襲する。
//! 並び替えや自己修復の計算部分はストレージに依存しない純関数に分けてある。

use crate::models::{Coordinate, Favorite, PlaceName, SiteId, Theme};
use crate::utils::storage;

pub const FAV_KEY: &str = "scw_picker_favorites_v1";
pub const SITE_ORDER_KEY: &str = "scw_picker_site_order_v1";
pub const THEME_KEY: &str = "scw_picker_theme";

pub const MAX_FAVS: usize = 30;

// ============================================
// 純ロジック
// ============================================

/// splice移動（取り出してから挿入）。同一位置・範囲外は無変更で false。
pub fn splice_move<T>(list: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= list.len() || to >= list.len() {
        return false;
    }
    let item = list.remove(from);
    list.insert(to, item);
    true
}

/// 保存された並び順の自己修復。
/// 未知トークンと重複を捨て、欠けている既知IDを既定の相対順で末尾に補う。
/// 戻り値は常に既知ID全体のちょうど1つずつの並びになる。
pub fn heal_site_order(tokens: &[String]) -> Vec<SiteId> {
    let mut order: Vec<SiteId> = Vec::with_capacity(SiteId::ALL.len());
    for token in tokens {
        if let Some(id) = SiteId::from_token(token) {
            if !order.contains(&id) {
                order.push(id);
            }
        }
    }
    for id in SiteId::ALL {
        if !order.contains(&id) {
            order.push(id);
        }
    }
    order
}

/// ドラッグ元をドロップ先の位置へ splice 移動した新しい並びを返す。
/// どちらかが現在の並びに無い、または同一なら元の並びのまま。
pub fn move_site(order: &[SiteId], source: SiteId, target: SiteId) -> Vec<SiteId> {
    let mut next = order.to_vec();
    if source == target {
        return next;
    }
    let from = next.iter().position(|id| *id == source);
    let to = next.iter().position(|id| *id == target);
    if let (Some(from), Some(to)) = (from, to) {
        splice_move(&mut next, from, to);
    }
    next
}

/// お気に入り名の解決。入力 → 取得済み地名 → 座標テキスト（4桁）の順。
/// 「取得中...」などのプレースホルダは名前として採用しない。
pub fn favorite_name(input: &str, place: &PlaceName, coord: Coordinate) -> String {
    let trimmed = input.trim();
    if !trimmed.is_empty() {
        return trimmed.to_string();
    }
    if let Some(name) = place.resolved() {
        return name.to_string();
    }
    coord.short_text()
}

/// 上限チェック付きの追加。超過時はアラート文言を Err で返し、リストは変更しない。
pub fn try_append(favs: &mut Vec<Favorite>, fav: Favorite) -> Result<(), String> {
    if favs.len() >= MAX_FAVS {
        return Err(format!("お気に入りは最大 {} 件までです。", MAX_FAVS));
    }
    favs.push(fav);
    Ok(())
}

// ============================================
// ストレージ入出力
// ============================================

pub mod favorites {
    use super::*;

    /// キー欠落・壊れたJSONは空リスト扱い（エラーにしない）
    pub fn list() -> Vec<Favorite> {
        storage::get_json(FAV_KEY).unwrap_or_default()
    }

    pub fn save(favs: &[Favorite]) {
        storage::set_json(FAV_KEY, &favs);
    }

    pub fn add(fav: Favorite) -> Result<(), String> {
        let mut favs = list();
        try_append(&mut favs, fav)?;
        save(&favs);
        Ok(())
    }

    /// 位置指定の削除。別タブが同時に編集していると別の項目が消えることが
    /// あるが、これは元からの位置ベース仕様。
    pub fn remove(index: usize) {
        let next: Vec<Favorite> = list()
            .into_iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, fav)| fav)
            .collect();
        save(&next);
    }

    pub fn reorder(from: usize, to: usize) {
        let mut favs = list();
        if splice_move(&mut favs, from, to) {
            save(&favs);
        }
    }
}

pub mod site_order {
    use super::*;

    /// 読み込みは常に自己修復を通す。非配列・壊れたJSONは既定順。
    pub fn load() -> Vec<SiteId> {
        let tokens: Vec<String> = storage::get_json(SITE_ORDER_KEY).unwrap_or_default();
        heal_site_order(&tokens)
    }

    pub fn save(order: &[SiteId]) {
        let tokens: Vec<&str> = order.iter().map(|id| id.token()).collect();
        storage::set_json(SITE_ORDER_KEY, &tokens);
    }

    /// ドラッグ&ドロップ1回分の移動を保存し、新しい並びを返す。
    pub fn apply_move(source: SiteId, target: SiteId) -> Vec<SiteId> {
        let next = move_site(&load(), source, target);
        save(&next);
        next
    }
}

pub mod theme {
    use super::*;

    pub fn load() -> Option<Theme> {
        storage::get_string(THEME_KEY).and_then(|s| Theme::from_str(&s))
    }

    pub fn save(theme: Theme) {
        storage::set_string(THEME_KEY, theme.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fav(name: &str) -> Favorite {
        Favorite { name: name.to_string(), lat: 35.0, lng: 139.0 }
    }

    fn tokens(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splice_move_is_noop_for_equal_or_out_of_bounds() {
        let mut list = vec![1, 2, 3];
        assert!(!splice_move(&mut list, 1, 1));
        assert!(!splice_move(&mut list, 3, 0));
        assert!(!splice_move(&mut list, 0, 3));
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn splice_move_preserves_length_and_elements() {
        let mut list = vec!["a", "b", "c", "d"];
        assert!(splice_move(&mut list, 0, 2));
        assert_eq!(list, vec!["b", "c", "a", "d"]);
        assert!(splice_move(&mut list, 3, 0));
        assert_eq!(list, vec!["d", "b", "c", "a"]);
    }

    #[test]
    fn heal_site_order_returns_default_for_empty_input() {
        assert_eq!(heal_site_order(&[]), SiteId::ALL.to_vec());
    }

    #[test]
    fn heal_site_order_appends_missing_ids_in_default_order() {
        let order = heal_site_order(&tokens(&["open-co", "open-scw"]));
        assert_eq!(order.len(), 11);
        assert_eq!(order[0], SiteId::ClearOutside);
        assert_eq!(order[1], SiteId::Scw);
        // 残り9件は既定の相対順のまま
        let rest: Vec<SiteId> = SiteId::ALL
            .into_iter()
            .filter(|id| *id != SiteId::ClearOutside && *id != SiteId::Scw)
            .collect();
        assert_eq!(&order[2..], &rest[..]);
    }

    #[test]
    fn heal_site_order_drops_unknown_and_duplicate_tokens() {
        let order = heal_site_order(&tokens(&[
            "open-lpm",
            "removed-in-v2",
            "open-lpm",
            "open-ventusky",
        ]));
        assert_eq!(order[0], SiteId::LightPollutionMap);
        assert_eq!(order[1], SiteId::Ventusky);
        assert_eq!(order.len(), 11);
        // 常に既知集合の順列
        for id in SiteId::ALL {
            assert_eq!(order.iter().filter(|x| **x == id).count(), 1);
        }
    }

    #[test]
    fn heal_site_order_preserves_valid_full_permutation() {
        // 既知集合の完全な順列はそのまま返る（save→load の往復で並びが変わらない）
        let mut reversed = SiteId::ALL.to_vec();
        reversed.reverse();
        let tokens: Vec<String> = reversed.iter().map(|id| id.token().to_string()).collect();
        assert_eq!(heal_site_order(&tokens), reversed);
    }

    #[test]
    fn move_site_inserts_at_target_position() {
        // 先頭を2番目の要素の位置へ: 取り出してから挿入するので対象の直後に並ぶ
        let next = move_site(&SiteId::ALL, SiteId::Scw, SiteId::Windy);
        assert_eq!(next[0], SiteId::ClearOutside);
        assert_eq!(next[1], SiteId::Windy);
        assert_eq!(next[2], SiteId::Scw);
        assert_eq!(next.len(), 11);
    }

    #[test]
    fn move_site_backwards_places_source_before_target() {
        let next = move_site(&SiteId::ALL, SiteId::WindyQuad, SiteId::Scw);
        assert_eq!(next[0], SiteId::WindyQuad);
        assert_eq!(next[1], SiteId::Scw);
    }

    #[test]
    fn move_site_same_id_is_noop() {
        assert_eq!(move_site(&SiteId::ALL, SiteId::Scw, SiteId::Scw), SiteId::ALL.to_vec());
    }

    #[test]
    fn try_append_rejects_31st_favorite() {
        let mut favs: Vec<Favorite> = (0..MAX_FAVS).map(|i| fav(&format!("f{i}"))).collect();
        let err = try_append(&mut favs, fav("overflow")).unwrap_err();
        assert!(err.contains("30"));
        assert_eq!(favs.len(), MAX_FAVS);
        assert_eq!(favs.last().unwrap().name, "f29");
    }

    #[test]
    fn try_append_accepts_up_to_capacity() {
        let mut favs = Vec::new();
        for i in 0..MAX_FAVS {
            assert!(try_append(&mut favs, fav(&format!("f{i}"))).is_ok());
        }
        assert_eq!(favs.len(), MAX_FAVS);
    }

    #[test]
    fn favorite_name_prefers_user_input() {
        let coord = Coordinate { lat: 35.681236, lng: 139.767125 };
        let place = PlaceName::Resolved("東京駅".to_string());
        assert_eq!(favorite_name("  自宅  ", &place, coord), "自宅");
    }

    #[test]
    fn favorite_name_falls_back_to_resolved_place() {
        let coord = Coordinate { lat: 35.681236, lng: 139.767125 };
        let place = PlaceName::Resolved("東京駅".to_string());
        assert_eq!(favorite_name("", &place, coord), "東京駅");
    }

    #[test]
    fn favorite_name_skips_fetching_placeholder() {
        // 「取得中...」のまま保存しても座標テキストになる
        let coord = Coordinate { lat: 35.681236, lng: 139.767125 };
        assert_eq!(favorite_name("", &PlaceName::Fetching, coord), "35.6812, 139.7671");
        assert_eq!(favorite_name("", &PlaceName::NotFetched, coord), "35.6812, 139.7671");
        assert_eq!(favorite_name("", &PlaceName::Unavailable, coord), "35.6812, 139.7671");
    }
}
