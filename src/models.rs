//! データ構造体モジュール

use serde::{Deserialize, Serialize};

// ============================================
// 座標
// ============================================

/// 選択座標。上書きせず常に新しい値で置き換える値型。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    /// 表示用テキスト（6桁）
    pub fn text(&self) -> String {
        format!("{:.6}, {:.6}", self.lat, self.lng)
    }

    /// お気に入り自動命名などに使う短縮テキスト（4桁）
    pub fn short_text(&self) -> String {
        format!("{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// 座標入力のパース。「緯度, 経度」のカンマ区切りを受け付ける。
/// エラー文字列はそのままアラート表示に使う。
pub fn parse_coords(raw: &str) -> Result<Coordinate, String> {
    let parts: Vec<&str> = raw
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if parts.len() < 2 {
        return Err(
            "緯度,経度をカンマ区切りで入力してください（例: 38.2160334, 140.3418724）。".to_string(),
        );
    }
    let lat: f64 = parts[0].parse().map_err(|_| {
        "緯度,経度を数値で入力してください（例: 38.2160334, 140.3418724）。".to_string()
    })?;
    let lng: f64 = parts[1].parse().map_err(|_| {
        "緯度,経度を数値で入力してください（例: 38.2160334, 140.3418724）。".to_string()
    })?;
    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return Err("緯度は±90、経度は±180の範囲で入力してください。".to_string());
    }
    Ok(Coordinate { lat, lng })
}

/// 選択時のマップ移動方法
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pan {
    /// 再センタリングしない（地図クリック）
    Keep,
    /// 現在のズームのまま再センタリング（お気に入り呼び出し）
    Recenter,
    /// 指定ズームで再センタリング（座標入力）
    RecenterAt(f64),
}

// ============================================
// お気に入り
// ============================================

/// お気に入り座標。localStorage には {name, lat, lng} の配列として保存される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

// ============================================
// 地名表示状態
// ============================================

/// 逆ジオコーディングの表示状態。取得済みのときだけ
/// お気に入りの自動命名に使える。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaceName {
    /// 初期状態
    #[default]
    NotFetched,
    /// 取得中
    Fetching,
    /// 取得済み
    Resolved(String),
    /// 取得失敗（リトライしない）
    Unavailable,
}

impl PlaceName {
    pub fn display(&self) -> String {
        match self {
            PlaceName::NotFetched => "未取得".to_string(),
            PlaceName::Fetching => "取得中...".to_string(),
            PlaceName::Resolved(name) => name.clone(),
            PlaceName::Unavailable => "名前を取得できませんでした".to_string(),
        }
    }

    /// 自動命名に使える地名。プレースホルダやエラー文言は返さない。
    pub fn resolved(&self) -> Option<&str> {
        match self {
            PlaceName::Resolved(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

// ============================================
// サイトボタン
// ============================================

/// 外部サイトボタンの識別子（閉じた集合）。
/// 並び順の保存には token() の文字列を使う。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteId {
    Scw,
    ClearOutside,
    Windy,
    Stellarium,
    WindyGfs,
    WindyJma,
    WindyIcon,
    LightPollutionMap,
    Ventusky,
    Meteoblue,
    WindyQuad,
}

impl SiteId {
    /// 既定の表示順
    pub const ALL: [SiteId; 11] = [
        SiteId::Scw,
        SiteId::ClearOutside,
        SiteId::Windy,
        SiteId::Stellarium,
        SiteId::WindyGfs,
        SiteId::WindyJma,
        SiteId::WindyIcon,
        SiteId::LightPollutionMap,
        SiteId::Ventusky,
        SiteId::Meteoblue,
        SiteId::WindyQuad,
    ];

    /// 保存形式のトークン
    pub fn token(self) -> &'static str {
        match self {
            SiteId::Scw => "open-scw",
            SiteId::ClearOutside => "open-co",
            SiteId::Windy => "open-windy",
            SiteId::Stellarium => "open-stella",
            SiteId::WindyGfs => "open-windy-gfs",
            SiteId::WindyJma => "open-windy-jma",
            SiteId::WindyIcon => "open-windy-icon",
            SiteId::LightPollutionMap => "open-lpm",
            SiteId::Ventusky => "open-ventusky",
            SiteId::Meteoblue => "open-meteoblue",
            SiteId::WindyQuad => "open-windy-quad",
        }
    }

    pub fn from_token(token: &str) -> Option<SiteId> {
        SiteId::ALL.into_iter().find(|id| id.token() == token)
    }

    /// ボタンラベル
    pub fn label(self) -> &'static str {
        match self {
            SiteId::Scw => "SCW",
            SiteId::ClearOutside => "ClearOutside",
            SiteId::Windy => "Windy(ECMWF)",
            SiteId::Stellarium => "Stellarium",
            SiteId::WindyGfs => "Windy(GFS)",
            SiteId::WindyJma => "Windy(JMA MSM)",
            SiteId::WindyIcon => "Windy(ICON)",
            SiteId::LightPollutionMap => "LightPollutionMap",
            SiteId::Ventusky => "Ventusky",
            SiteId::Meteoblue => "meteoblue",
            SiteId::WindyQuad => "Windy 4分割",
        }
    }
}

// ============================================
// テーマ
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Theme> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// 切替ボタンのラベル（次に切り替わる側を表示）
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "ダークにする",
            Theme::Dark => "ライトにする",
        }
    }
}
