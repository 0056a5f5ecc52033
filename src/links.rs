//! 外部サイトURL生成
//!
//! すべて純関数。同じ入力からは常に同じ文字列を返す。
//! ズーム依存のURLは呼び出し時点のマップズームを受け取り、
//! マップ未初期化なら既定値にフォールバックする。

use crate::models::SiteId;

pub const DEFAULT_MODEL: &str = "msm78";
pub const DEFAULT_ELEMENT: &str = "cp";
pub const DEFAULT_ZL: &str = "13";

pub const WINDY_Z: u32 = 10;
pub const WINDY_LAYER: &str = "clouds";
pub const WINDY_SLUG: &str = "-%E9%9B%B2-clouds";
pub const WINDY_TRAIL: &str = "i:pressure,p:cities,m:eIIaj3f";
pub const WINDY_EMBED_BASE: &str = "https://embed.windy.com/embed2.html";
/// 埋め込みビューで許容するズーム範囲
pub const EMBED_ZOOM_MIN: u32 = 7;
pub const EMBED_ZOOM_MAX: u32 = 12;

pub const LPM_DEFAULT_ZOOM: f64 = 10.0;
/// lightpollutionmap.info の表示設定（共有URLからそのまま転記した不透明な定数）
pub const LPM_STATE: &str = "eyJiYXNlbWFwIjoiTGF5ZXJCaW5nUm9hZCIsIm92ZXJsYXkiOiJ2aWlyc18yMDI0Iiwib3ZlcmxheWNvbG9yIjpmYWxzZSwib3ZlcmxheW9wYWNpdHkiOiI2MCIsImZlYXR1cmVzb3BhY2l0eSI6Ijg1In0=";

pub const VENTUSKY_Z: u32 = 6;
pub const VENTUSKY_LAYER: &str = "clouds-total";

/// Windy の気象モデル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindyModel {
    Ecmwf,
    Gfs,
    JmaMsm,
    Icon,
}

impl WindyModel {
    /// 4分割ビューの表示順
    pub const ALL: [WindyModel; 4] = [
        WindyModel::Ecmwf,
        WindyModel::Gfs,
        WindyModel::Icon,
        WindyModel::JmaMsm,
    ];

    /// windy.com 本体URLのモデルトークン。ECMWFは既定モデルなので省略される。
    fn query_token(self) -> &'static str {
        match self {
            WindyModel::Ecmwf => "",
            WindyModel::Gfs => "gfs,",
            WindyModel::JmaMsm => "jmaMsm,",
            WindyModel::Icon => "icon,",
        }
    }

    /// embed2.html の product パラメータ
    pub fn product(self) -> &'static str {
        match self {
            WindyModel::Ecmwf => "ecmwf",
            WindyModel::Gfs => "gfs",
            WindyModel::JmaMsm => "jma",
            WindyModel::Icon => "icon",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WindyModel::Ecmwf => "ECMWF",
            WindyModel::Gfs => "GFS",
            WindyModel::JmaMsm => "JMA",
            WindyModel::Icon => "ICON",
        }
    }
}

/// SCW（supercweather.com）。緯度経度6桁＋固定のモデル・要素・ズーム。
pub fn scw(lat: f64, lng: f64) -> String {
    format!(
        "https://supercweather.com/?lat={lat:.6}&lng={lng:.6}&model={DEFAULT_MODEL}&element={DEFAULT_ELEMENT}&zl={DEFAULT_ZL}"
    )
}

/// ClearOutside。クエリではなくパスに座標を埋め込む形式。
pub fn clear_outside(lat: f64, lng: f64) -> String {
    format!("https://clearoutside.com/forecast/{lat:.4}/{lng:.4}")
}

/// windy.com 本体。モデルトークン＋レイヤ＋座標3桁＋固定ズーム＋共有URL末尾。
pub fn windy(model: WindyModel, lat: f64, lng: f64) -> String {
    format!(
        "https://www.windy.com/ja/{WINDY_SLUG}?{}{WINDY_LAYER},{lat:.3},{lng:.3},{WINDY_Z},{WINDY_TRAIL}",
        model.query_token()
    )
}

/// lightpollutionmap.info。ズームは現在のマップズーム（未初期化なら既定値）。
pub fn light_pollution_map(lat: f64, lng: f64, map_zoom: Option<f64>) -> String {
    let z = map_zoom.unwrap_or(LPM_DEFAULT_ZOOM);
    format!(
        "https://www.lightpollutionmap.info/#zoom={z:.2}&lat={lat:.4}&lon={lng:.4}&state={LPM_STATE}"
    )
}

/// stellarium-web.org
pub fn stellarium(lat: f64, lng: f64) -> String {
    format!("https://stellarium-web.org/?lat={lat:.4}&lng={lng:.4}")
}

/// meteoblue。符号を N/S・E/W の接尾辞で表す。0 は N/E 側。
pub fn meteoblue(lat: f64, lng: f64) -> String {
    fn hemi(v: f64, pos: char, neg: char) -> String {
        format!("{:.3}{}", v.abs(), if v >= 0.0 { pos } else { neg })
    }
    format!(
        "https://www.meteoblue.com/en/weather/week/{}{}",
        hemi(lat, 'N', 'S'),
        hemi(lng, 'E', 'W')
    )
}

/// ventusky.com
pub fn ventusky(lat: f64, lng: f64) -> String {
    format!("https://www.ventusky.com/?p={lat:.2};{lng:.2};{VENTUSKY_Z}&l={VENTUSKY_LAYER}")
}

/// 埋め込みビューのズーム。マップズームを整数に丸めて [7,12] に収める。
pub fn embed_zoom(map_zoom: Option<f64>) -> u32 {
    let z = map_zoom.unwrap_or(WINDY_Z as f64).round() as i64;
    z.clamp(EMBED_ZOOM_MIN as i64, EMBED_ZOOM_MAX as i64) as u32
}

/// Windy 埋め込み（embed2.html）。4分割ビューの各パネルが使う。
pub fn windy_embed(model: WindyModel, lat: f64, lng: f64, map_zoom: Option<f64>) -> String {
    let z = embed_zoom(map_zoom);
    format!(
        "{WINDY_EMBED_BASE}?lat={lat:.4}&lon={lng:.4}&detailLat={lat:.4}&detailLon={lng:.4}&zoom={z}&level=surface&overlay=clouds&product={}&menu=&message=true&marker=true&type=map&location=coordinates",
        model.product()
    )
}

/// サイトボタンごとのURL。4分割だけは単一URLではないので None。
pub fn site_url(id: SiteId, lat: f64, lng: f64, map_zoom: Option<f64>) -> Option<String> {
    match id {
        SiteId::Scw => Some(scw(lat, lng)),
        SiteId::ClearOutside => Some(clear_outside(lat, lng)),
        SiteId::Windy => Some(windy(WindyModel::Ecmwf, lat, lng)),
        SiteId::WindyGfs => Some(windy(WindyModel::Gfs, lat, lng)),
        SiteId::WindyJma => Some(windy(WindyModel::JmaMsm, lat, lng)),
        SiteId::WindyIcon => Some(windy(WindyModel::Icon, lat, lng)),
        SiteId::Stellarium => Some(stellarium(lat, lng)),
        SiteId::LightPollutionMap => Some(light_pollution_map(lat, lng, map_zoom)),
        SiteId::Ventusky => Some(ventusky(lat, lng)),
        SiteId::Meteoblue => Some(meteoblue(lat, lng)),
        SiteId::WindyQuad => None,
    }
}

/// 4分割ビューのHTML文書。1座標につき4モデルの埋め込みを並べる。
/// Blob URL 経由で別ウィンドウに表示する想定の自己完結した文書を返す。
pub fn quad_document(lat: f64, lng: f64, map_zoom: Option<f64>) -> String {
    let cards: String = WindyModel::ALL
        .iter()
        .map(|m| {
            format!(
                r#"
      <div class="card">
        <header>{}</header>
        <iframe src="{}" loading="lazy"></iframe>
      </div>"#,
                m.label(),
                windy_embed(*m, lat, lng, map_zoom)
            )
        })
        .collect();
    format!(
        r#"<!DOCTYPE html>
<html lang="ja">
<head>
  <meta charset="UTF-8">
  <title>Windy 4分割</title>
  <style>
    body {{ margin:0; background:#0f172a; color:#e5e7eb; font-family:system-ui,-apple-system,sans-serif; }}
    .grid {{ display:grid; grid-template-columns:repeat(2, minmax(0, 1fr)); grid-auto-rows:50vh; gap:6px; padding:6px; box-sizing:border-box; height:100vh; }}
    .card {{ border:1px solid #334155; border-radius:6px; overflow:hidden; display:flex; flex-direction:column; }}
    .card header {{ padding:6px 10px; background:#111827; border-bottom:1px solid #334155; font-weight:600; }}
    iframe {{ flex:1; border:0; width:100%; height:100%; }}
  </style>
</head>
<body>
  <div class="grid">{cards}
  </div>
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAT: f64 = 35.681236;
    const LNG: f64 = 139.767125;

    #[test]
    fn scw_uses_six_decimals_and_fixed_params() {
        assert_eq!(
            scw(LAT, LNG),
            "https://supercweather.com/?lat=35.681236&lng=139.767125&model=msm78&element=cp&zl=13"
        );
    }

    #[test]
    fn clear_outside_embeds_coords_in_path() {
        assert_eq!(
            clear_outside(LAT, LNG),
            "https://clearoutside.com/forecast/35.6812/139.7671"
        );
    }

    #[test]
    fn windy_model_tokens() {
        assert_eq!(
            windy(WindyModel::Ecmwf, LAT, LNG),
            "https://www.windy.com/ja/-%E9%9B%B2-clouds?clouds,35.681,139.767,10,i:pressure,p:cities,m:eIIaj3f"
        );
        assert!(windy(WindyModel::Gfs, LAT, LNG).contains("?gfs,clouds,"));
        assert!(windy(WindyModel::JmaMsm, LAT, LNG).contains("?jmaMsm,clouds,"));
        assert!(windy(WindyModel::Icon, LAT, LNG).contains("?icon,clouds,"));
    }

    #[test]
    fn light_pollution_map_zoom_fallback() {
        let url = light_pollution_map(LAT, LNG, None);
        assert_eq!(
            url,
            format!(
                "https://www.lightpollutionmap.info/#zoom=10.00&lat=35.6812&lon=139.7671&state={LPM_STATE}"
            )
        );
        assert!(light_pollution_map(LAT, LNG, Some(8.0)).contains("#zoom=8.00&"));
    }

    #[test]
    fn stellarium_uses_four_decimals() {
        assert_eq!(
            stellarium(LAT, LNG),
            "https://stellarium-web.org/?lat=35.6812&lng=139.7671"
        );
    }

    #[test]
    fn meteoblue_encodes_sign_as_hemisphere_suffix() {
        assert_eq!(
            meteoblue(LAT, LNG),
            "https://www.meteoblue.com/en/weather/week/35.681N139.767E"
        );
        assert_eq!(
            meteoblue(-33.448891, -70.669265),
            "https://www.meteoblue.com/en/weather/week/33.449S70.669W"
        );
        // 0 は北緯・東経側に倒す
        assert_eq!(
            meteoblue(0.0, 0.0),
            "https://www.meteoblue.com/en/weather/week/0.000N0.000E"
        );
    }

    #[test]
    fn ventusky_uses_two_decimals() {
        assert_eq!(
            ventusky(LAT, LNG),
            "https://www.ventusky.com/?p=35.68;139.77;6&l=clouds-total"
        );
    }

    #[test]
    fn embed_zoom_clamps_to_allowed_range() {
        assert_eq!(embed_zoom(None), 10);
        assert_eq!(embed_zoom(Some(9.4)), 9);
        assert_eq!(embed_zoom(Some(3.0)), 7);
        assert_eq!(embed_zoom(Some(18.0)), 12);
    }

    #[test]
    fn windy_embed_format() {
        assert_eq!(
            windy_embed(WindyModel::Ecmwf, LAT, LNG, None),
            "https://embed.windy.com/embed2.html?lat=35.6812&lon=139.7671&detailLat=35.6812&detailLon=139.7671&zoom=10&level=surface&overlay=clouds&product=ecmwf&menu=&message=true&marker=true&type=map&location=coordinates"
        );
    }

    #[test]
    fn builders_are_deterministic() {
        for id in crate::models::SiteId::ALL {
            assert_eq!(
                site_url(id, LAT, LNG, Some(11.0)),
                site_url(id, LAT, LNG, Some(11.0))
            );
        }
        assert_eq!(site_url(crate::models::SiteId::WindyQuad, LAT, LNG, None), None);
    }

    #[test]
    fn quad_document_contains_all_four_models() {
        let doc = quad_document(LAT, LNG, Some(9.0));
        for m in WindyModel::ALL {
            assert!(doc.contains(&format!("<header>{}</header>", m.label())));
            assert!(doc.contains(&format!("product={}", m.product())));
        }
        assert_eq!(doc.matches("<iframe").count(), 4);
        assert!(doc.contains("zoom=9&"));
    }
}
