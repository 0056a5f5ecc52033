//! UIコンポーネントモジュール

pub mod favorites_panel;
pub mod map_view;
pub mod site_buttons;

pub use favorites_panel::FavoritesPanel;
pub use map_view::MapView;
pub use site_buttons::SiteButtons;
