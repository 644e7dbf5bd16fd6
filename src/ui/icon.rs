use leptos::prelude::*;

/// Decorative line icon served from `public/icons`.
#[component]
pub fn Icon(
    /// Icon file name without the `.svg` extension
    name: &'static str,
    /// Sizing and spacing classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable="false"
        />
    }
}

/// Icon names used by the layout itself. Content tables carry their own.
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const CAMERA: &str = "camera";
    pub const CHECK: &str = "check";
    pub const CHEVRON_RIGHT: &str = "chevron-right";
    pub const CLOCK: &str = "clock";
    pub const CLOUD: &str = "cloud";
    pub const CREDIT_CARD: &str = "credit-card";
    pub const FILE_TEXT: &str = "file-text";
    pub const GITHUB: &str = "github";
    pub const LINKEDIN: &str = "linkedin";
    pub const LOCK: &str = "lock";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const NAVIGATION: &str = "navigation";
    pub const REFRESH: &str = "refresh-cw";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TWITTER: &str = "twitter";
    pub const USERS: &str = "users";
    pub const WIFI_OFF: &str = "wifi-off";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
