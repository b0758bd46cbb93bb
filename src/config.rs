use log::Level;

/// Id of the element the card mounts into. Falls back to `<body>` when missing.
pub const ROOT_ELEMENT_ID: &str = "app";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: Level = Level::Debug;

#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: Level = Level::Info;

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "./"  // Relative so the build can be hosted under any path
}

pub fn asset_url(file: &str) -> String {
    format!("{}{}", get_asset_base(), file.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_file() {
        assert_eq!(asset_url("img1.png"), format!("{}img1.png", get_asset_base()));
    }

    #[test]
    fn asset_url_does_not_double_slash() {
        assert!(!asset_url("/img2.jpg").contains("//"));
    }
}
