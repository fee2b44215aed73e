use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn get_asset_base() -> &'static str {
    "/assets"  // Served by `trunk serve` from the project root
}

#[cfg(not(debug_assertions))]
pub fn get_asset_base() -> &'static str {
    "assets"  // Relative so the bundle works from any sub-path
}

pub fn asset_url(file: &str) -> String {
    format!("{}/{}", get_asset_base(), file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_url_joins_base_and_file() {
        let url = asset_url("alain-profile.jpg");
        assert!(url.starts_with(get_asset_base()));
        assert!(url.ends_with("/alain-profile.jpg"));
    }
}
