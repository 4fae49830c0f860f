//! Compile-time application settings

use contracts::shared::date::DISPLAY_DATE_FORMAT;
use contracts::system::auth::UserInfo;

pub struct AppConfig;

impl AppConfig {
    pub const BRAND: &'static str = "Media Hub";
    pub const SUBTITLE: &'static str = "Admin Dashboard";

    /// Avatar used for testimonials without a photo
    pub const AVATAR_PLACEHOLDER: &'static str = "https://via.placeholder.com/40";

    /// How long a toast stays on screen
    pub const TOAST_LIFETIME_MS: u32 = 4_000;

    pub const DATE_FORMAT: &'static str = DISPLAY_DATE_FORMAT;

    pub fn full_title() -> String {
        format!("{} {}", Self::BRAND, Self::SUBTITLE)
    }

    pub fn default_profile() -> UserInfo {
        UserInfo::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_title() {
        assert_eq!(AppConfig::full_title(), "Media Hub Admin Dashboard");
    }

    #[test]
    fn test_default_profile() {
        let profile = AppConfig::default_profile();
        assert_eq!(profile.full_name, "Admin User");
        assert_eq!(profile.email, "admin@example.com");
    }
}
