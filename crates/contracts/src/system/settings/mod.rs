use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::system::auth::UserInfo;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("Please provide both name and email.")]
    IncompleteProfile,
    #[error("Please fill in all password fields.")]
    IncompletePassword,
}

/// Settings page tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsTab {
    #[default]
    Account,
    Appearance,
    Notifications,
}

impl SettingsTab {
    pub const ALL: [SettingsTab; 3] = [
        SettingsTab::Account,
        SettingsTab::Appearance,
        SettingsTab::Notifications,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Account => "Account",
            SettingsTab::Appearance => "Appearance",
            SettingsTab::Notifications => "Notifications",
        }
    }

    pub fn from_label(label: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == label)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
}

impl From<&UserInfo> for ProfileForm {
    fn from(user: &UserInfo) -> Self {
        Self {
            name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

impl ProfileForm {
    pub fn apply_to(&self, user: &UserInfo) -> Result<UserInfo, SettingsError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(SettingsError::IncompleteProfile);
        }
        Ok(UserInfo {
            full_name: name.to_string(),
            email: email.to_string(),
            is_admin: user.is_admin,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordForm {
    pub current_password: String,
    pub new_password: String,
}

impl PasswordForm {
    /// Checks presence only; the cleared form is returned on success
    pub fn submit(&self) -> Result<PasswordForm, SettingsError> {
        if self.current_password.is_empty() || self.new_password.is_empty() {
            return Err(SettingsError::IncompletePassword);
        }
        Ok(PasswordForm::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_update() {
        let user = UserInfo::default();
        let form = ProfileForm {
            name: " Jane Admin ".into(),
            ..ProfileForm::from(&user)
        };
        let updated = form.apply_to(&user).unwrap();
        assert_eq!(updated.full_name, "Jane Admin");
        assert_eq!(updated.email, "admin@example.com");
        assert_eq!(updated.initials(), "JA");
    }

    #[test]
    fn test_profile_requires_both_fields() {
        let form = ProfileForm {
            name: "Jane".into(),
            email: " ".into(),
        };
        assert_eq!(
            form.apply_to(&UserInfo::default()),
            Err(SettingsError::IncompleteProfile)
        );
    }

    #[test]
    fn test_password_requires_both_fields() {
        let form = PasswordForm {
            current_password: "old".into(),
            new_password: String::new(),
        };
        assert_eq!(form.submit(), Err(SettingsError::IncompletePassword));
    }

    #[test]
    fn test_tab_from_label() {
        assert_eq!(SettingsTab::from_label("Appearance"), SettingsTab::Appearance);
        assert_eq!(SettingsTab::from_label("Billing"), SettingsTab::Account);
    }

    #[test]
    fn test_password_submit_clears_form() {
        let form = PasswordForm {
            current_password: "old".into(),
            new_password: "new".into(),
        };
        assert_eq!(form.submit(), Ok(PasswordForm::default()));
    }
}
