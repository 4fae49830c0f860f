use contracts::system::auth::{AuthError, LoginRequest, UserInfo};
use leptos::prelude::*;

/// Local sign-in flag plus the profile shown in the chrome
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub authenticated: bool,
    pub user: UserInfo,
}

impl Default for AuthState {
    /// The dashboard opens signed in
    fn default() -> Self {
        Self {
            authenticated: true,
            user: UserInfo::default(),
        }
    }
}

impl AuthState {
    pub fn signed_in(&self, user: UserInfo) -> Self {
        Self {
            authenticated: true,
            user,
        }
    }

    /// The profile survives logout so the next login keeps it
    pub fn signed_out(&self) -> Self {
        Self {
            authenticated: false,
            user: self.user.clone(),
        }
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Check the credentials and flip the flag on success
pub fn do_login(
    request: &LoginRequest,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), AuthError> {
    let user = request.authenticate()?;
    log::info!("signed in as {}", user.email);
    set_auth_state.update(|state| {
        let name = state.user.full_name.clone();
        *state = state.signed_in(UserInfo {
            full_name: name,
            ..user
        });
    });
    Ok(())
}

pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    log::info!("signed out");
    set_auth_state.update(|state| *state = state.signed_out());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_signed_in() {
        let state = AuthState::default();
        assert!(state.authenticated);
        assert_eq!(state.user.full_name, "Admin User");
    }

    #[test]
    fn test_logout_keeps_profile() {
        let state = AuthState::default().signed_out();
        assert!(!state.authenticated);
        assert_eq!(state.user.email, "admin@example.com");

        let state = state.signed_in(UserInfo::admin("other@example.com"));
        assert!(state.authenticated);
        assert_eq!(state.user.email, "other@example.com");
    }
}
