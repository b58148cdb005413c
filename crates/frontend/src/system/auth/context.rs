use contracts::system::auth::UserProfile;
use leptos::prelude::*;

use super::api;
use crate::shared::http::ApiError;
use crate::system::session::{BrowserSession, SessionStore};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<UserProfile>,
}

impl AuthState {
    /// Restores whatever the session store holds
    pub fn from_session(session: &impl SessionStore) -> Self {
        match session.token() {
            Some(token) => Self {
                token: Some(token),
                user: session.user(),
            },
            None => Self::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::from_session(&BrowserSession));

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

/// Records a successful login in the session store and returns the new state
pub fn begin_session(session: &impl SessionStore, token: String, user: UserProfile) -> AuthState {
    session.save(&token, &user);
    AuthState {
        token: Some(token),
        user: Some(user),
    }
}

/// Helper: Perform login
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    usuario: String,
    contrasena: String,
) -> Result<(), ApiError> {
    let response = api::login(usuario, contrasena).await?;
    log::info!("signed in as {}", response.usuario.usuario);
    set_auth_state.set(begin_session(&BrowserSession, response.token, response.usuario));
    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    BrowserSession.clear();
    set_auth_state.set(AuthState::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::session::MemorySession;

    fn profile(id_rol: i32) -> UserProfile {
        UserProfile {
            nombre: "Ana".into(),
            usuario: "ana".into(),
            id_rol: Some(id_rol),
            ..Default::default()
        }
    }

    #[test]
    fn test_state_restored_from_session() {
        let session = MemorySession::default();
        assert_eq!(AuthState::from_session(&session), AuthState::default());

        let state = begin_session(&session, "abc".into(), profile(1));
        assert!(state.is_admin());

        let restored = AuthState::from_session(&session);
        assert_eq!(restored, state);
        assert!(restored.is_authenticated());
    }

    #[test]
    fn test_profile_without_token_is_ignored() {
        let session = MemorySession::default();
        begin_session(&session, "abc".into(), profile(2));
        session.remove(crate::system::session::TOKEN_KEY);

        let state = AuthState::from_session(&session);
        assert!(!state.is_authenticated());
        assert!(state.user.is_none());
    }

    #[test]
    fn test_non_admin_role() {
        let state = AuthState {
            token: Some("t".into()),
            user: Some(profile(3)),
        };
        assert!(!state.is_admin());
    }
}
