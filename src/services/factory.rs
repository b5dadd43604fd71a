//! Factory: build `AppState` from configuration and a user store.
//!
//! All wiring is explicit: codec → validator → filter, store + encoder → authenticator → login.
use std::sync::Arc;

use crate::config::JwtProperties;
use crate::middleware::auth::{AccessRules, JwtAuthenticationFilter};
use crate::repos::UserRepository;
use crate::services::auth::{
    CredentialAuthenticator, LoginService, PasswordEncoder, TokenCodec, TokenValidator,
};
use crate::services::user::UserService;
use crate::state::AppState;

pub fn build_state(
    jwt: &JwtProperties,
    bcrypt_cost: u32,
    users: Arc<dyn UserRepository>,
) -> AppState {
    let codec = Arc::new(TokenCodec::new(jwt));
    let validator = TokenValidator::new(codec.clone());
    let encoder = PasswordEncoder::new(bcrypt_cost);

    let auth_filter = Arc::new(JwtAuthenticationFilter::new(
        codec.clone(),
        validator,
        users.clone(),
    ));
    let authenticator = CredentialAuthenticator::new(users.clone(), encoder);
    let login = Arc::new(LoginService::new(authenticator, codec));
    let user_service = Arc::new(UserService::new(users, encoder));

    AppState::new(
        auth_filter,
        Arc::new(AccessRules::standard()),
        login,
        user_service,
    )
}
