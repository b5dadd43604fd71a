pub mod authenticator;
pub mod login;
pub mod password;
pub mod token_codec;
pub mod token_validator;

pub use authenticator::{CredentialAuthenticator, Principal};
pub use login::LoginService;
pub use password::PasswordEncoder;
pub use token_codec::{DecodedToken, TokenCodec, TokenError};
pub use token_validator::TokenValidator;
