//! Localized user-facing messages.
//!
//! Three families share one catalog:
//! - general: success messages (`registration_successful`)
//! - exception: failure messages surfaced in error bodies
//! - validation: per-field request validation messages
//!
//! The request locale is taken from `Accept-Language`; anything unsupported falls back to
//! [`Locale::DEFAULT`]. Placeholders are positional (`{0}`, `{1}`, ...).

use axum::http::{HeaderMap, header};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    Tr,
}

impl Locale {
    pub const DEFAULT: Locale = Locale::En;

    /// Primary language subtag -> supported locale (`en-US` -> En, `tr` -> Tr).
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let primary = tag.split(['-', '_']).next()?.trim().to_ascii_lowercase();
        match primary.as_str() {
            "en" => Some(Locale::En),
            "tr" => Some(Locale::Tr),
            _ => None,
        }
    }

    /// First supported tag of an `Accept-Language` value, in listed order.
    /// Quality weights are ignored.
    pub fn from_accept_language(value: &str) -> Locale {
        value
            .split(',')
            .filter_map(|part| part.split(';').next())
            .find_map(Locale::from_tag)
            .unwrap_or(Locale::DEFAULT)
    }

    pub fn from_headers(headers: &HeaderMap) -> Locale {
        headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .map(Locale::from_accept_language)
            .unwrap_or(Locale::DEFAULT)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    // general
    RegistrationSuccessful,

    // exception
    EmailAlreadyExists,
    UsernameAlreadyExists,
    InvalidCredentials,
    FullAuthenticationRequired,
    MalformedRequest,
    InternalError,

    // validation
    RegistrationNameNotEmpty,
    RegistrationEmailNotEmpty,
    RegistrationEmailIsNotValid,
    RegistrationUsernameNotEmpty,
    RegistrationPasswordNotEmpty,
    LoginUsernameNotEmpty,
    LoginPasswordNotEmpty,
}

impl MessageKey {
    pub fn code(&self) -> &'static str {
        match self {
            MessageKey::RegistrationSuccessful => "registration_successful",
            MessageKey::EmailAlreadyExists => "email_already_exists",
            MessageKey::UsernameAlreadyExists => "username_already_exists",
            MessageKey::InvalidCredentials => "invalid_credentials",
            MessageKey::FullAuthenticationRequired => "full_authentication_required",
            MessageKey::MalformedRequest => "malformed_request",
            MessageKey::InternalError => "internal_error",
            MessageKey::RegistrationNameNotEmpty => "registration_name_not_empty",
            MessageKey::RegistrationEmailNotEmpty => "registration_email_not_empty",
            MessageKey::RegistrationEmailIsNotValid => "registration_email_is_not_valid",
            MessageKey::RegistrationUsernameNotEmpty => "registration_username_not_empty",
            MessageKey::RegistrationPasswordNotEmpty => "registration_password_not_empty",
            MessageKey::LoginUsernameNotEmpty => "login_username_not_empty",
            MessageKey::LoginPasswordNotEmpty => "login_password_not_empty",
        }
    }

    fn template(&self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::En, MessageKey::RegistrationSuccessful) => "{0} registered successfully!",
            (Locale::Tr, MessageKey::RegistrationSuccessful) => "{0} başarıyla kaydedildi!",

            (Locale::En, MessageKey::EmailAlreadyExists) => {
                "This email address is already being used!"
            }
            (Locale::Tr, MessageKey::EmailAlreadyExists) => {
                "Bu e-posta adresi zaten kullanılıyor!"
            }
            (Locale::En, MessageKey::UsernameAlreadyExists) => "This username is already being used!",
            (Locale::Tr, MessageKey::UsernameAlreadyExists) => "Bu kullanıcı adı zaten kullanılıyor!",
            (Locale::En, MessageKey::InvalidCredentials) => "Invalid username or password.",
            (Locale::Tr, MessageKey::InvalidCredentials) => "Geçersiz kullanıcı adı veya şifre.",
            (Locale::En, MessageKey::FullAuthenticationRequired) => {
                "Full authentication is required to access this resource"
            }
            (Locale::Tr, MessageKey::FullAuthenticationRequired) => {
                "Bu kaynağa erişmek için tam kimlik doğrulaması gereklidir"
            }
            (Locale::En, MessageKey::MalformedRequest) => "Request body could not be read.",
            (Locale::Tr, MessageKey::MalformedRequest) => "İstek gövdesi okunamadı.",
            (Locale::En, MessageKey::InternalError) => "An unexpected error occurred.",
            (Locale::Tr, MessageKey::InternalError) => "Beklenmeyen bir hata oluştu.",

            (Locale::En, MessageKey::RegistrationNameNotEmpty) => "Name cannot be empty!",
            (Locale::Tr, MessageKey::RegistrationNameNotEmpty) => "İsim boş olamaz!",
            (Locale::En, MessageKey::RegistrationEmailNotEmpty) => "Email cannot be empty!",
            (Locale::Tr, MessageKey::RegistrationEmailNotEmpty) => "E-posta boş olamaz!",
            (Locale::En, MessageKey::RegistrationEmailIsNotValid) => {
                "Please enter a valid email address!"
            }
            (Locale::Tr, MessageKey::RegistrationEmailIsNotValid) => {
                "Lütfen geçerli bir e-posta adresi giriniz!"
            }
            (Locale::En, MessageKey::RegistrationUsernameNotEmpty) => "Username cannot be empty!",
            (Locale::Tr, MessageKey::RegistrationUsernameNotEmpty) => "Kullanıcı adı boş olamaz!",
            (Locale::En, MessageKey::RegistrationPasswordNotEmpty) => "Password cannot be empty!",
            (Locale::Tr, MessageKey::RegistrationPasswordNotEmpty) => "Şifre boş olamaz!",
            (Locale::En, MessageKey::LoginUsernameNotEmpty) => "Username cannot be empty!",
            (Locale::Tr, MessageKey::LoginUsernameNotEmpty) => "Kullanıcı adı boş olamaz!",
            (Locale::En, MessageKey::LoginPasswordNotEmpty) => "Password cannot be empty!",
            (Locale::Tr, MessageKey::LoginPasswordNotEmpty) => "Şifre boş olamaz!",
        }
    }
}

/// Message accessor. Stateless; the catalog is compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages;

impl Messages {
    pub fn get(locale: Locale, key: MessageKey, args: &[&str]) -> String {
        let mut message = key.template(locale).to_string();
        for (i, arg) in args.iter().enumerate() {
            message = message.replace(&format!("{{{i}}}"), arg);
        }
        message
    }
}
