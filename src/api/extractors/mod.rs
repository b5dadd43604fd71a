/*
 * Responsibility
 * - handler 向け extractor (認証コンテキスト / locale / 検証済み JSON body)
 */
mod locale;
mod security_ctx;
mod valid_json;

pub use locale::RequestLocale;
pub use security_ctx::{CurrentUser, SecurityContext};
pub use valid_json::ValidJson;
