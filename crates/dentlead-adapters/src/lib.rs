pub mod http;
pub mod i18n;
