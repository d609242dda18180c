pub mod locale;
pub mod request_log;
