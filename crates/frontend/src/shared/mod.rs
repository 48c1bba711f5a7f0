pub mod api_utils;
pub mod banner;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod debounce;
pub mod export;
pub mod icons;
pub mod modal_frame;
pub mod number_format;
pub mod request_seq;
pub mod scroll_lock;
