//! Build-time configuration and UI timing constants

/// Full backend base URL baked in at build time, e.g. `https://crm.example.com/api`
pub const API_BASE_OVERRIDE: Option<&str> = option_env!("CUSTOMER_API_BASE");

/// Backend port used when the base URL is derived from the page location
pub const BACKEND_PORT: u16 = 5197;

pub const API_PREFIX: &str = "/api";

pub const DEFAULT_PAGE_SIZE: usize = 6;
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [6, 12, 24, 48];

pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Error banners clear themselves after this delay
pub const BANNER_TIMEOUT_MS: u32 = 5_000;

/// Delay before leaving the customer form after a successful save
pub const SAVE_REDIRECT_DELAY_MS: u32 = 1_500;

pub const SIGNUP_REDIRECT_DELAY_MS: u32 = 2_000;
