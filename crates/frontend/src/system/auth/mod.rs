pub mod api;
pub mod context;
pub mod credentials;
pub mod guard;
pub mod session;
pub mod storage;
