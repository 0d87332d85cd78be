pub mod api_error;
pub mod config;
pub mod error_handlers;
pub mod handlers;
pub mod http_error;
pub mod json_body;
pub mod openapi;
pub mod role;
pub mod rto;
pub mod timestamp;
