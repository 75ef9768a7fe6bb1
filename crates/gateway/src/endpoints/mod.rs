//! # Gatewayエンドポイント

pub mod form;
pub mod signed_url;
pub mod upload_proxy;
pub mod replace;
pub mod delete;
pub mod files_info;
pub mod files_list;
pub mod health;

#[cfg(test)]
pub mod test_helpers;

pub use signed_url::handle_signed_url;
pub use upload_proxy::handle_upload_proxy;
pub use replace::handle_replace;
pub use delete::handle_delete;
pub use files_info::handle_files_info;
pub use files_list::handle_files_list;
pub use health::handle_health;
