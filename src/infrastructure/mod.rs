pub mod http_adapter;
pub mod speech;
