pub mod http_client;
pub mod static_source;

pub use http_client::ReqwestTableSource;
pub use static_source::StaticTableSource;
