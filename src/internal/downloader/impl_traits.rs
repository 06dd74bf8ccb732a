pub mod impl_fetch_client;

pub use impl_fetch_client::ReqwestFetchClient;
