mod host_query_client;

pub use host_query_client::HttpHostQueryClient;
