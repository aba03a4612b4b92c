pub mod mock_server;
pub mod setup;
pub mod sse;
