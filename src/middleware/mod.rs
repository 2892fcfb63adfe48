pub mod response;
pub mod route_guard;

pub use response::ApiResponse;
pub use route_guard::route_guard;
