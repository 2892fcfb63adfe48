// handlers/auth/mod.rs - Session lifecycle endpoints under /api/auth/*

// Declare handler modules - each file contains one route handler
pub mod login;   // POST /api/auth/login
pub mod logout;  // POST /api/auth/logout
pub mod session; // GET  /api/auth/session

pub use login::login_post;
pub use logout::logout_post;
pub use session::session_get;
