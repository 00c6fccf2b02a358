pub mod rate_limit;
pub mod require_admin;
pub mod session_auth;

pub use rate_limit::RateLimit;
pub use require_admin::RequireAdmin;
pub use session_auth::SessionAuth;
