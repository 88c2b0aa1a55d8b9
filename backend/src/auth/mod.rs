//! Authentication module
//!
//! Provides JWT session tokens, bcrypt password hashing and the session
//! cookie format.

mod cookie;
mod jwt;
mod middleware;
mod password;

pub use cookie::{session_token, SessionCookie, SESSION_COOKIE_NAME};
pub use jwt::{Claims, JwtService, TokenData};
pub use middleware::AuthUser;
pub use password::PasswordService;
