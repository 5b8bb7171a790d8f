// Accounts: registration, login, and resolving the caller on protected routes.
// Session mechanics are out of scope; callers identify themselves per request.

pub mod auth;
pub mod handlers;
pub mod password;
