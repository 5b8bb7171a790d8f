// Mock interview sessions: question bank, stage/role types, session flow and
// the HTTP handlers over them.

pub mod handlers;
pub mod questions;
pub mod session;
pub mod stage;
