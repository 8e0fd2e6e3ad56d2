//! HTTP API
//!
//! | Path | Method | Access |
//! |------|--------|--------|
//! | /health | GET | public |
//! | /login/, /logout/ | POST | public / logged in |
//! | / | GET | logged in |
//! | /add/, /{id}/in-progress/, /{id}/complete/ | POST | staff |
//! | /completed/ | GET | logged in |
//! | /completed/export/, /completed/clear/ | GET (POST) | staff |
//! | /settings/ | GET, POST | staff |
//! | /debug/* | GET | DEBUG only |

pub mod auth;
pub mod completed;
pub mod debug;
pub mod demands;
pub mod health;
pub mod settings;
