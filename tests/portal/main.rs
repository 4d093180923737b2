mod appointments;
mod auth;
mod utils;
