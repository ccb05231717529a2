pub mod app;
pub mod assessments;
pub mod auth;
pub mod bookings;
pub mod config;
pub mod error;
pub mod mailer;
pub mod state;
pub mod uploads;
