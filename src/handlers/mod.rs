pub mod check_handler;
pub mod history_handler;
