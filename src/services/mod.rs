pub mod anagram_service;
pub mod check_service;
pub mod check_store;
pub mod history_service;
