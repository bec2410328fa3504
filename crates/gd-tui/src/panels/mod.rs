pub mod history;
pub mod peers;
pub mod reputation;
pub mod summary;
