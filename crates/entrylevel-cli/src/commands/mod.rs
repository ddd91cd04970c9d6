pub mod export;
pub mod import;
pub mod init;
pub mod misc;
pub mod records;
pub mod templates;
