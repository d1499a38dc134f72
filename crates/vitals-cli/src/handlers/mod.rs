pub mod entry;
pub mod export;
pub mod init;
pub mod show;
pub mod source;
pub mod sync;
