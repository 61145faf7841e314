pub mod demo;
pub mod describe;
pub mod init;
pub mod resize;
