pub mod check;
pub mod employees;
pub mod init;
