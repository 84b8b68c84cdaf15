pub mod init;
pub mod prerender;
pub mod validate;
