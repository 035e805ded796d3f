pub mod error_mapper;

pub use error_mapper::{map_directory_error, map_mail_error};
