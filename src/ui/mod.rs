pub mod formatting;
pub mod output;

pub use formatting::{
    format_criteria, format_decade_bucket, format_school_details, format_school_line,
};
pub use output::{print_error, print_schools};
