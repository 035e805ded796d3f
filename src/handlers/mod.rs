pub mod account_handlers;
pub mod browse_handlers;
pub mod file_handlers;
pub mod price_handlers;
pub mod search_handlers;

pub use account_handlers::handle_verify_email;
pub use browse_handlers::run_browse;
pub use file_handlers::{handle_validate, open_directory};
pub use price_handlers::handle_prices;
pub use search_handlers::{handle_facets, handle_search, resolve_profile};
