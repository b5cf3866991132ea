pub use error::SourceError;
pub use unicode::load_unicode_data;
pub use unicode::parse_unicode_data;
pub use unicode::CategoryEntry;

mod error;
mod unicode;
