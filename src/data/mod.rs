mod fallback;

pub use fallback::{builtin_products, load_fallback_file};
