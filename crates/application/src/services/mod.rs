mod name_cache;
pub mod resolver;

pub use name_cache::NameCache;
pub use resolver::IterativeResolver;
