mod resolver;

pub use resolver::Services;
