mod results;
pub use results::Results;
