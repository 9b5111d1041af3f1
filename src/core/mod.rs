mod parser;
mod recoder;
mod runloops;
pub use parser::Scraper;
pub use recoder::build_log_config;
pub use runloops::{run, scrape, Scrape};
