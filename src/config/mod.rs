#[cfg(feature = "cli")]
pub mod cli;
pub mod page;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use page::PageConfig;
