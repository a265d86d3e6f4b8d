/// Filesystem adapters for presenting output
mod output_writer;

pub use output_writer::{FileSystemWriter, StdoutPresenter};
