use std::fs::File;
use std::io::{self, BufWriter, Write};

/// ## Save targets
///
/// Where the `save` instruction sends its bytes. Opening is the only
/// step allowed to fail before anything is written.

pub trait Storage {
    fn create(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>>;
}

/// Saves to files, named relative to the working directory.
#[derive(Debug, Default)]
pub struct FileStorage;

impl Storage for FileStorage {
    fn create(&mut self, name: &str) -> io::Result<Box<dyn Write + '_>> {
        Ok(Box::new(BufWriter::new(File::create(name)?)))
    }
}

/// Accepts every save and keeps nothing. For running untrusted input
/// without letting it write files.
#[derive(Debug, Default)]
pub struct DiscardStorage;

impl Storage for DiscardStorage {
    fn create(&mut self, _name: &str) -> io::Result<Box<dyn Write + '_>> {
        Ok(Box::new(io::sink()))
    }
}
