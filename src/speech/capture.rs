use crate::error::CookPalError;
use log::debug;
use std::io::BufRead;

/// Something that can produce an ingredient query, such as a microphone
/// transcriber or a terminal prompt.
pub trait QueryCapture {
    fn capture(&mut self) -> Result<String, CookPalError>;
}

/// Reads one line of ingredients from any buffered reader.
pub struct ReaderCapture<R> {
    reader: R,
}

impl<R: BufRead> ReaderCapture<R> {
    pub fn new(reader: R) -> Self {
        ReaderCapture { reader }
    }
}

impl<R: BufRead> QueryCapture for ReaderCapture<R> {
    fn capture(&mut self) -> Result<String, CookPalError> {
        let mut line = String::new();
        self.reader.read_line(&mut line)?;

        let query = line.trim();
        if query.is_empty() {
            return Err(CookPalError::EmptyQuery);
        }
        debug!("Captured query: {}", query);
        Ok(query.to_string())
    }
}
