use super::Runtime;
use crate::error;
use crate::lang::Error;
use std::io::{BufRead, Read, Write};
use tracing::{debug, warn};

type Result<T> = std::result::Result<T, Error>;

impl Runtime {
    /// Executes every line of `reader`, stopping at the first failure.
    ///
    /// Returns the number of lines executed, blank ones included. Fails
    /// when a line is longer than `max_line_length` bytes (not counting
    /// its newline), when input continues past `max_instructions` lines,
    /// or when reading fails. A missing newline at the end of the input
    /// is fine.
    pub fn run<R: BufRead>(&mut self, reader: &mut R, out: &mut dyn Write) -> Result<usize> {
        let max_line_length = self.limits().max_line_length;
        let max_instructions = self.limits().max_instructions;
        let mut buf: Vec<u8> = Vec::with_capacity(max_line_length + 1);
        let mut count = 0;
        while count < max_instructions {
            buf.clear();
            let limit = max_line_length as u64 + 1;
            let read = match (&mut *reader).take(limit).read_until(b'\n', &mut buf) {
                Ok(read) => read,
                Err(error) => {
                    return Err(error!(DiskIOError, Some(count + 1); &error.to_string()));
                }
            };
            if read == 0 {
                debug!(instructions = count, "end of input");
                return Ok(count);
            }
            count += 1;
            let content = match buf.split_last() {
                Some((b'\n', content)) => content,
                _ => &buf[..],
            };
            if content.len() > max_line_length {
                warn!(line = count, "line exceeds maximum length");
                return Err(error!(LineBufferOverflow, Some(count); &format!(
                    "LINE EXCEEDS MAXIMUM LENGTH ({})",
                    max_line_length
                )));
            }
            if let Err(error) = self.execute(content, out) {
                debug!(line = count, %error, "instruction failed");
                return Err(error.in_line_number(Some(count)));
            }
        }
        match reader.fill_buf() {
            Ok(rest) if rest.is_empty() => {
                debug!(instructions = count, "end of input");
                Ok(count)
            }
            Ok(_) => {
                warn!(max_instructions, "too many instructions");
                Err(error!(TooManyInstructions, Some(count + 1); &format!(
                    "NUMBER OF INSTRUCTIONS EXCEEDS MAXIMUM ({})",
                    max_instructions
                )))
            }
            Err(error) => Err(error!(DiskIOError, Some(count + 1); &error.to_string())),
        }
    }
}
