//! Line-oriented terminal I/O shared by every prompt in a session.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

struct Streams<R, W> {
    input: R,
    output: W,
}

/// Cloneable handle to one input/output pair.
///
/// Both players of a game prompt through the same reader, so clones share
/// the underlying streams instead of buffering input separately.
pub struct Console<R, W> {
    inner: Rc<RefCell<Streams<R, W>>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Streams { input, output })),
        }
    }

    /// Writes `msg` followed by a newline.
    pub fn say(&self, msg: &str) -> io::Result<()> {
        let mut s = self.inner.borrow_mut();
        writeln!(s.output, "{msg}")?;
        s.output.flush()
    }

    /// Writes `msg` without a newline and reads one trimmed line.
    /// Returns `None` at end of input.
    pub fn prompt(&self, msg: &str) -> io::Result<Option<String>> {
        let mut s = self.inner.borrow_mut();
        write!(s.output, "{msg}")?;
        s.output.flush()?;
        let mut line = String::new();
        if s.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompts until the answer is one of `choices`.
    pub fn choose(&self, msg: &str, choices: &[&str]) -> io::Result<Option<String>> {
        loop {
            match self.prompt(msg)? {
                None => return Ok(None),
                Some(answer) if choices.contains(&answer.as_str()) => return Ok(Some(answer)),
                Some(_) => continue,
            }
        }
    }
}

impl<R, W: Clone> Console<R, W> {
    /// Copy of the output stream, for tests capturing into a `Vec<u8>`.
    #[cfg(test)]
    pub fn output(&self) -> W {
        self.inner.borrow().output.clone()
    }
}

#[cfg(test)]
pub fn scripted(input: &str) -> Console<io::Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(io::Cursor::new(input.as_bytes().to_vec()), Vec::new())
}
