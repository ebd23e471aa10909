//! Password output to terminal, file or clipboard.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use copypasta::{ClipboardContext, ClipboardProvider};
use passgen::strength;
use zeroize::{Zeroize, Zeroizing};

use crate::terminal;

const BUF_CAPACITY: usize = 8 * 1024;

/// Buffered writer whose buffer is wiped after every flush and on drop.
///
/// The buffer is allocated once at full capacity so it never reallocates and
/// leaves stale copies of written passwords on the heap.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Zeroizing<Vec<u8>>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Zeroizing::new(Vec::with_capacity(BUF_CAPACITY)),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        let result = self.inner.write_all(&self.buf);
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAPACITY {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAPACITY {
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
    }
}

/// Write one password per line, optionally followed by its strength rating.
/// Each password is dropped (and wiped) as soon as its line is written.
pub fn write_lines<W, I>(
    out: &mut W,
    passwords: I,
    show_strength: bool,
    colored: bool,
) -> io::Result<usize>
where
    W: Write,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut written = 0;
    for password in passwords {
        let password = password.as_ref();
        out.write_all(password.as_bytes())?;
        if show_strength {
            let rating = strength::rate(password);
            write!(out, "\t{}", terminal::strength_tag(rating, colored))?;
        }
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

pub fn to_stdout<I>(passwords: I, show_strength: bool, colored: bool) -> io::Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let stdout = io::stdout();
    let mut out = SecureBufWriter::new(stdout.lock());
    write_lines(&mut out, passwords, show_strength, colored)
}

/// Append passwords to `path`, creating parent directories as needed.
pub fn to_file<I>(path: &Path, passwords: I) -> io::Result<usize>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = SecureBufWriter::new(file);
    write_lines(&mut out, passwords, false, false)
}

/// Copy passwords joined by newlines. Refuses an empty selection.
pub fn copy_to_clipboard(ctx: &mut ClipboardContext, passwords: &[&str]) -> Result<(), String> {
    if passwords.iter().all(|p| p.is_empty()) {
        return Err("nothing to copy".to_string());
    }

    let joined = Zeroizing::new(passwords.join("\n"));
    ctx.set_contents(joined.as_str().to_owned())
        .map_err(|e| e.to_string())?;

    // Some providers keep a readback copy; drain it so it can be wiped.
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgen::{ClassSet, GenerationRequest, Password, generate_with};
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    fn sample(count: usize) -> Vec<Password> {
        let mut rng = ChaCha20Rng::seed_from_u64(3);
        let request = GenerationRequest::new(14, ClassSet::all(), false);
        (0..count)
            .map(|_| generate_with(&request, &mut rng).unwrap())
            .collect()
    }

    #[test]
    fn one_password_per_line() {
        let passwords = sample(3);
        let mut out = Vec::new();
        write_lines(&mut out, &passwords, false, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        for (line, password) in lines.iter().zip(&passwords) {
            assert_eq!(*line, password.as_str());
        }
    }

    #[test]
    fn strength_is_tab_separated() {
        let passwords = sample(1);
        let mut out = Vec::new();
        write_lines(&mut out, &passwords, true, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        let (pass, rating) = text.trim_end().split_once('\t').unwrap();
        assert_eq!(pass, passwords[0].as_str());
        assert_eq!(rating, strength::rate(pass).label());
    }

    #[test]
    fn lines_stream_from_an_iterator() {
        let mut rng = ChaCha20Rng::seed_from_u64(5);
        let request = GenerationRequest::new(8, ClassSet::all(), false);
        let batch = passgen::pass::generate_batch(&request, 4, &mut rng).unwrap();
        let mut out = Vec::new();
        assert_eq!(write_lines(&mut out, batch, false, false).unwrap(), 4);
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 4);
    }

    #[test]
    fn secure_writer_passes_bytes_through_and_clears_buffer() {
        let mut writer = SecureBufWriter::new(Vec::new());
        writer.write_all(b"hunter2\n").unwrap();
        assert_eq!(writer.buf.as_slice(), b"hunter2\n");
        assert!(writer.inner.is_empty());

        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
        assert_eq!(writer.buf.capacity(), BUF_CAPACITY);
        assert_eq!(writer.inner, b"hunter2\n");
    }

    #[test]
    fn secure_writer_spills_large_writes() {
        let big = vec![b'x'; BUF_CAPACITY + 1];
        let mut writer = SecureBufWriter::new(Vec::new());
        writer.write_all(b"ab").unwrap();
        writer.write_all(&big).unwrap();
        assert!(writer.buf.is_empty());
        assert_eq!(writer.inner.len(), BUF_CAPACITY + 3);
        assert!(writer.inner.starts_with(b"abx"));
    }

    #[test]
    fn file_output_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("passwords.txt");
        assert_eq!(to_file(&path, &sample(2)).unwrap(), 2);
        assert_eq!(to_file(&path, &sample(1)).unwrap(), 1);
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
