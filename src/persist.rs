//! Loading and saving digit lists as decimal text
//!
//! These are convenience paths: a missing file, an unreadable stream or
//! malformed text yields an empty list, and a failed write is dropped.
//! Each swallowed failure is reported as a `tracing` debug event.
//!

use crate::*;

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;


impl DigitList {
    /// List in the main radix holding the decimal value read from `reader`
    pub fn from_reader<R: Read>(reader: R) -> DigitList {
        DigitList::from_reader_in(Context::default().main_radix(), reader)
    }

    /// List in `radix` holding the decimal value read from `reader`
    ///
    /// The whole stream is read as UTF-8 and parsed like
    /// [`DigitList::from_decimal_str`].
    ///
    pub fn from_reader_in<R: Read>(radix: Radix, mut reader: R) -> DigitList {
        let mut text = String::new();
        match reader.read_to_string(&mut text) {
            Ok(_) => DigitList::from_decimal_str_in(radix, &text),
            Err(err) => {
                tracing::debug!(error = %err, "could not read decimal text");
                DigitList::with_radix(radix)
            }
        }
    }

    /// List in the main radix loaded from decimal text in file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> DigitList {
        DigitList::from_file_in(Context::default().main_radix(), path)
    }

    /// List in `radix` loaded from decimal text in file at `path`
    pub fn from_file_in<P: AsRef<Path>>(radix: Radix, path: P) -> DigitList {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => DigitList::from_reader_in(radix, file),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "could not open file");
                DigitList::with_radix(radix)
            }
        }
    }

    /// Write canonical decimal text of the value to `writer`
    pub fn write_decimal<W: Write>(&self, mut writer: W) {
        let text = self.to_decimal_string();
        if let Err(err) = writer.write_all(text.as_bytes()).and_then(|_| writer.flush()) {
            tracing::debug!(error = %err, "could not write decimal text");
        }
    }

    /// Create (or truncate) file at `path` holding the decimal value
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) {
        let path = path.as_ref();
        match File::create(path) {
            Ok(file) => self.write_decimal(file),
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "could not create file");
            }
        }
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("digitring-{}-{}", std::process::id(), name))
    }

    struct FailingIo;

    impl Read for FailingIo {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken"))
        }
    }

    impl Write for FailingIo {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn read_from_bytes() {
        let list = DigitList::from_reader_in(Radix::Decimal, &b"  4096\n"[..]);
        assert_eq!(list.to_vec(), vec![4, 0, 9, 6]);

        let list = DigitList::from_reader_in(Radix::Octal, &b"64"[..]);
        assert_eq!(list.to_string(), "100");
    }

    #[test]
    fn read_main_radix() {
        let list = DigitList::from_reader(&b"255"[..]);
        assert_eq!(list.radix(), Context::default().main_radix());
        assert_eq!(list.to_decimal_string(), "255");
    }

    #[test]
    fn read_malformed_is_empty() {
        assert!(DigitList::from_reader_in(Radix::Decimal, &b"-12"[..]).is_empty());
        assert!(DigitList::from_reader_in(Radix::Decimal, &b""[..]).is_empty());
        assert!(DigitList::from_reader_in(Radix::Decimal, &[0xff, 0xfe][..]).is_empty());
    }

    #[test]
    fn read_failure_is_empty() {
        let list = DigitList::from_reader_in(Radix::Binary, FailingIo);
        assert!(list.is_empty());
        assert_eq!(list.radix(), Radix::Binary);
    }

    #[test]
    fn write_to_buffer() {
        let list = DigitList::from_decimal_str_in(Radix::Hexadecimal, "3404");
        let mut buf = Vec::new();
        list.write_decimal(&mut buf);
        assert_eq!(buf, b"3404");

        let mut buf = Vec::new();
        DigitList::with_radix(Radix::Decimal).write_decimal(&mut buf);
        assert_eq!(buf, b"0");
    }

    #[test]
    fn write_failure_is_swallowed() {
        let list = DigitList::from_decimal_str_in(Radix::Decimal, "12");
        list.write_decimal(FailingIo);
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[test]
    fn file_round_trip() {
        let path = temp_path("round-trip.txt");
        let list = DigitList::from_decimal_str_in(Radix::Ternary, "987654321987654321");
        list.save_to_file(&path);

        let loaded = DigitList::from_file_in(Radix::Ternary, &path);
        assert_eq!(loaded.to_vec(), list.to_vec());

        let loaded = DigitList::from_file(&path);
        assert_eq!(loaded, list);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_empty() {
        let path = temp_path("does-not-exist.txt");
        let list = DigitList::from_file_in(Radix::Decimal, &path);
        assert!(list.is_empty());
    }

    #[test]
    fn save_to_missing_directory_is_swallowed() {
        let path = temp_path("no-such-dir").join("value.txt");
        DigitList::from_decimal_str_in(Radix::Decimal, "1").save_to_file(&path);
        assert!(!path.exists());
    }
}
