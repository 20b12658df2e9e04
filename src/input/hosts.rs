use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::core::constants::defaults;
use crate::core::error::{HostProbeError, Result};

/// Read hosts from a file, or from stdin when `path` is `-`.
pub fn read_hosts<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    if path == Path::new(defaults::STDIN_PATH) {
        return read_hosts_from_stdin();
    }

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => HostProbeError::FileNotFound(path.display().to_string()),
        _ => HostProbeError::Io(err),
    })?;

    read_hosts_from_reader(BufReader::new(file))
}

pub fn read_hosts_from_stdin() -> Result<Vec<String>> {
    read_hosts_from_reader(io::stdin().lock())
}

/// One host per line, trimmed. Blank lines are skipped; nothing else is
/// validated, malformed hosts are passed through and fail at probe time.
pub fn read_hosts_from_reader<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut hosts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let host = line.trim();
        if !host.is_empty() {
            hosts.push(host.to_string());
        }
    }
    Ok(hosts)
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::{Cursor, Write};

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_read_hosts_from_reader__trims_whitespace() -> TestResult {
        let input = Cursor::new("  example.com  \n\tfoo.bar\r\nbaz.qux");

        let hosts = read_hosts_from_reader(input)?;

        assert_eq!(hosts, vec!["example.com", "foo.bar", "baz.qux"]);
        Ok(())
    }

    #[test]
    fn test_read_hosts_from_reader__skips_blank_lines() -> TestResult {
        let input = Cursor::new("a.com\n\n   \nb.com\n");

        let hosts = read_hosts_from_reader(input)?;

        assert_eq!(hosts, vec!["a.com", "b.com"]);
        Ok(())
    }

    #[test]
    fn test_read_hosts_from_reader__keeps_duplicates_and_malformed_hosts() -> TestResult {
        let input = Cursor::new("a.com\na.com\nhttps://already-a-url.com\nnot a host\n");

        let hosts = read_hosts_from_reader(input)?;

        assert_eq!(
            hosts,
            vec!["a.com", "a.com", "https://already-a-url.com", "not a host"]
        );
        Ok(())
    }

    #[test]
    fn test_read_hosts_from_reader__empty() -> TestResult {
        let hosts = read_hosts_from_reader(Cursor::new(""))?;
        assert!(hosts.is_empty());
        Ok(())
    }

    #[test]
    fn test_read_hosts__from_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"example.com\nexample.org\n")?;

        let hosts = read_hosts(file.path())?;

        assert_eq!(hosts, vec!["example.com", "example.org"]);
        Ok(())
    }

    #[test]
    fn test_read_hosts__when_non_existing_file() {
        let result = read_hosts("non_existing_hosts.txt");

        match result {
            Err(HostProbeError::FileNotFound(path)) => {
                assert_eq!(path, "non_existing_hosts.txt")
            }
            other => panic!("Expected FileNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_hosts__invalid_utf8_is_io_error() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe, b'\n'])?;

        let result = read_hosts(file.path());

        assert!(matches!(result, Err(HostProbeError::Io(_))));
        Ok(())
    }
}
