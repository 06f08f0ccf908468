use anyhow::{Context, Result, bail};
use std::io::{self, Read};

pub const MAX_MESSAGE_SIZE: usize = 64 * 1024;

/// Reads a one-shot chat message from the command line or stdin.
pub struct InputReader;

impl InputReader {
    /// Returns `message` if given, otherwise everything on stdin.
    pub fn read(message: Option<&str>) -> Result<String> {
        match message {
            Some(text) => {
                check_size(text.len())?;
                Ok(text.to_string())
            }
            None => Self::read_from(io::stdin().lock()),
        }
    }

    pub fn read_from<R: Read>(mut reader: R) -> Result<String> {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 8192];

        loop {
            let bytes_read = reader.read(&mut chunk).context("Failed to read from stdin")?;
            if bytes_read == 0 {
                break;
            }

            buffer.extend_from_slice(&chunk[..bytes_read]);
            check_size(buffer.len())?;
        }

        String::from_utf8(buffer).context("Input is not valid UTF-8")
    }
}

fn check_size(size: usize) -> Result<()> {
    if size > MAX_MESSAGE_SIZE {
        bail!(
            "Message size ({:.1} KB) exceeds maximum allowed size ({} KB).",
            size as f64 / 1024.0,
            MAX_MESSAGE_SIZE / 1024
        );
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_read_argument() {
        let message = InputReader::read(Some("Who was Ahmose I?")).unwrap();
        assert_eq!(message, "Who was Ahmose I?");
    }

    #[test]
    fn test_read_from_unicode() {
        let content = "من بنى الأهرامات؟\nWho built the pyramids?";
        let message = InputReader::read_from(content.as_bytes()).unwrap();
        assert_eq!(message, content);
    }

    #[test]
    fn test_read_from_empty() {
        let message = InputReader::read_from(&b""[..]).unwrap();
        assert!(message.is_empty());
    }

    #[test]
    fn test_read_from_invalid_utf8() {
        let result = InputReader::read_from(&[0xff, 0xfe, 0xfd][..]);
        assert!(result.unwrap_err().to_string().contains("UTF-8"));
    }

    #[test]
    fn test_read_exceeds_max_size() {
        let large = "x".repeat(MAX_MESSAGE_SIZE + 1);

        let err = InputReader::read_from(large.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("exceeds maximum"));
        assert!(InputReader::read(Some(&large)).is_err());
    }

    #[test]
    fn test_read_at_max_size() {
        let content = "x".repeat(MAX_MESSAGE_SIZE);
        let message = InputReader::read_from(content.as_bytes()).unwrap();
        assert_eq!(message.len(), MAX_MESSAGE_SIZE);
    }
}
