//! Interactive directory prompt
//!
//! Used when no directory is given on the command line. Reads one line and
//! accepts paths pasted with surrounding quotes, as copied from a file
//! explorer.

use anyhow::{Context, Result, bail};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Ask for the input folder on stdin
pub fn prompt_directory() -> Result<PathBuf> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_directory_from(&mut stdin.lock(), &mut stdout.lock())
}

/// Ask for the input folder using the given reader and writer
pub fn prompt_directory_from<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
) -> Result<PathBuf> {
    write!(writer, "Folder containing the PDF files: ").context("Failed to write prompt")?;
    writer.flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = reader
        .read_line(&mut input)
        .context("Failed to read user input")?;

    if read == 0 {
        bail!("No folder entered (end of input)");
    }

    let path = strip_quotes(input.trim());
    if path.is_empty() {
        bail!("No folder entered");
    }

    Ok(PathBuf::from(path))
}

fn strip_quotes(input: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = input
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner.trim();
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompt(input: &str) -> Result<PathBuf> {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_directory_from(&mut reader, &mut output);
        assert!(String::from_utf8(output).unwrap().contains("Folder"));
        result
    }

    #[test]
    fn test_plain_path() {
        assert_eq!(prompt("/data/cases\n").unwrap(), PathBuf::from("/data/cases"));
    }

    #[test]
    fn test_quoted_path() {
        assert_eq!(
            prompt("  \"Y:\\FRE\\Affordability\\17.10.2025\"  \r\n").unwrap(),
            PathBuf::from("Y:\\FRE\\Affordability\\17.10.2025")
        );
        assert_eq!(prompt("'/a b/c'\n").unwrap(), PathBuf::from("/a b/c"));
    }

    #[test]
    fn test_empty_input_is_error() {
        assert!(prompt("\n").is_err());
        assert!(prompt("").is_err());
        assert!(prompt("\"\"\n").is_err());
    }
}
