use std::io::BufRead;

/// Failure to read the per-department capacity from an input stream.
#[derive(Debug, thiserror::Error)]
pub enum CapacityError {
    #[error("failed to read capacity: {0}")]
    Io(#[from] std::io::Error),
    #[error("no capacity provided on standard input")]
    Missing,
    #[error("capacity '{0}' is not an integer")]
    Invalid(String),
}

/// Reads the first whitespace-delimited token of `reader` as the capacity,
/// skipping blank lines and consuming nothing past the line that holds it.
///
/// The value is returned as given; negative capacities are not rejected here.
pub fn read_capacity<R: BufRead>(mut reader: R) -> Result<i64, CapacityError> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            return Err(CapacityError::Missing);
        }
        if let Some(token) = line.split_whitespace().next() {
            return token
                .parse::<i64>()
                .map_err(|_| CapacityError::Invalid(token.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_first_token() {
        assert_eq!(read_capacity(Cursor::new("  3\n")).expect("capacity"), 3);
        assert_eq!(read_capacity(Cursor::new("-2 extra")).expect("capacity"), -2);
        assert_eq!(read_capacity(Cursor::new("\n\n 7\n")).expect("capacity"), 7);
    }

    #[test]
    fn rejects_missing_or_malformed_input() {
        assert!(matches!(
            read_capacity(Cursor::new("\n")),
            Err(CapacityError::Missing)
        ));
        assert!(matches!(
            read_capacity(Cursor::new("three")),
            Err(CapacityError::Invalid(value)) if value == "three"
        ));
    }
}
