//! Parameter parsing for CSI and other sequences.
//!
//! Parameters are separated by semicolons. Missing fields are kept as empty
//! strings, and numeric parsing never fails: empty or malformed fields read
//! as 0.

/// Split a parameter run on `;`, trimming whitespace around each field.
///
/// `"1;;3"` yields `["1", "", "3"]`.
pub fn parameter_strings(bytes: &[u8]) -> Vec<String> {
    fields(bytes)
        .map(|field| String::from_utf8_lossy(field).into_owned())
        .collect()
}

/// Split a parameter run on `;` and parse each field as an integer.
///
/// `"10;;20"` yields `[10, 0, 20]`.
pub fn parameter_ints(bytes: &[u8]) -> Vec<i32> {
    fields(bytes).map(parse_int).collect()
}

fn fields(bytes: &[u8]) -> impl Iterator<Item = &[u8]> {
    bytes.split(|&b| b == b';').map(trim)
}

fn trim(mut field: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = field {
        if !first.is_ascii_whitespace() {
            break;
        }
        field = rest;
    }
    while let [rest @ .., last] = field {
        if !last.is_ascii_whitespace() {
            break;
        }
        field = rest;
    }
    field
}

fn parse_int(field: &[u8]) -> i32 {
    std::str::from_utf8(field)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strings_keep_empty_fields() {
        assert_eq!(parameter_strings(b"1;;3"), vec!["1", "", "3"]);
        assert_eq!(parameter_strings(b""), vec![""]);
        assert_eq!(parameter_strings(b";"), vec!["", ""]);
    }

    #[test]
    fn test_strings_are_trimmed() {
        assert_eq!(parameter_strings(b" 1 ;\t2"), vec!["1", "2"]);
    }

    #[test]
    fn test_ints() {
        assert_eq!(parameter_ints(b"10;;20"), vec![10, 0, 20]);
        assert_eq!(parameter_ints(b"5"), vec![5]);
        assert_eq!(parameter_ints(b""), vec![0]);
    }

    #[test]
    fn test_ints_absorb_garbage() {
        assert_eq!(parameter_ints(b"x;3:4;7"), vec![0, 0, 7]);
        assert_eq!(parameter_ints(b"99999999999"), vec![0]);
        assert_eq!(parameter_ints(b"-2"), vec![-2]);
    }
}
