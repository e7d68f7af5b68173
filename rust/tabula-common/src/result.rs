pub type Result<T> = std::result::Result<T, crate::error::Error>;

#[macro_export]
macro_rules! verify_arg {
    ($name:expr, $expr:expr) => {{
        let result = $expr;
        $crate::result::verify_arg(result, stringify!($name), stringify!($expr))?;
    }};
}

/// Fails with `OutOfRange` unless `$index < $len`.
#[macro_export]
macro_rules! verify_index {
    ($name:expr, $index:expr, $len:expr) => {{
        $crate::result::verify_index(
            i64::try_from($index).unwrap_or(i64::MAX),
            $len as u64,
            stringify!($name),
        )?;
    }};
}

#[macro_export]
macro_rules! verify_sequence {
    ($expr:expr, $($msg:tt)+) => {{
        if !$expr {
            return Err($crate::error::Error::invalid_sequence(format!($($msg)+)));
        }
    }};
}

#[inline]
pub fn verify_arg(predicate: bool, name: &str, condition: &str) -> Result<()> {
    if predicate {
        Ok(())
    } else {
        invalid_arg(name, condition)
    }
}

#[inline]
pub fn verify_index(index: i64, len: u64, name: &str) -> Result<()> {
    if index >= 0 && (index as u64) < len {
        Ok(())
    } else {
        out_of_range(name, index, len)
    }
}

#[cold]
pub fn invalid_arg(name: &str, condition: &str) -> Result<()> {
    Err(crate::error::ErrorKind::InvalidArgument {
        name: name.to_string(),
        message: condition.to_string(),
    }
    .into())
}

#[cold]
pub fn out_of_range(name: &str, index: i64, len: u64) -> Result<()> {
    Err(crate::error::ErrorKind::OutOfRange {
        name: name.to_string(),
        index,
        len,
    }
    .into())
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;

    fn checked_div(a: u32, b: u32) -> super::Result<u32> {
        verify_arg!(b, b != 0);
        Ok(a / b)
    }

    fn checked_get(items: &[u8], idx: usize) -> super::Result<u8> {
        verify_index!(idx, idx, items.len());
        Ok(items[idx])
    }

    fn checked_ascending(items: &[i64]) -> super::Result<()> {
        for pair in items.windows(2) {
            verify_sequence!(pair[0] < pair[1], "{} is not below {}", pair[0], pair[1]);
        }
        Ok(())
    }

    #[test]
    fn test_verify_arg() {
        assert_eq!(checked_div(6, 3).unwrap(), 2);
        match checked_div(6, 0).unwrap_err().into_kind() {
            ErrorKind::InvalidArgument { name, message } => {
                assert_eq!(name, "b");
                assert_eq!(message, "b != 0");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn test_verify_index() {
        assert_eq!(checked_get(&[1, 2, 3], 2).unwrap(), 3);
        let err = checked_get(&[1, 2, 3], 3).unwrap_err();
        assert!(err.is_out_of_range());
    }

    #[test]
    fn test_verify_sequence() {
        assert!(checked_ascending(&[1, 2, 5]).is_ok());
        let err = checked_ascending(&[1, 3, 3]).unwrap_err();
        assert!(err.is_invalid_sequence());
        assert_eq!(err.to_string(), "invalid sequence: 3 is not below 3");
    }
}
