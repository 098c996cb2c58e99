/// Maps a digit value in `0..16` to its uppercase hexadecimal character.
pub fn digit_char(d: u8) -> Option<char> {
    match d {
        0..=9 => Some((b'0' + d) as char),
        10..=15 => Some((b'A' + (d - 10)) as char),
        _ => None,
    }
}

/// Inverse of `digit_char`. Lowercase letters are not hexadecimal digits here.
pub fn digit_value(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='F' => Some(c as u8 - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_char() {
        assert_eq!(digit_char(0), Some('0'));
        assert_eq!(digit_char(9), Some('9'));
        assert_eq!(digit_char(10), Some('A'));
        assert_eq!(digit_char(15), Some('F'));
        assert_eq!(digit_char(16), None);
    }

    #[test]
    fn test_digit_value() {
        assert_eq!(digit_value('7'), Some(7));
        assert_eq!(digit_value('C'), Some(12));
        assert_eq!(digit_value('c'), None);
        assert_eq!(digit_value('G'), None);
    }

    #[test]
    fn test_every_digit_maps_back() {
        for d in 0..16u8 {
            let c = digit_char(d).unwrap();
            assert_eq!(digit_value(c), Some(d));
        }
    }
}
