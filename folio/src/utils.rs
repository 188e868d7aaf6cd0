use std::fmt;

pub fn memchr(haystack: &[u8], needle: u8) -> Option<usize> {
    haystack.iter().position(|&x| x == needle)
}

pub fn memstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

/// Helper for dealing with untrusted size hints.
#[inline(always)]
pub(crate) fn untrusted_size_hint(value: usize) -> usize {
    value.min(1024)
}

/// Writes a float the way a JavaScript number prints.
///
/// Integral values lose their fraction and negative zero prints as `0`.
pub(crate) fn write_js_number(f: &mut fmt::Formatter<'_>, val: f64) -> fmt::Result {
    if val.is_nan() {
        f.write_str("NaN")
    } else if val.is_infinite() {
        f.write_str(if val.is_sign_negative() {
            "-Infinity"
        } else {
            "Infinity"
        })
    } else if val == 0.0 {
        f.write_str("0")
    } else if val.fract() == 0.0 && val.abs() < 1e21 {
        write!(f, "{val:.0}")
    } else {
        write!(f, "{val}")
    }
}

/// Displays the items of an iterator separated by a string.
pub(crate) struct JoinWith<'s, I>(pub I, pub &'s str);

impl<'s, I> fmt::Display for JoinWith<'s, I>
where
    I: Iterator + Clone,
    I::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, item) in self.0.clone().enumerate() {
            if idx > 0 {
                ok!(f.write_str(self.1));
            }
            ok!(write!(f, "{item}"));
        }
        Ok(())
    }
}
