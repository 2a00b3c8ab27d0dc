/// Check if a character is a CJK unified ideograph in the common range
/// U+4E00..=U+9FA5.
pub fn is_cn_char(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Check if a string is one or more consecutive Chinese characters.
///
/// # Examples
///
/// ```
/// use applet_util::strings::is_cn;
///
/// assert!(is_cn("中文"));
/// assert!(!is_cn("中a"));
/// assert!(!is_cn(""));
/// ```
pub fn is_cn(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_cn_char)
}
