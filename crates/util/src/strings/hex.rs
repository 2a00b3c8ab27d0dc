/// Render bytes as a lowercase hex string, two digits per byte.
///
/// # Examples
///
/// ```
/// use applet_util::strings::to_hex;
///
/// assert_eq!(to_hex(&[0x00, 0x0f, 0xab]), "000fab");
/// ```
pub fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
