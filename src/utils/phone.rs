/// Masks a phone number for log lines, keeping only the last four characters.
pub fn mask_phone(phone: &str) -> String {
    let chars: Vec<char> = phone.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    if chars[0] == '+' {
        format!("+{}{}", "*".repeat(chars.len() - 5), visible)
    } else {
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}
