/// Renders a whole-dollar amount with thousands separators, e.g. "$1,745".
/// Display only; nothing here claims currency correctness.
pub fn format_price(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_price(0), "$0");
        assert_eq!(format_price(798), "$798");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_price(1745), "$1,745");
        assert_eq!(format_price(1234567), "$1,234,567");
    }
}
