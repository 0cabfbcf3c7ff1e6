//! Форматирование чисел для таблиц

/// Вставляет пробел-разделитель тысяч в целую часть числа
fn group_thousands(integer_part: &str) -> String {
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

/// Площадь в км²: целые без дробной части, дробные с одним знаком
///
/// 357022.0 -> "357 022", 0.44 -> "0.4"
pub fn format_area(area: f64) -> String {
    if area.fract() == 0.0 {
        group_thousands(&format!("{:.0}", area))
    } else {
        let formatted = format!("{:.1}", area);
        match formatted.split_once('.') {
            Some((integer, fraction)) => format!("{}.{}", group_thousands(integer), fraction),
            None => formatted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(357022.0), "357 022");
        assert_eq!(format_area(7692024.0), "7 692 024");
        assert_eq!(format_area(459.0), "459");
        assert_eq!(format_area(0.0), "0");
        assert_eq!(format_area(0.44), "0.4");
        assert_eq!(format_area(1580.5), "1 580.5");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-1234567"), "-1 234 567");
        assert_eq!(group_thousands("123"), "123");
    }
}
