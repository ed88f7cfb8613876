pub fn pad2(n: i32) -> String {
    if n < 10 {
        format!("0{}", n)
    } else {
        n.to_string()
    }
}

fn twelve_hour(hour: i32, minute: i32, second: i32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let h = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{}:{} {}", h, pad2(minute), pad2(second), suffix)
}

/// Local wall-clock time, e.g. `5:04:09 PM`.
#[cfg(feature = "web")]
pub fn clock_label() -> String {
    use js_sys::Date;
    let d = Date::new_0();
    twelve_hour(
        d.get_hours() as i32,
        d.get_minutes() as i32,
        d.get_seconds() as i32,
    )
}

#[cfg(not(feature = "web"))]
pub fn clock_label() -> String {
    use chrono::Timelike;
    let now = chrono::Local::now();
    twelve_hour(now.hour() as i32, now.minute() as i32, now.second() as i32)
}

/// Thousands-separated number with at most two decimals, trailing zeros dropped.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let rounded = (v * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let abs = rounded.abs();
    let int_part = abs.trunc() as u64;
    let frac = ((abs - abs.trunc()) * 100.0).round() as u64;

    let digits = int_part.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = if negative {
        format!("-{grouped}")
    } else {
        grouped
    };
    if frac > 0 {
        let frac_str = format!("{:02}", frac);
        out.push('.');
        out.push_str(frac_str.trim_end_matches('0'));
    }
    out
}

/// Short axis tick: `31.9K`, `2.8K`, `420`, `5.5`.
pub fn format_tick(v: f64) -> String {
    let abs = v.abs();
    if abs >= 1_000_000.0 {
        format!("{}M", trim_decimal(v / 1_000_000.0))
    } else if abs >= 1_000.0 {
        format!("{}K", trim_decimal(v / 1_000.0))
    } else {
        trim_decimal(v)
    }
}

fn trim_decimal(v: f64) -> String {
    let s = format!("{:.1}", v);
    s.strip_suffix(".0").map(str::to_string).unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_hour_clock() {
        assert_eq!(twelve_hour(0, 5, 9), "12:05:09 AM");
        assert_eq!(twelve_hour(12, 0, 0), "12:00:00 PM");
        assert_eq!(twelve_hour(17, 4, 59), "5:04:59 PM");
    }

    #[test]
    fn clock_label_has_seconds_and_suffix() {
        let label = clock_label();
        assert_eq!(label.matches(':').count(), 2);
        assert!(label.ends_with("AM") || label.ends_with("PM"));
    }

    #[test]
    fn numbers_are_grouped_and_trimmed() {
        assert_eq!(format_number(2796.9), "2,796.9");
        assert_eq!(format_number(31894.0), "31,894");
        assert_eq!(format_number(5.53), "5.53");
        assert_eq!(format_number(1_200.50), "1,200.5");
        assert_eq!(format_number(-1500.0), "-1,500");
        assert_eq!(format_number(f64::NAN), "0");
    }

    #[test]
    fn ticks_are_short() {
        assert_eq!(format_tick(31894.0), "31.9K");
        assert_eq!(format_tick(2000.0), "2K");
        assert_eq!(format_tick(420.0), "420");
        assert_eq!(format_tick(5.5), "5.5");
        assert_eq!(format_tick(2_500_000.0), "2.5M");
    }
}
