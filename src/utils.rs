use std::error::Error;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn error_fmt_chain(f: &mut std::fmt::Formatter<'_>, source: &Option<impl Error>) -> std::fmt::Result{
    if let Some(error) = source{
        write!(f, "\n\tCaused By:\n\t")?;
        write!(f, "{:?}", &error)?;
        error_fmt_chain(f, &error.source())
    } else {
        Ok(())
    }
}

// Ids are 32 hex chars in the Olist data set; tables show the first 8.
pub fn short_id(id: &str) -> String{
    match id.char_indices().nth(8) {
        Some((cut, _)) => format!("{}...", &id[..cut]),
        None => id.to_string()
    }
}

// Backend timestamps come as RFC 3339, RFC 2822 (Flask's default) or "YYYY-MM-DD HH:MM:SS".
pub fn display_date(raw: Option<&str>) -> String{
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return "-".to_string();
    };

    let date = DateTime::parse_from_rfc3339(raw).map(|d| d.date_naive())
        .or_else(|_| DateTime::parse_from_rfc2822(raw).map(|d| d.date_naive()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|d| d.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%m/%d/%Y").to_string(),
        Err(_) => raw.to_string()
    }
}

pub fn group_thousands(value: i64) -> String{
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if value < 0 {
        format!("-{}", out)
    } else {
        out
    }
}

pub fn two_decimals(value: f64) -> String{
    format!("{:.2}", value)
}
