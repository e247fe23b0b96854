//! 表示用フォーマット

use chrono::{Datelike, NaiveDate};

/// "YYYY-MM-DD" から公開年を取り出す
pub fn release_year(release_date: &str) -> Option<i32> {
    NaiveDate::parse_from_str(release_date.trim(), "%Y-%m-%d")
        .ok()
        .map(|date| date.year())
}

/// 公開年の表示（不明なら "-"）
pub fn format_year(release_date: &str) -> String {
    release_year(release_date)
        .map(|year| year.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// 興行収入を "$1,234,567" 形式に
pub fn format_revenue(revenue: u64) -> String {
    let digits = revenue.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${}", grouped)
}

pub fn format_runtime(minutes: u32) -> String {
    format!("{} mins", minutes)
}

/// 評価点（8.0 は "8"、7.25 は "7.25"）
pub fn format_rating(vote_average: f64) -> String {
    format!("{}", vote_average)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_year() {
        assert_eq!(release_year("2021-10-22"), Some(2021));
        assert_eq!(release_year(" 1999-03-30 "), Some(1999));
    }

    #[test]
    fn test_release_year_invalid() {
        assert_eq!(release_year(""), None);
        assert_eq!(release_year("soon"), None);
        assert_eq!(release_year("2021-13-40"), None);
    }

    #[test]
    fn test_format_year_fallback() {
        assert_eq!(format_year("2021-10-22"), "2021");
        assert_eq!(format_year(""), "-");
    }

    #[test]
    fn test_format_revenue() {
        assert_eq!(format_revenue(0), "$0");
        assert_eq!(format_revenue(999), "$999");
        assert_eq!(format_revenue(1000), "$1,000");
        assert_eq!(format_revenue(463_517_383), "$463,517,383");
        assert_eq!(format_revenue(2_923_706_026), "$2,923,706,026");
    }

    #[test]
    fn test_format_runtime_and_rating() {
        assert_eq!(format_runtime(136), "136 mins");
        assert_eq!(format_rating(8.0), "8");
        assert_eq!(format_rating(7.3), "7.3");
    }
}
