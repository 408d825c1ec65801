use chrono::{Local, NaiveDate};

/// Today's date in the `@author` tag format.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}

/// Format a date as `8 June 2021`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d %B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2021, 6, 8).unwrap();
        assert_eq!(format_date(date), "8 June 2021");

        let date = NaiveDate::from_ymd_opt(1999, 12, 31).unwrap();
        assert_eq!(format_date(date), "31 December 1999");
    }
}
