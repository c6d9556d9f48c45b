use crate::utils::error::{EventGetterError, Result};
use chrono::{Datelike, NaiveDate};

/// 月份補零成兩位數
pub fn pad_month(month: u32) -> String {
    format!("{:02}", month)
}

/// 求指定年月的最後一天 (格里曆，含閏年)。任何 i32 年份都可計算
pub fn last_day_of_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(EventGetterError::MonthOutOfRangeError {
            value: month as i32,
        });
    }

    // 格里曆以 400 年為週期，換算到 2000〜2399 年再計算
    let cycle_year = 2000 + year.rem_euclid(400);

    // 下個月一日的前一天
    let (next_year, next_month) = if month == 12 {
        (cycle_year + 1, 1)
    } else {
        (cycle_year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .ok_or(EventGetterError::MonthOutOfRangeError {
            value: month as i32,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_month_is_two_chars() {
        for month in 1..=12 {
            assert_eq!(pad_month(month).len(), 2);
        }
        assert_eq!(pad_month(3), "03");
        assert_eq!(pad_month(11), "11");
    }

    #[test]
    fn test_last_day_of_february() {
        assert_eq!(last_day_of_month(2000, 2).unwrap(), 29);
        assert_eq!(last_day_of_month(2023, 2).unwrap(), 28);
        assert_eq!(last_day_of_month(2024, 2).unwrap(), 29);
        assert_eq!(last_day_of_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn test_last_day_of_regular_months() {
        assert_eq!(last_day_of_month(2024, 3).unwrap(), 31);
        assert_eq!(last_day_of_month(2024, 4).unwrap(), 30);
        assert_eq!(last_day_of_month(2024, 12).unwrap(), 31);
        assert_eq!(last_day_of_month(2023, 1).unwrap(), 31);
    }

    #[test]
    fn test_last_day_for_years_far_from_today() {
        assert_eq!(last_day_of_month(300000, 2).unwrap(), 29);
        assert_eq!(last_day_of_month(262143, 12).unwrap(), 31);
        assert_eq!(last_day_of_month(2100, 2).unwrap(), 28);
        assert_eq!(last_day_of_month(0, 2).unwrap(), 29);
        assert_eq!(last_day_of_month(-100, 2).unwrap(), 28);
        assert_eq!(last_day_of_month(i32::MAX, 12).unwrap(), 31);
        assert_eq!(last_day_of_month(i32::MIN, 2).unwrap(), 29);
    }

    #[test]
    fn test_last_day_rejects_invalid_month() {
        assert!(matches!(
            last_day_of_month(2024, 13),
            Err(EventGetterError::MonthOutOfRangeError { value: 13 })
        ));
        assert!(last_day_of_month(2024, 0).is_err());
    }
}
