// Dataset record types as exported by the analytics step
use chrono::NaiveDate;
use serde::Deserialize;

/// One month of aggregated revenue, in rupiah.
#[derive(Debug, Clone, Deserialize)]
pub struct SalesRecord {
    pub month: String,
    pub revenue: f64,
}

/// One product category with revenue pre-scaled to millions of rupiah.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRecord {
    pub category: String,
    pub revenue_mil: f64,
}

/// Order volume for one payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentRecord {
    pub payment_method: String,
    pub order_count: u64,
}

/// Parse a "YYYY-MM" month label into the first day of that month.
pub fn parse_month(label: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", label), "%Y-%m-%d").ok()
}

/// True when every month label parses and the sequence is non-decreasing.
/// Records are never reordered; callers only use this to flag suspicious
/// input.
pub fn months_chronological(records: &[SalesRecord]) -> bool {
    let mut prev: Option<NaiveDate> = None;
    for record in records {
        match parse_month(&record.month) {
            Some(date) => {
                if prev.is_some_and(|p| p > date) {
                    return false;
                }
                prev = Some(date);
            }
            None => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_deserialize_from_dataset_json() {
        let sales: Vec<SalesRecord> =
            serde_json::from_str(r#"[{"month":"2022-01","revenue":412358000.0}]"#).unwrap();
        assert_eq!(sales[0].month, "2022-01");
        assert_eq!(sales[0].revenue, 412358000.0);

        let categories: Vec<CategoryRecord> =
            serde_json::from_str(r#"[{"category":"Elektronik","revenue_mil":1250.75}]"#).unwrap();
        assert_eq!(categories[0].revenue_mil, 1250.75);

        let payments: Vec<PaymentRecord> =
            serde_json::from_str(r#"[{"payment_method":"QRIS","order_count":3200}]"#).unwrap();
        assert_eq!(payments[0].order_count, 3200);
    }

    #[test]
    fn test_negative_order_count_is_rejected_at_parse_time() {
        let result: Result<Vec<PaymentRecord>, _> =
            serde_json::from_str(r#"[{"payment_method":"QRIS","order_count":-1}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2022-03"),
            NaiveDate::from_ymd_opt(2022, 3, 1)
        );
        assert_eq!(parse_month("Maret 2022"), None);
    }

    #[test]
    fn test_months_chronological() {
        let ordered = vec![
            SalesRecord { month: "2022-01".to_string(), revenue: 1.0 },
            SalesRecord { month: "2022-02".to_string(), revenue: 2.0 },
        ];
        assert!(months_chronological(&ordered));

        let reversed = vec![
            SalesRecord { month: "2022-02".to_string(), revenue: 2.0 },
            SalesRecord { month: "2022-01".to_string(), revenue: 1.0 },
        ];
        assert!(!months_chronological(&reversed));

        let garbage = vec![SalesRecord { month: "soon".to_string(), revenue: 1.0 }];
        assert!(!months_chronological(&garbage));
    }
}
