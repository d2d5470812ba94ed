use super::employee::Employee;

/// Sample roster the app boots with, ids `"1"` through `"4"`.
static SAMPLE_JSON: &str = include_str!("seed.json");

/// Deserialize the built-in four-employee sample roster.
pub fn sample_employees() -> Vec<Employee> {
    serde_json::from_str(SAMPLE_JSON).expect("bundled sample roster is valid")
}

/// First free sequential id after the sample roster.
pub(crate) const NEXT_SAMPLE_ID: u64 = 5;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::employee::ImageSource;
    use chrono::NaiveDate;

    #[test]
    fn sample_roster_is_four_employees_in_order() {
        let roster = sample_employees();
        let names: Vec<_> = roster.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(
            names,
            ["Sarah Johnson", "Michael Chen", "Emily Rodriguez", "David Kim"]
        );
    }

    #[test]
    fn sample_records_deserialize_fully() {
        let roster = sample_employees();
        let sarah = &roster[0];

        assert_eq!(sarah.id.as_str(), "1");
        assert_eq!(sarah.years_of_experience, 5);
        assert_eq!(
            sarah.joining_date,
            NaiveDate::from_ymd_opt(2019, 3, 15).unwrap()
        );
        assert!(matches!(sarah.image, ImageSource::Url(_)));
        assert_eq!(sarah.skills.len(), 4);
    }

    #[test]
    fn sample_roster_round_trips_through_serde() {
        let roster = sample_employees();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Vec<Employee> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, roster);
    }
}
