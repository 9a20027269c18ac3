use serde::{Deserialize, Serialize};

/// Fare pricing rules: a flat per-seat base plus a percentage surcharge.
/// Amounts are kept in integer cents internally so the published totals
/// come out exact in f64.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FareSchedule {
    /// Per-seat base fare, in cents.
    pub base_fare_cents: i64,

    /// Surcharge applied on top of the base, in whole percent.
    pub tax_percent: i64,
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self {
            base_fare_cents: 10_000,
            tax_percent: 16,
        }
    }
}

impl FareSchedule {
    /// Total fare for `num_seats` seats, in currency units.
    pub fn calculate(&self, num_seats: u32) -> f64 {
        let base = i64::from(num_seats) * self.base_fare_cents;
        let tax = base * self.tax_percent / 100;
        (base + tax) as f64 / 100.0
    }
}

/// Fare under the default schedule: `num_seats * 100` plus a fixed 16%
/// surcharge. `num_seats` is caller-validated to 1..=91 (the coach
/// capacity).
pub fn calculate_fare(num_seats: u32) -> f64 {
    FareSchedule::default().calculate(num_seats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_fare_values() {
        assert_eq!(calculate_fare(1), 116.0);
        assert_eq!(calculate_fare(10), 1160.0);
        assert_eq!(calculate_fare(91), 10556.0);
    }

    #[test]
    fn test_custom_schedule() {
        let schedule = FareSchedule {
            base_fare_cents: 25_000,
            tax_percent: 8,
        };
        assert_eq!(schedule.calculate(2), 540.0);
    }
}
