use crate::types::rental_record::RiderCounts;
use crate::types::summary::CustomerType;

/// Returns `rows` ordered by the count of `customer_type`, largest first.
///
/// Rows with equal counts keep their input (key) order. The season and
/// weather charts are drawn in this order.
pub fn rank_by<T: RiderCounts + Clone>(rows: &[T], customer_type: CustomerType) -> Vec<T> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| customer_type.count_of(b).cmp(&customer_type.count_of(a)));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::summary::WeatherTotals;

    fn weather(code: u8, casual: u64, registered: u64) -> WeatherTotals {
        WeatherTotals {
            weather: code,
            casual_count: casual,
            registered_count: registered,
            total_count: casual + registered,
        }
    }

    #[test]
    fn test_rank_by_casual_and_registered() {
        let rows = [weather(1, 5, 50), weather(2, 9, 10), weather(3, 1, 70)];

        let by_casual: Vec<u8> = rank_by(&rows, CustomerType::Casual)
            .iter()
            .map(|r| r.weather)
            .collect();
        assert_eq!(by_casual, [2, 1, 3]);

        let by_registered: Vec<u8> = rank_by(&rows, CustomerType::Registered)
            .iter()
            .map(|r| r.weather)
            .collect();
        assert_eq!(by_registered, [3, 1, 2]);
    }

    #[test]
    fn test_ties_keep_key_order() {
        let rows = [weather(1, 4, 0), weather(2, 4, 0), weather(4, 4, 0)];
        let ranked: Vec<u8> = rank_by(&rows, CustomerType::Casual)
            .iter()
            .map(|r| r.weather)
            .collect();
        assert_eq!(ranked, [1, 2, 4]);
    }
}
