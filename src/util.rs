pub fn sum_vector(vec: &[f64]) -> f64 {
    let mut sum = 0.0;
    for i in vec { sum += i }
    sum
}

// Totals are persisted to the cent, individual breakdown fields are not.
pub fn round_to_cents(val: f64) -> f64 {
    (val * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(15.604), 15.6);
        assert_eq!(round_to_cents(11.699_999_999), 11.7);
        assert_eq!(round_to_cents(-3.456), -3.46);
    }

    #[test]
    fn test_sum_vector() {
        assert_eq!(sum_vector(&[1.5, 2.5, -1.0]), 3.0);
        assert_eq!(sum_vector(&[]), 0.0);
    }
}
