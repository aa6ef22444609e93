//! Confidence Color Mapping
//!
//! Maps a prediction probability to a Tailwind text color class. Both the
//! result page and the history table use this; keep it the only copy.

/// Five bands over `probability * 100`, each upper-bound exclusive except
/// the top one.
pub fn color(probability: f64) -> &'static str {
    let perc = probability * 100.0;
    if perc < 20.0 {
        "text-red-500"
    } else if perc < 40.0 {
        "text-orange-500"
    } else if perc < 60.0 {
        "text-yellow-500"
    } else if perc < 80.0 {
        "text-green-400"
    } else {
        "text-green-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_interiors() {
        assert_eq!(color(0.0), "text-red-500");
        assert_eq!(color(0.1), "text-red-500");
        assert_eq!(color(0.3), "text-orange-500");
        assert_eq!(color(0.5), "text-yellow-500");
        assert_eq!(color(0.7), "text-green-400");
        assert_eq!(color(0.9), "text-green-500");
        assert_eq!(color(1.0), "text-green-500");
    }

    #[test]
    fn test_boundaries_map_to_higher_band() {
        assert_eq!(color(0.2), "text-orange-500");
        assert_eq!(color(0.4), "text-yellow-500");
        assert_eq!(color(0.6), "text-green-400");
        assert_eq!(color(0.8), "text-green-500");
    }

    #[test]
    fn test_example_prediction() {
        // 73% confidence from the RandomForest example falls in [60, 80).
        assert_eq!(color(0.73), "text-green-400");
    }
}
