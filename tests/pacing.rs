mod tests {
    use embassy_time::{Duration, Instant};
    use myrtio_dispatcher::Interval;

    #[test]
    fn test_interval_fires_once_per_period() {
        let mut interval = Interval::new(Duration::from_millis(1000));
        assert!(interval.is_due(Instant::from_millis(0)));
        assert!(!interval.is_due(Instant::from_millis(500)));
        assert!(!interval.is_due(Instant::from_millis(999)));
        assert!(interval.is_due(Instant::from_millis(1000)));
        assert!(!interval.is_due(Instant::from_millis(1999)));
        assert!(interval.is_due(Instant::from_millis(2500)));
    }

    #[test]
    fn test_interval_reset() {
        let mut interval = Interval::new(Duration::from_millis(100));
        assert!(interval.is_due(Instant::from_millis(10)));
        assert!(!interval.is_due(Instant::from_millis(20)));
        interval.reset();
        assert!(interval.is_due(Instant::from_millis(30)));
        assert_eq!(interval.period(), Duration::from_millis(100));
    }
}
