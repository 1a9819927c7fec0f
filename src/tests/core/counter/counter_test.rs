#[cfg(test)]
mod tests {
    use crate::core::counter::{Counter, Inner};
    use tracing_test::traced_test;

    #[test]
    fn test_increment() {
        let mut counter = Counter::new();
        assert_eq!(counter.increment(), 0);
        assert_eq!(counter.value(), 1);

        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.value(), 2);
    }

    #[test]
    fn test_increment_returns_prior_count() {
        for n in 0..50 {
            let mut counter = Counter::new();
            for _ in 0..n {
                counter.increment();
            }
            assert_eq!(counter.increment(), n);
            assert_eq!(counter.value(), n + 1);
        }
    }

    #[test]
    fn test_new() {
        let counter = Counter::new();
        assert_eq!(counter.value(), 0);
        assert!(counter.inner().is_none());
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_with_inner() {
        let counter = Counter::with_inner(Inner::new(1.5));
        assert_eq!(counter.value(), 0);
        assert_eq!(counter.inner(), Some(&Inner::new(1.5)));
    }

    #[test]
    fn test_inner_does_not_touch_value() {
        let mut counter = Counter::with_inner(Inner::new(1.0));
        counter.increment();
        assert_eq!(counter.inner().map(Inner::lines), Some(vec!["1", "2"]));
        assert_eq!(counter.value(), 1);
    }

    #[test]
    fn test_increment_wraps_at_max() {
        let mut counter = Counter::with_value(i32::MAX);
        assert_eq!(counter.increment(), i32::MAX);
        assert_eq!(counter.value(), i32::MIN);
        assert_eq!(counter.increment(), i32::MIN);
    }

    #[traced_test]
    #[test]
    fn test_increment_logs() {
        let mut counter = Counter::new();
        counter.increment();
        assert!(logs_contain("Counter incremented to: 1"));
    }
}
