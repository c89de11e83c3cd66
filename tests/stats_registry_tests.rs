/// Integration tests for #[memoize] statistics registration

#[cfg(feature = "stats")]
#[cfg(test)]
mod tests {
    use enclosure::{memoize, stats_registry};
    use serial_test::serial;

    #[memoize(name = "registry_custom_cache")]
    fn with_custom_name(x: i32) -> i32 {
        x * 2
    }

    #[memoize]
    fn registry_default_name(x: i32) -> i32 {
        x * 3
    }

    #[test]
    #[serial]
    fn test_names_are_registered_on_first_call() {
        with_custom_name(1);
        registry_default_name(1);

        let registered = stats_registry::list();
        assert!(registered.contains(&"registry_custom_cache".to_string()));
        assert!(registered.contains(&"registry_default_name".to_string()));
        assert!(!registered.contains(&"with_custom_name".to_string()));
    }

    #[test]
    #[serial]
    fn test_hits_and_misses_are_counted() {
        with_custom_name(500);
        stats_registry::reset("registry_custom_cache");

        with_custom_name(501);
        with_custom_name(501);
        with_custom_name(501);
        with_custom_name(502);

        let stats = stats_registry::get("registry_custom_cache").unwrap();
        assert_eq!(stats.misses(), 2);
        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.total_accesses(), 4);
        assert!((stats.hit_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_reset_zeroes_live_counters() {
        registry_default_name(7);
        registry_default_name(7);
        assert!(stats_registry::reset("registry_default_name"));

        let stats = stats_registry::get_ref("registry_default_name").unwrap();
        assert_eq!(stats.total_accesses(), 0);

        registry_default_name(7);
        assert_eq!(stats.hits(), 1);
    }

    #[test]
    #[serial]
    fn test_unknown_name() {
        assert!(stats_registry::get("registry_no_such_cache").is_none());
        assert!(!stats_registry::reset("registry_no_such_cache"));
    }
}
