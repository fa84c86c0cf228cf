use rpawogen::pools::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_length_clamps_to_range() {
        assert_eq!(normalize_length(0), 4);
        assert_eq!(normalize_length(1), 4);
        assert_eq!(normalize_length(4), 4);
        assert_eq!(normalize_length(18), 18);
        assert_eq!(normalize_length(256), 256);
        assert_eq!(normalize_length(257), 256);
        assert_eq!(normalize_length(100_000), 256);
    }

    #[test]
    fn test_normalize_length_negative_uses_absolute_value() {
        assert_eq!(normalize_length(-12), 12);
        assert_eq!(normalize_length(-1), 4);
        assert_eq!(normalize_length(-300), 256);
        assert_eq!(normalize_length(i64::MIN), 256);
    }

    #[test]
    fn test_pool_enumeration_order_is_fixed() {
        assert_eq!(
            PoolId::ALL,
            [PoolId::Digits, PoolId::Upper, PoolId::Lower, PoolId::Special]
        );
    }

    #[test]
    fn test_pool_keys() {
        assert_eq!(PoolId::Digits.pool_key(), "charpool.digits");
        assert_eq!(PoolId::Special.enabled_key(), "enabled.special");
        assert_eq!(PoolId::from_pool_key("charpool.upper"), Some(PoolId::Upper));
        assert_eq!(PoolId::from_pool_key("enabled.upper"), None);
        assert_eq!(PoolId::from_pool_key("charpool.emoji"), None);
    }

    #[test]
    fn test_pool_names_parse_back() {
        for id in PoolId::ALL {
            assert_eq!(PoolId::from_name(id.name()), Some(id));
        }
        assert_eq!(PoolId::from_name("UPPERCASE"), Some(PoolId::Upper));
        assert_eq!(PoolId::from_name("unknown"), None);
    }

    #[test]
    fn test_default_pools_are_not_empty() {
        for id in PoolId::ALL {
            let pool = CharPool::default_for(id);
            assert!(!pool.is_empty(), "default pool {} is empty", id.name());
        }
        assert_eq!(CharPool::default_for(PoolId::Digits).len(), 10);
        assert_eq!(CharPool::default_for(PoolId::Upper).len(), 26);
    }

    #[test]
    fn test_charpool_keeps_order_and_duplicates() {
        let pool = CharPool::from_chars("aabc");
        assert_eq!(pool.chars(), &['a', 'a', 'b', 'c']);
        assert_eq!(pool.len(), 4);
        assert!(pool.contains('b'));
        assert!(!pool.contains('z'));
    }

    #[test]
    fn test_empty_charpool_chooses_nothing() {
        let pool = CharPool::from_chars("");
        let mut rng = rand::rngs::OsRng;
        assert!(pool.is_empty());
        assert_eq!(pool.choose(&mut rng), None);
    }

    #[test]
    fn test_is_printable_char() {
        assert!(is_printable_char('a'));
        assert!(is_printable_char('#'));
        assert!(is_printable_char('中'));
        assert!(!is_printable_char('\n'));
        assert!(!is_printable_char('\u{0007}'));
        assert!(!is_printable_char('\u{FFFF}'));
    }
}
