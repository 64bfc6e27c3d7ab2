#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::time::{WeekInterval, WeekPoint};
    use proptest::prelude::*;

    fn interval(text: &str) -> WeekInterval {
        text.parse().unwrap()
    }

    #[test]
    fn test_display() {
        let i = WeekInterval::new(
            WeekPoint::new(1, 9, 0).unwrap(),
            WeekPoint::new(1, 16, 30).unwrap(),
        );
        assert_eq!(i.to_string(), "1d09:00-1d16:30");
        assert_eq!(i.time_string(), "09:00-16:30");
    }

    #[test]
    fn test_new_keeps_endpoints_verbatim() {
        let start = WeekPoint::new(6, 22, 0).unwrap();
        let end = WeekPoint::new(0, 2, 0).unwrap();
        let i = WeekInterval::new(start, end);
        assert_eq!(i.start(), start);
        assert_eq!(i.end(), end);
        assert!(i.is_wrapping());
    }

    #[test]
    fn test_from_str() {
        let i = interval("2d08:00-2d12:30");
        assert_eq!(i.start(), WeekPoint::new(2, 8, 0).unwrap());
        assert_eq!(i.end(), WeekPoint::new(2, 12, 30).unwrap());
        assert!(!i.is_wrapping());
    }

    #[test]
    fn test_from_str_rejects_bad_shapes() {
        assert!(matches!(
            "2d08:00".parse::<WeekInterval>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!(matches!(
            "2d08:00-2d09:00-2d10:00".parse::<WeekInterval>(),
            Err(Error::InvalidFormat(_))
        ));
        assert!("2d08:00-9d10:00".parse::<WeekInterval>().is_err());
    }

    #[test]
    fn test_is_within_any_match() {
        let i = interval("1d09:00-1d16:30");
        let allowed = vec![interval("1d08:00-1d17:00"), interval("2d10:00-2d15:00")];
        assert!(i.is_within_any(&allowed));
    }

    #[test]
    fn test_is_within_any_no_match() {
        let i = interval("1d09:00-1d16:30");
        let allowed = vec![interval("2d08:00-2d17:00"), interval("3d10:00-3d15:00")];
        assert!(!i.is_within_any(&allowed));
    }

    #[test]
    fn test_is_within_any_empty() {
        let i = interval("1d09:00-1d16:30");
        assert!(!i.is_within_any(&Vec::<WeekInterval>::new()));
    }

    #[test]
    fn test_is_within_inclusive_bounds() {
        let r = interval("1d08:00-1d17:00");
        assert!(r.is_within(&r));
        assert!(!interval("1d07:59-1d17:00").is_within(&r));
        assert!(!interval("1d08:00-1d17:01").is_within(&r));
    }

    #[test]
    fn test_is_within_spans_days() {
        let r = interval("0d00:00-6d23:59");
        assert!(interval("2d22:00-3d02:00").is_within(&r));
    }

    #[test]
    fn test_wrapping_interval_compares_raw_endpoints() {
        let wrapping = interval("6d22:00-0d02:00");

        // Both endpoints fall inside the whole week taken separately.
        let whole_week = interval("0d00:00-6d23:59");
        assert!(wrapping.is_within(&whole_week));
        assert!(wrapping.is_within_any(&[whole_week]));

        // Sunday evening does not cover the Monday end.
        let sunday_evening = interval("6d20:00-6d23:59");
        assert!(!wrapping.is_within(&sunday_evening));
        assert!(!wrapping.is_within_any(&[sunday_evening]));
    }

    #[test]
    fn test_serde_uses_string_form() {
        let i = interval("1d08:00-1d12:00");
        let json = serde_json::to_string(&vec![i]).unwrap();
        assert_eq!(json, r#"["1d08:00-1d12:00"]"#);

        let back: Vec<WeekInterval> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![i]);
    }

    fn any_point() -> impl Strategy<Value = WeekPoint> {
        (0u32..7, 0u32..24, 0u32..60).prop_map(|(d, h, m)| WeekPoint::new(d, h, m).unwrap())
    }

    proptest! {
        #[test]
        fn prop_within_containing_member(
            a in any_point(), b in any_point(), c in any_point(), d in any_point(),
            other in any_point(),
        ) {
            // Sort four points so that [p0, p3] contains [p1, p2].
            let mut pts = [a, b, c, d];
            pts.sort();
            let inner = WeekInterval::new(pts[1], pts[2]);
            let outer = WeekInterval::new(pts[0], pts[3]);
            let unrelated = WeekInterval::new(other, other);
            prop_assert!(inner.is_within_any(&[unrelated, outer]));
        }

        #[test]
        fn prop_empty_set_never_contains(a in any_point(), b in any_point()) {
            let i = WeekInterval::new(a, b);
            prop_assert!(!i.is_within_any(std::iter::empty()));
        }
    }
}
