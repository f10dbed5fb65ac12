use cut_ranges::{BoundType, Range, RangeError, SetOperation};

fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .is_test(true)
        .try_init();
}

#[test]
fn closed_contains() {
    init_logger();

    let range = Range::closed(1, 10);
    assert!(range.contains(&5));
    assert!(!range.contains(&15));
    assert!(range.contains(&1));
    assert!(range.contains(&10));
}

#[test]
fn empty_ranges() {
    init_logger();

    let range = Range::closed_open(4, 4);
    assert!(range.is_empty());
    assert!(!range.contains(&3));
    assert!(!range.contains(&4));
    assert!(!range.contains(&5));
    assert_eq!(range.lower_endpoint(), Some(&4));
    assert_eq!(range.lower_bound_type(), BoundType::Closed);
    assert_eq!(range.upper_endpoint(), Some(&4));
    assert_eq!(range.upper_bound_type(), BoundType::Open);
    assert_eq!(range.to_string(), "[4..4)");

    let range = Range::open_closed(4, 4);
    assert!(range.is_empty());
    assert!(!range.contains(&4));
    assert_eq!(range.lower_bound_type(), BoundType::Open);
    assert_eq!(range.upper_bound_type(), BoundType::Closed);
    assert_eq!(range.to_string(), "(4..4]");

    // Same contents, different representation.
    assert_ne!(Range::closed_open(3, 3), Range::open_closed(3, 3));
    assert_ne!(Range::open_closed(3, 3), Range::open_closed(4, 4));
    assert_ne!(Range::open(1, 4), Range::closed(2, 3));
}

#[test]
fn invalid_construction() {
    init_logger();

    let err = Range::try_open(3, 3).unwrap_err();
    assert!(matches!(err, RangeError::InvalidConstruction { .. }));
    assert_eq!(err.to_string(), "invalid range: (3..3)");
    assert!(Range::open(3, 3).is_invalid());

    assert!(Range::open(10, 5).is_invalid());
    assert_eq!(
        Range::try_closed(10, 5).unwrap_err().to_string(),
        "invalid range: [10..5]"
    );
}

#[test]
fn is_connected() {
    init_logger();

    let cases = [
        (Range::closed(3, 5), Range::open(5, 6), true),
        (Range::closed(3, 5), Range::closed(5, 6), true),
        (Range::closed(5, 6), Range::closed(3, 5), true),
        (Range::closed(3, 5), Range::open_closed(5, 5), true),
        (Range::open(3, 5), Range::closed(5, 6), true),
        (Range::closed(3, 7), Range::open(6, 8), true),
        (Range::open(3, 7), Range::closed(5, 6), true),
        (Range::closed(3, 5), Range::closed(7, 8), false),
        (Range::closed(3, 5), Range::closed_open(7, 7), false),
    ];

    for (a, b, expected) in cases {
        assert_eq!(a.is_connected(&b), expected, "{a} and {b}");
        assert_eq!(b.is_connected(&a), expected, "{b} and {a}");
    }
}

#[test]
fn intersection_of_empty() {
    init_logger();

    let range = Range::closed_open(3, 3);
    assert_eq!(range.try_intersection(&range).unwrap(), range);

    let err = range.try_intersection(&Range::open(3, 5)).unwrap_err();
    assert!(err.is_disconnected_ranges());
    assert!(err.to_string().contains("disconnected"));
    assert!(range.intersection(&Range::open(3, 5)).is_invalid());
    assert!(range.intersection(&Range::closed(0, 2)).is_invalid());
}

#[test]
fn intersection_de_facto_empty() {
    init_logger();

    let range = Range::open(3, 4);
    assert_eq!(range.intersection(&range), range);
    assert_eq!(
        range.intersection(&Range::at_most(3)),
        Range::open_closed(3, 3)
    );
    assert_eq!(
        range.intersection(&Range::at_least(4)),
        Range::closed_open(4, 4)
    );
    assert!(range.intersection(&Range::less_than(3)).is_invalid());
    assert!(range.intersection(&Range::greater_than(4)).is_invalid());

    let range = Range::closed(3, 4);
    assert_eq!(
        range.intersection(&Range::greater_than(4)),
        Range::open_closed(4, 4)
    );
}

#[test]
fn intersection_of_singleton() {
    init_logger();

    let range = Range::singleton(3);
    assert_eq!(range.intersection(&range), range);
    assert_eq!(range.intersection(&Range::at_most(4)), range);
    assert_eq!(range.intersection(&Range::at_most(3)), range);
    assert_eq!(range.intersection(&Range::at_least(3)), range);
    assert_eq!(range.intersection(&Range::at_least(2)), range);
    assert_eq!(
        range.intersection(&Range::less_than(3)),
        Range::closed_open(3, 3)
    );
    assert_eq!(
        range.intersection(&Range::greater_than(3)),
        Range::open_closed(3, 3)
    );
    assert!(range.intersection(&Range::at_least(4)).is_invalid());
    assert!(range.intersection(&Range::at_most(2)).is_invalid());
}

#[test]
fn intersection() {
    init_logger();

    let range = Range::closed(4, 8);

    // separate below
    let err = range.try_intersection(&Range::closed(0, 2)).unwrap_err();
    assert!(matches!(
        err,
        RangeError::DisconnectedRanges {
            operation: SetOperation::Intersection,
            ..
        }
    ));
    assert_eq!(
        err.to_string(),
        "intersection is undefined for disconnected ranges [4..8] and [0..2]"
    );

    // adjacent below
    assert_eq!(
        range.intersection(&Range::closed_open(2, 4)),
        Range::closed_open(4, 4)
    );
    // overlap below
    assert_eq!(
        range.intersection(&Range::closed(2, 6)),
        Range::closed(4, 6)
    );
    // enclosed with same start
    assert_eq!(
        range.intersection(&Range::closed(4, 6)),
        Range::closed(4, 6)
    );
    // enclosed, interior
    assert_eq!(
        range.intersection(&Range::closed(5, 7)),
        Range::closed(5, 7)
    );
    // enclosed with same end
    assert_eq!(
        range.intersection(&Range::closed(6, 8)),
        Range::closed(6, 8)
    );
    // equal
    assert_eq!(range.intersection(&range), range);
    // enclosing with same start
    assert_eq!(range.intersection(&Range::closed(4, 10)), range);
    // enclosing with same end
    assert_eq!(range.intersection(&Range::closed(2, 8)), range);
    // enclosing, exterior
    assert_eq!(range.intersection(&Range::closed(2, 10)), range);
    // overlap above
    assert_eq!(
        range.intersection(&Range::closed(6, 10)),
        Range::closed(6, 8)
    );
    // adjacent above
    assert_eq!(
        range.intersection(&Range::open_closed(8, 10)),
        Range::open_closed(8, 8)
    );
    // separate above
    assert!(range.intersection(&Range::closed(10, 12)).is_invalid());

    assert_eq!(
        Range::closed(1, 10).intersection(&Range::open(0, 20)),
        Range::closed(1, 10)
    );
    assert_eq!(range.intersection(&Range::all()), range);
}

#[test]
fn gap_of_overlapping() {
    init_logger();

    let range = Range::closed_open(3, 5);
    for other in [Range::closed(4, 6), Range::closed(2, 4), Range::closed(2, 3)] {
        let err = range.try_gap(&other).unwrap_err();
        assert!(matches!(
            err,
            RangeError::DisconnectedRanges {
                operation: SetOperation::Gap,
                ..
            }
        ));
        assert!(range.gap(&other).is_invalid());
    }

    assert_eq!(
        range.try_gap(&Range::closed(4, 6)).unwrap_err().to_string(),
        "gap is undefined for overlapping ranges [3..5) and [4..6]"
    );
}

#[test]
fn gap_of_unbounded() {
    init_logger();

    assert!(Range::at_least(1).try_gap(&Range::at_least(2)).is_err());
    assert!(Range::at_least(2).try_gap(&Range::at_least(1)).is_err());
    assert!(Range::at_most(1).try_gap(&Range::at_most(2)).is_err());
    assert!(Range::at_most(2).try_gap(&Range::at_most(1)).is_err());
}

#[test]
fn gap_of_adjacent_is_empty() {
    init_logger();

    let range = Range::open(3, 4);
    assert_eq!(range.gap(&Range::at_least(4)), Range::closed_open(4, 4));
    assert_eq!(range.gap(&Range::at_most(3)), Range::open_closed(3, 3));
    assert_eq!(
        Range::closed_open(1, 5).gap(&Range::closed_open(5, 7)),
        Range::closed_open(5, 5)
    );
}

#[test]
fn gap() {
    init_logger();

    let open = Range::open(4, 8);
    let closed = Range::closed(4, 8);

    // open end, open start
    assert_eq!(Range::less_than(2).gap(&open), Range::closed(2, 4));
    assert_eq!(open.gap(&Range::less_than(2)), Range::closed(2, 4));
    // closed end, open start
    assert_eq!(Range::at_most(2).gap(&open), Range::open_closed(2, 4));
    assert_eq!(open.gap(&Range::at_most(2)), Range::open_closed(2, 4));
    // open end, closed start
    assert_eq!(Range::less_than(2).gap(&closed), Range::closed_open(2, 4));
    assert_eq!(closed.gap(&Range::less_than(2)), Range::closed_open(2, 4));
    // closed end, closed start
    assert_eq!(Range::at_most(2).gap(&closed), Range::open(2, 4));
    assert_eq!(closed.gap(&Range::at_most(2)), Range::open(2, 4));

    assert_eq!(
        Range::closed(1, 5).gap(&Range::open(7, 10)),
        Range::open_closed(5, 7)
    );
}

#[test]
fn span() {
    init_logger();

    let range = Range::closed(4, 8);

    // separate below
    assert_eq!(range.span(&Range::closed(0, 2)), Range::closed(0, 8));
    assert_eq!(range.span(&Range::at_most(2)), Range::at_most(8));
    // adjacent below
    assert_eq!(range.span(&Range::closed_open(2, 4)), Range::closed(2, 8));
    assert_eq!(range.span(&Range::less_than(4)), Range::at_most(8));
    // overlap below
    assert_eq!(range.span(&Range::closed(2, 6)), Range::closed(2, 8));
    assert_eq!(range.span(&Range::at_most(6)), Range::at_most(8));
    // enclosed
    assert_eq!(range.span(&Range::closed(4, 6)), range);
    assert_eq!(range.span(&Range::closed(5, 7)), range);
    assert_eq!(range.span(&Range::closed(6, 8)), range);
    assert_eq!(range.span(&range), range);
    // enclosing
    assert_eq!(range.span(&Range::closed(4, 10)), Range::closed(4, 10));
    assert_eq!(range.span(&Range::at_least(4)), Range::at_least(4));
    assert_eq!(range.span(&Range::closed(2, 8)), Range::closed(2, 8));
    assert_eq!(range.span(&Range::at_most(8)), Range::at_most(8));
    assert_eq!(range.span(&Range::closed(2, 10)), Range::closed(2, 10));
    assert_eq!(range.span(&Range::all()), Range::all());
    // overlap above
    assert_eq!(range.span(&Range::closed(6, 10)), Range::closed(4, 10));
    assert_eq!(range.span(&Range::at_least(6)), Range::at_least(4));
    // adjacent above
    assert_eq!(range.span(&Range::open_closed(8, 10)), Range::closed(4, 10));
    assert_eq!(range.span(&Range::greater_than(8)), Range::at_least(4));
    // separate above
    assert_eq!(range.span(&Range::closed(10, 12)), Range::closed(4, 12));
    assert_eq!(range.span(&Range::at_least(10)), Range::at_least(4));

    assert_eq!(
        Range::at_least(1).span(&Range::at_least(1)),
        Range::at_least(1)
    );
    assert!(Range::closed(1, 3).try_span(&Range::open(5, 7)).is_ok());
}

#[test]
fn equality() {
    init_logger();

    assert_eq!(
        Range::open(1, 5),
        Range::new(1, BoundType::Open, 5, BoundType::Open)
    );
    assert_eq!(Range::greater_than(2), Range::greater_than(2));
    assert_eq!(Range::<i32>::all(), Range::all());
    assert_eq!(Range::up_to(7, BoundType::Closed), Range::at_most(7));
    assert_eq!(Range::down_to(1, BoundType::Open), Range::greater_than(1));
    assert_eq!(
        Range::new(1, BoundType::Closed, 7, BoundType::Open),
        Range::closed_open(1, 7)
    );
}

#[test]
fn display() {
    init_logger();

    assert_eq!(Range::closed_open(4, 8).to_string(), "[4..8)");
    assert_eq!(Range::less_than(5).to_string(), "(-∞..5)");
    assert_eq!(Range::greater_than(5).to_string(), "(5..+∞)");
    assert_eq!(Range::<i32>::all().to_string(), "(-∞..+∞)");
    assert_eq!(Range::at_most(5).to_string(), "(-∞..5]");
    assert_eq!(Range::at_least(5).to_string(), "[5..+∞)");
}

#[test]
fn non_numeric_values() {
    init_logger();

    let range = Range::closed_open("apple", "melon");
    assert!(range.contains(&"banana"));
    assert!(!range.contains(&"melon"));
    assert_eq!(range.to_string(), "[apple..melon)");

    let owned = Range::closed(String::from("a"), String::from("c"));
    assert!(owned.contains_all(["a", "b", "c"].map(String::from)));
    assert_eq!(
        owned.span(&Range::greater_than(String::from("x"))),
        Range::at_least(String::from("a"))
    );
}
