use crate::*;

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_u64(&mut self, start: u64, end_exclusive: u64) -> u64 {
        debug_assert!(start < end_exclusive);
        let span = end_exclusive - start;
        start + (self.next_u64() % span)
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        self.gen_range_u64(start as u64, end_exclusive as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() & 1) == 1
    }

    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.gen_range_usize(0, items.len())]
    }
}

const DOMAINS: [&str; 4] = ["3D", "Ajax", "Algorithm", "Amp"];
const NATIONS: [&str; 5] = ["China", "America", "Japan", "England", "Russia"];
const SYLLABLES: [&str; 8] = ["al", "Bo", "ch", "AR", "li", "e", "Da", "vid"];

fn random_roster(rng: &mut Lcg, len: usize) -> Vec<Developer> {
    (0..len)
        .map(|i| {
            let mut name = String::new();
            for _ in 0..rng.gen_range_usize(1, 4) {
                name.push_str(*rng.pick(&SYLLABLES));
            }
            let nationality = if rng.gen_range_usize(0, 6) == 0 {
                None
            } else {
                Some(Category::from(*rng.pick(&NATIONS)))
            };
            Developer::new(
                i as u64 + 1,
                name,
                *rng.pick(&DOMAINS),
                nationality,
                rng.gen_range_u64(1, 101) as u32,
            )
        })
        .collect()
}

fn random_spec(rng: &mut Lcg) -> FilterSpec {
    let domain = if rng.gen_bool() {
        Choice::All
    } else {
        Choice::only(*rng.pick(&DOMAINS))
    };
    let nationality = if rng.gen_bool() {
        Choice::All
    } else {
        Choice::only(*rng.pick(&NATIONS))
    };
    let name = match rng.gen_range_usize(0, 3) {
        0 => String::new(),
        _ => String::from(*rng.pick(&SYLLABLES)),
    };
    FilterSpec::new()
        .with_domain(domain)
        .with_nationality(nationality)
        .with_name(name)
}

fn expected_matches(spec: &FilterSpec, d: &Developer) -> bool {
    let domain_ok = match &spec.domain {
        Choice::All => true,
        Choice::Only(c) => d.domain == *c,
    };
    let nation_ok = match &spec.nationality {
        Choice::All => true,
        Choice::Only(c) => d.nationality.as_ref() == Some(c),
    };
    let name_ok = d
        .name
        .to_lowercase()
        .contains(spec.name.to_lowercase().as_str());
    domain_ok && nation_ok && name_ok
}

fn names(rows: &[&Developer]) -> Vec<String> {
    rows.iter().map(|d| d.name.clone()).collect()
}

fn sample() -> SourceSet {
    let rows = ["Alice", "Bob", "Charlie", "David", "Eva"]
        .iter()
        .enumerate()
        .map(|(i, n)| Developer::new(i as u64 + 1, *n, "3D", Some("USA".into()), 50))
        .collect();
    SourceSet::new(rows).unwrap()
}

#[test]
fn default_spec_matches_everything() {
    let mut rng = Lcg::new(7);
    let roster = random_roster(&mut rng, 64);
    let spec = FilterSpec::default();
    assert!(spec.is_unconstrained());
    assert_eq!(filter(&roster, &spec), roster);
    assert_eq!(filter_indices(&roster, &spec), (0..64).collect::<Vec<_>>());
}

#[test]
fn filter_matches_reference_and_preserves_order() {
    let mut rng = Lcg::new(0x0DE5);
    for _ in 0..200 {
        let len = rng.gen_range_usize(0, 80);
        let roster = random_roster(&mut rng, len);
        let spec = random_spec(&mut rng);

        let got = filter(&roster, &spec);
        let expected: Vec<Developer> = roster
            .iter()
            .filter(|d| expected_matches(&spec, d))
            .cloned()
            .collect();
        assert_eq!(got, expected, "spec={spec:?}");

        let idx = filter_indices(&roster, &spec);
        assert!(idx.windows(2).all(|w| w[0] < w[1]));
        let by_index: Vec<Developer> = idx.iter().map(|&i| roster[i].clone()).collect();
        assert_eq!(by_index, got);
    }
}

#[test]
fn filter_is_idempotent() {
    let mut rng = Lcg::new(99);
    for _ in 0..100 {
        let roster = random_roster(&mut rng, 50);
        let spec = random_spec(&mut rng);
        let once = filter(&roster, &spec);
        let twice = filter(&once, &spec);
        assert_eq!(once, twice);
    }
}

#[test]
fn name_pattern_is_case_insensitive() {
    let s = sample();
    let spec = FilterSpec::new().with_name("A");
    let got: Vec<String> = filter(s.records(), &spec)
        .into_iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(got, ["Alice", "Charlie", "David", "Eva"]);

    let spec = FilterSpec::new().with_name("ARL");
    assert_eq!(filter(s.records(), &spec).len(), 1);
}

#[test]
fn name_pattern_folds_non_ascii() {
    let roster = vec![
        Developer::new(1, "ÉMILE", "3D", None, 1),
        Developer::new(2, "Zoë", "3D", None, 1),
        Developer::new(3, "emile", "3D", None, 1),
    ];
    let got = filter_indices(&roster, &FilterSpec::new().with_name("émi"));
    assert_eq!(got, [0]);
    let got = filter_indices(&roster, &FilterSpec::new().with_name("ZOË"));
    assert_eq!(got, [1]);
}

#[test]
fn unknown_nationality_only_matches_all() {
    let roster = vec![
        Developer::new(1, "a", "3D", None, 1),
        Developer::new(2, "b", "3D", Some("Japan".into()), 1),
    ];
    let all = FilterSpec::new();
    assert_eq!(filter_indices(&roster, &all), [0, 1]);
    let japan = FilterSpec::new().with_nationality(Choice::only("Japan"));
    assert_eq!(filter_indices(&roster, &japan), [1]);
}

#[test]
fn filter_excluding_everything_is_empty_not_error() {
    let s = sample();
    let spec = FilterSpec::new().with_domain(Choice::only("Amp"));
    assert!(filter(s.records(), &spec).is_empty());
    assert!(filter(&[], &FilterSpec::new().with_name("x")).is_empty());
}

#[test]
fn category_equality_is_exact() {
    let roster = vec![Developer::new(1, "a", "Ajax", None, 1)];
    assert!(filter(&roster, &FilterSpec::new().with_domain(Choice::only("ajax"))).is_empty());
    assert_eq!(
        filter(&roster, &FilterSpec::new().with_domain(Choice::only("Ajax"))).len(),
        1
    );
}

#[test]
fn source_set_rejects_duplicate_ids() {
    let rows = vec![
        Developer::new(5, "a", "3D", None, 1),
        Developer::new(6, "b", "3D", None, 1),
        Developer::new(5, "c", "3D", None, 1),
    ];
    let err = SourceSet::new(rows).unwrap_err();
    assert_eq!(
        err,
        DuplicateId {
            id: DeveloperId(5),
            first: 0,
            second: 2
        }
    );
    assert_eq!(
        format!("{err}"),
        "duplicate developer id 5 at positions 0 and 2"
    );
}

#[test]
fn compute_visible_slice_basic() {
    let data: Vec<u32> = (0..5).collect();
    assert_eq!(compute_visible_slice(&data, 0, 40, 3), (0, &data[0..3]));
    assert_eq!(compute_visible_slice(&data, 80, 40, 3), (2, &data[2..5]));
    assert_eq!(compute_visible_slice(&data, 119, 40, 3), (2, &data[2..5]));
    assert_eq!(compute_visible_slice(&data, 120, 40, 3), (3, &data[3..5]));
}

#[test]
fn compute_visible_slice_clamps_stale_offsets() {
    let data: Vec<u32> = (0..5).collect();
    // Offset from a longer sequence: start clamps to the last row.
    assert_eq!(compute_visible_slice(&data, 40 * 100, 40, 3), (4, &data[4..5]));
    assert_eq!(compute_visible_slice(&data, u64::MAX, 40, 3), (4, &data[4..5]));

    let empty: [u32; 0] = [];
    let (start, slice) = compute_visible_slice(&empty, 400, 40, 3);
    assert_eq!(start, 0);
    assert!(slice.is_empty());

    // Zero row height is treated as 1.
    assert_eq!(compute_visible_slice(&data, 2, 0, 2), (2, &data[2..4]));
}

#[test]
fn compute_visible_slice_bounds_hold_for_random_inputs() {
    let mut rng = Lcg::new(42);
    for _ in 0..2000 {
        let len = rng.gen_range_usize(0, 50);
        let data: Vec<usize> = (0..len).collect();
        let row_height = rng.gen_range_u64(1, 64) as u32;
        let rows = rng.gen_range_usize(1, 20);
        let offset = if rng.gen_bool() {
            rng.gen_range_u64(0, 4000)
        } else {
            rng.next_u64()
        };

        let (start, slice) = compute_visible_slice(&data, offset, row_height, rows);
        let end = start + slice.len();
        assert!(start <= end);
        assert!(end <= len);
        assert!(slice.len() <= rows);
        if len > 0 {
            assert!(start < len);
            assert!(!slice.is_empty());
            assert_eq!(slice[0], start);
        }
    }
}

#[test]
fn viewport_max_offset_and_clamp() {
    let mut v = Viewport::new(ViewportOptions::new(40, 3));
    assert_eq!(v.max_scroll_offset(), 0);
    v.set_count(5);
    assert_eq!(v.max_scroll_offset(), 80);
    assert_eq!(v.total_size(), 200);
    assert_eq!(v.clamp_scroll_offset(1000), 80);

    v.set_count(2);
    assert_eq!(v.max_scroll_offset(), 0);
}

#[test]
fn scroll_converges_to_bounds() {
    let mut v = Viewport::new(ViewportOptions::new(40, 15));
    v.set_count(999);
    let max = (999 - 15) * 40;
    assert_eq!(v.max_scroll_offset(), max);

    for _ in 0..10 {
        v.apply_scroll_delta(i64::MAX / 3, true);
        assert!(v.scroll_offset() <= max);
    }
    assert_eq!(v.scroll_offset(), max);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Forward));

    for _ in 0..10 {
        v.apply_scroll_delta(i64::MIN, true);
    }
    assert_eq!(v.scroll_offset(), 0);
    assert_eq!(v.scroll_direction(), Some(ScrollDirection::Backward));
}

#[test]
fn scroll_ignored_when_inactive() {
    let mut v = Viewport::new(ViewportOptions::new(40, 3));
    v.set_count(10);
    assert!(!v.apply_scroll_delta(100, false));
    assert_eq!(v.scroll_offset(), 0);
    assert!(v.apply_scroll_delta(100, true));
    assert_eq!(v.scroll_offset(), 100);
    assert!(!v.apply_scroll_delta(0, true));
}

#[test]
fn scroll_reports_no_change_at_the_edges() {
    let mut v = Viewport::new(ViewportOptions::new(40, 3));
    v.set_count(4);
    assert!(v.apply_scroll_delta(1000, true));
    assert_eq!(v.scroll_offset(), 40);
    assert!(!v.apply_scroll_delta(1000, true));
    assert!(!Viewport::new(ViewportOptions::new(40, 3)).apply_scroll_delta(-5, true));
}

#[test]
fn scroll_offset_stays_in_bounds_for_random_deltas() {
    let mut rng = Lcg::new(1234);
    let mut v = Viewport::new(ViewportOptions::new(17, 6));
    for step in 0..3000 {
        if step % 100 == 0 {
            v.set_count(rng.gen_range_usize(0, 300));
        }
        let magnitude = rng.gen_range_u64(0, 2000) as i64;
        let delta = if rng.gen_bool() { magnitude } else { -magnitude };
        v.apply_scroll_delta(delta, rng.gen_range_usize(0, 4) != 0);
        assert!(v.scroll_offset() <= v.max_scroll_offset());
        let r = v.visible_range();
        assert!(r.start_index <= r.end_index && r.end_index <= v.count());
    }
}

#[test]
fn set_count_reclamps_offset() {
    let mut v = Viewport::new(ViewportOptions::new(10, 2));
    v.set_count(100);
    v.scroll_to_offset(500);
    assert_eq!(v.scroll_offset(), 500);
    v.set_count(10);
    assert_eq!(v.scroll_offset(), 80);
    v.set_count(0);
    assert_eq!(v.scroll_offset(), 0);
    assert!(v.visible_range().is_empty());
}

#[test]
fn scroll_to_index_and_row_positions() {
    let opts = ViewportOptions::new(40, 3).with_header_height(50);
    assert_eq!(opts.table_height(), 170);
    let mut v = Viewport::new(opts);
    v.set_count(10);
    assert_eq!(v.scroll_to_index(4), 160);
    assert_eq!(
        v.visible_range(),
        VisibleRange {
            start_index: 4,
            end_index: 7,
        }
    );
    assert_eq!(v.scroll_to_index(9), 280);
    assert_eq!(v.row_y(0), 50);
    assert_eq!(v.row_y(2), 130);
}

#[test]
fn options_coerce_zero_sizes() {
    let opts = ViewportOptions::new(0, 0);
    assert_eq!(opts.row_height, 1);
    assert_eq!(opts.visible_rows, 1);

    let raw = ViewportOptions {
        row_height: 0,
        header_height: 0,
        visible_rows: 0,
    };
    let v = Viewport::new(raw);
    assert_eq!(v.options().row_height, 1);
    assert_eq!(v.options().visible_rows, 1);
}

#[test]
fn viewport_state_restores_clamped() {
    let mut v = Viewport::new(ViewportOptions::new(40, 3));
    v.set_count(20);
    v.scroll_to_offset(200);
    let snap = v.viewport_state();
    assert_eq!(snap, ViewportState { scroll_offset: 200 });

    let mut w = Viewport::new(ViewportOptions::new(40, 3));
    w.set_count(5);
    w.restore_viewport_state(snap);
    assert_eq!(w.scroll_offset(), 80);
}

#[test]
fn concrete_scenario() {
    let mut view = RosterView::with_source(ViewportOptions::new(40, 3), sample());
    assert_eq!(view.filtered_len(), 5);
    let slice = view.visible_slice();
    assert_eq!(slice.start_index, 0);
    assert_eq!(names(&slice.rows), ["Alice", "Bob", "Charlie"]);

    assert!(view.scroll(80, true));
    assert_eq!(view.scroll_offset(), 80);
    let slice = view.visible_slice();
    assert_eq!(slice.start_index, 2);
    assert_eq!(names(&slice.rows), ["Charlie", "David", "Eva"]);

    view.apply_filter(FilterSpec::new().with_name("a"));
    let filtered: Vec<&str> = view.filtered().map(|d| d.name.as_str()).collect();
    assert_eq!(filtered, ["Alice", "Charlie", "David", "Eva"]);
    let slice = view.visible_slice();
    assert_eq!(slice.start_index, 0);
    assert_eq!(view.scroll_offset(), 0);
    assert_eq!(names(&slice.rows), ["Alice", "Charlie", "David"]);
}

#[test]
fn filter_change_resets_viewport() {
    let mut rng = Lcg::new(5);
    let roster = SourceSet::new(random_roster(&mut rng, 500)).unwrap();
    let mut view = RosterView::with_source(ViewportOptions::new(40, 15), roster);
    for _ in 0..50 {
        view.scroll(rng.gen_range_u64(0, 20_000) as i64, true);
        view.apply_filter(random_spec(&mut rng));
        assert_eq!(view.scroll_offset(), 0);
        assert_eq!(view.visible_range().start_index, 0);
    }
}

#[test]
fn replacing_source_refilters_and_resets() {
    let mut view = RosterView::new(ViewportOptions::new(40, 3));
    assert!(view.is_empty());
    assert!(view.visible_slice().rows.is_empty());

    view.apply_filter(FilterSpec::new().with_name("e"));
    view.replace_source(sample());
    let filtered: Vec<&str> = view.filtered().map(|d| d.name.as_str()).collect();
    assert_eq!(filtered, ["Alice", "Charlie", "Eva"]);

    view.scroll(1000, true);
    view.replace_source(SourceSet::empty());
    assert_eq!(view.scroll_offset(), 0);
    assert!(view.is_empty());
}

#[test]
fn visible_rows_carry_positions() {
    let opts = ViewportOptions::new(40, 3).with_header_height(50);
    let mut view = RosterView::with_source(opts, sample());
    view.scroll(40, true);

    let mut rows = Vec::new();
    view.collect_visible_rows(&mut rows);
    let got: Vec<(usize, usize, u64, &str)> = rows
        .iter()
        .map(|r| (r.index, r.local_index, r.y, r.developer.name.as_str()))
        .collect();
    assert_eq!(
        got,
        [
            (1, 0, 50, "Bob"),
            (2, 1, 90, "Charlie"),
            (3, 2, 130, "David"),
        ]
    );
}

#[test]
fn lookups_by_name_and_id() {
    let mut view = RosterView::with_source(ViewportOptions::default(), sample());
    assert_eq!(view.find_by_name("Charlie").map(|d| d.id), Some(DeveloperId(3)));
    assert!(view.find_by_name("charlie").is_none());

    view.apply_filter(FilterSpec::new().with_name("v"));
    assert_eq!(view.filtered_index_of(DeveloperId(5)), Some(1));
    assert_eq!(view.filtered_index_of(DeveloperId(1)), None);
    // Name lookup ignores the filter.
    assert!(view.find_by_name("Alice").is_some());
    assert_eq!(view.filtered_get(0).map(|d| d.name.as_str()), Some("David"));
    assert!(view.filtered_get(2).is_none());
}

#[test]
fn distributions_count_in_first_seen_order() {
    let roster = vec![
        Developer::new(1, "a", "Amp", Some("China".into()), 1),
        Developer::new(2, "b", "3D", None, 1),
        Developer::new(3, "c", "Amp", Some("China".into()), 1),
        Developer::new(4, "d", "3D", Some("Japan".into()), 1),
        Developer::new(5, "e", "Amp", None, 1),
    ];
    let domains = domain_distribution(&roster);
    assert_eq!(
        domains,
        [
            CategoryCount {
                category: Some("Amp".into()),
                count: 3,
            },
            CategoryCount {
                category: Some("3D".into()),
                count: 2,
            },
        ]
    );
    let nations = nationality_distribution(&roster);
    assert_eq!(
        nations,
        [
            CategoryCount {
                category: Some("China".into()),
                count: 2,
            },
            CategoryCount {
                category: None,
                count: 2,
            },
            CategoryCount {
                category: Some("Japan".into()),
                count: 1,
            },
        ]
    );

    let mut view = RosterView::with_source(
        ViewportOptions::default(),
        SourceSet::new(roster).unwrap(),
    );
    view.apply_filter(FilterSpec::new().with_domain(Choice::only("3D")));
    assert_eq!(
        view.domain_distribution(),
        [CategoryCount {
            category: Some("3D".into()),
            count: 2,
        }]
    );
    assert_eq!(view.nationality_distribution().len(), 2);
}
