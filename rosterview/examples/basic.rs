// Example: filter a roster and page through it with wheel deltas.
use rosterview::{
    Choice, Developer, FilterSpec, RosterView, SourceSet, ViewportOptions, compute_visible_slice,
};

fn main() {
    let domains = ["3D", "Ajax", "Algorithm", "Amp"];
    let rows: Vec<Developer> = (1..=999u64)
        .map(|i| {
            let domain = domains[i as usize % domains.len()];
            Developer::new(i, format!("Developer {i}"), domain, None, (i % 100) as u32 + 1)
        })
        .collect();
    let source = SourceSet::new(rows).expect("ids are unique");

    let mut view = RosterView::with_source(ViewportOptions::new(40, 15), source);
    println!("filtered={} range={:?}", view.filtered_len(), view.visible_range());

    view.scroll(40 * 100, true);
    view.for_each_visible_row(|row| {
        if row.local_index == 0 {
            println!("top row: #{} {} at y={}", row.index, row.developer.name, row.y);
        }
    });

    view.apply_filter(
        FilterSpec::new()
            .with_domain(Choice::only("Amp"))
            .with_name("developer 9"),
    );
    println!(
        "after filter: filtered={} offset={} first={:?}",
        view.filtered_len(),
        view.scroll_offset(),
        view.filtered_get(0).map(|d| &d.name)
    );
    println!("domains={:?}", view.domain_distribution());

    // The stage function also works on plain slices.
    let data: Vec<u32> = (0..5).collect();
    let (start, slice) = compute_visible_slice(&data, 80, 40, 3);
    println!("start={start} slice={slice:?}");
}
