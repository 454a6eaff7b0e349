// Host-side tests for the scroll-to-section table.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod sections {
        include!("../src/core/sections.rs");
    }
}

use site::sections::*;

const fn section(id: &'static str, start: f32, end: f32) -> Section {
    Section {
        id,
        start,
        end,
        side: Side::Left,
        title: id,
        message: "",
        tips: &[],
        action: None,
    }
}

static GAPPY: &[Section] = &[section("a", 0.0, 100.0), section("b", 200.0, 300.0)];
static OVERLAPPING: &[Section] = &[section("first", 0.0, 150.0), section("second", 100.0, 300.0)];

#[test]
fn every_offset_in_a_range_yields_that_section() {
    for s in SECTIONS {
        let mut y = s.start;
        while y < s.end {
            let found = find_section(SECTIONS, y).expect("offset inside a range");
            assert_eq!(found.id, s.id, "offset {y}");
            assert_eq!(found.title, s.title);
            assert_eq!(found.message, s.message);
            assert_eq!(found.tips, s.tips);
            y += 37.0;
        }
        let last = find_section(SECTIONS, s.end - 0.5).unwrap();
        assert_eq!(last.id, s.id);
    }
}

#[test]
fn adjacent_sections_share_boundaries() {
    for pair in SECTIONS.windows(2) {
        assert_eq!(pair[0].end, pair[1].start, "{} -> {}", pair[0].id, pair[1].id);
    }
    assert_eq!(validate_layout(SECTIONS), Ok(()));
}

#[test]
fn boundary_offset_belongs_to_the_next_section() {
    assert_eq!(find_section(SECTIONS, 599.9).unwrap().id, "hero");
    assert_eq!(find_section(SECTIONS, 600.0).unwrap().id, "stats");
    assert_eq!(find_section(SECTIONS, 4000.0).unwrap().id, "cta");
}

#[test]
fn landing_sections_match_the_page_copy() {
    let hero = find_section(SECTIONS, 300.0).unwrap();
    assert_eq!(hero.id, "hero");
    assert_eq!(hero.title, "Welcome to SHCC! 👋");
    assert_eq!(hero.tips.len(), 3);
    assert_eq!(hero.side, Side::Right);

    let stats = find_section(SECTIONS, 800.0).unwrap();
    assert_eq!(stats.id, "stats");
    assert_eq!(stats.tips.len(), 4);
    assert_eq!(stats.side, Side::Left);
}

#[test]
fn actions_name_their_side_effects() {
    let inst = find_section(SECTIONS, 1500.0).unwrap();
    let action = inst.action.expect("institutions has an action");
    assert_eq!(action.label, "Explore Institutions");
    assert_eq!(action.target, ActionTarget::ScrollTo("institutions"));

    let cta = find_section(SECTIONS, 5000.0).unwrap();
    assert_eq!(cta.action.unwrap().target, ActionTarget::Navigate("#contact"));

    assert!(find_section(SECTIONS, 100.0).unwrap().action.is_none());
}

#[test]
fn offsets_outside_every_range_do_not_match() {
    assert!(find_section(SECTIONS, -1.0).is_none());
    assert!(find_section(SECTIONS, 10_000.0).is_none());
    assert!(find_section(SECTIONS, f32::NAN).is_none());
}

#[test]
fn clamp_nearest_resolves_unmatched_offsets() {
    let p = UnmatchedPolicy::ClampNearest;
    assert_eq!(resolve_section(SECTIONS, -50.0, p).unwrap().id, "hero");
    assert_eq!(resolve_section(SECTIONS, 25_000.0, p).unwrap().id, "cta");
    assert_eq!(resolve_section(GAPPY, 120.0, p).unwrap().id, "a");
    assert_eq!(resolve_section(GAPPY, 190.0, p).unwrap().id, "b");
    assert!(resolve_section(SECTIONS, f32::NAN, p).is_none());
}

#[test]
fn retain_last_leaves_unmatched_offsets_unresolved() {
    let p = UnmatchedPolicy::RetainLast;
    assert!(resolve_section(GAPPY, 150.0, p).is_none());
    assert_eq!(resolve_section(GAPPY, 250.0, p).unwrap().id, "b");
}

#[test]
fn overlapping_ranges_prefer_list_order() {
    assert_eq!(find_section(OVERLAPPING, 120.0).unwrap().id, "first");
    assert_eq!(find_index(OVERLAPPING, 200.0), Some(1));
}

#[test]
fn validate_layout_reports_each_defect() {
    assert_eq!(validate_layout(&[]), Err(LayoutError::Empty));
    assert!(matches!(validate_layout(GAPPY), Err(LayoutError::Gap { before: "a", after: "b", .. })));
    assert!(matches!(
        validate_layout(OVERLAPPING),
        Err(LayoutError::Overlap { before: "first", .. })
    ));
    assert!(matches!(
        validate_layout(&[section("x", 10.0, 10.0)]),
        Err(LayoutError::EmptyRange { id: "x", .. })
    ));
    assert_eq!(
        validate_layout(&[section("x", 0.0, 10.0), section("x", 10.0, 20.0)]),
        Err(LayoutError::DuplicateId("x"))
    );
}

#[test]
fn layout_errors_render_readably() {
    let err = validate_layout(GAPPY).unwrap_err();
    assert_eq!(err.to_string(), "gap between `a` (ends at 100) and `b` (starts at 200)");
}
