//! FILENAME: core/window-engine/tests/test_windower.rs
//! PURPOSE: Windowing math against row plans produced by the engine.

mod common;

use common::{large_records, Lcg};
use window_engine::{
    visible_range, ExpansionState, GroupIndex, RowPlan, WindowError, DEFAULT_OVERSCAN,
    DEFAULT_ROW_HEIGHT, DEFAULT_VIEWPORT_HEIGHT,
};

#[test]
fn test_top_of_hundred_rows() {
    let window = visible_range(100, 50.0, 500.0, 0.0, 5).unwrap();
    assert_eq!(window.start_index, 0);
    assert_eq!(window.end_index, 15);
}

#[test]
fn test_row_fifty_at_top() {
    let window = visible_range(100, 50.0, 500.0, 2500.0, 5).unwrap();
    assert_eq!(window.start_index, 45);
    assert_eq!(window.end_index, 65);
    assert_eq!(window.total_height, 5000.0);
}

#[test]
fn test_window_over_expanded_plan() {
    let index = GroupIndex::build(large_records(1_000));
    let mut expansion = ExpansionState::new();
    for group in index.groups() {
        expansion.toggle(&group.key);
    }
    let plan = RowPlan::build(&index, &expansion);
    assert_eq!(plan.len(), 6 + 6_000);

    let window = visible_range(
        plan.len(),
        DEFAULT_ROW_HEIGHT,
        DEFAULT_VIEWPORT_HEIGHT,
        100_000.0,
        DEFAULT_OVERSCAN,
    )
    .unwrap();
    // 100_000 / 50 = row 2000 at the top.
    assert_eq!(window.start_index, 1995);
    assert_eq!(window.end_index, 2015);
    for row in &window.rows {
        assert!(plan.get(row.index).is_some());
        assert_eq!(row.start, row.index as f64 * DEFAULT_ROW_HEIGHT);
    }
}

#[test]
fn test_containment_random_inputs() {
    let mut rng = Lcg::new(2024);
    for _ in 0..5_000 {
        let total_rows = rng.below(10_000);
        let row_height = 1.0 + rng.below(200) as f64 / 3.0;
        let viewport_height = rng.below(3_000) as f64;
        let scroll_offset = rng.below(1_000_000) as f64 / 2.0;
        let overscan = rng.below(20);

        let window =
            visible_range(total_rows, row_height, viewport_height, scroll_offset, overscan)
                .unwrap();
        assert!(window.start_index <= window.end_index);
        assert!(window.end_index <= total_rows);
        assert_eq!(window.total_height, total_rows as f64 * row_height);
    }
}

#[test]
fn test_contract_violations_fail_fast() {
    let err = visible_range(10, f64::NAN, 500.0, 0.0, 5).unwrap_err();
    assert!(matches!(err, WindowError::InvalidRowHeight(_)));
    assert!(err.to_string().contains("Row height"));

    let err = visible_range(10, 50.0, 500.0, f64::INFINITY, 5).unwrap_err();
    assert!(matches!(err, WindowError::InvalidScrollOffset(_)));
}
