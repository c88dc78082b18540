//! Property-based tests for gallery navigation
//!
//! Uses proptest to verify the carousel invariants over arbitrary image set
//! sizes, starting indices and operation sequences.

use phonecards_core::{Catalog, Category, Gallery, GalleryState, ImageRef};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

fn gallery_of(len: usize) -> Gallery {
    let images = (0..len).map(|i| ImageRef::new(format!("card_{i}.png"))).collect();
    Gallery::new(Category::france(), images)
}

/// Operations a user can trigger on a gallery
#[derive(Debug, Clone)]
enum ViewerOp {
    Open(usize),
    Resume,
    Close,
    Next,
    Previous,
}

fn viewer_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<ViewerOp>> {
    prop::collection::vec(
        prop_oneof![
            1 => (0..64usize).prop_map(ViewerOp::Open),
            1 => Just(ViewerOp::Resume),
            1 => Just(ViewerOp::Close),
            3 => Just(ViewerOp::Next),
            3 => Just(ViewerOp::Previous),
        ],
        0..max_ops,
    )
}

fn apply(gallery: &mut Gallery, op: &ViewerOp) {
    match op {
        ViewerOp::Open(i) => {
            gallery.open(*i);
        }
        ViewerOp::Resume => {
            gallery.resume();
        }
        ViewerOp::Close => gallery.close(),
        ViewerOp::Next => gallery.next(),
        ViewerOp::Previous => gallery.previous(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Calling next N times returns to the starting index
    #[test]
    fn next_is_cyclic(len in 1..40usize, start in 0..40usize) {
        let mut g = gallery_of(len);
        g.open(start);
        let begin = g.state().current_index;
        for _ in 0..len {
            g.next();
        }
        prop_assert_eq!(g.state().current_index, begin);
    }

    /// previous undoes next, and next undoes previous
    #[test]
    fn previous_inverts_next(len in 1..40usize, start in 0..40usize) {
        let mut g = gallery_of(len);
        g.open(start);
        let begin = g.state().current_index;

        g.next();
        g.previous();
        prop_assert_eq!(g.state().current_index, begin);

        g.previous();
        g.next();
        prop_assert_eq!(g.state().current_index, begin);
    }

    /// Opening at an in-range index lands exactly there
    #[test]
    fn open_in_range_sets_index(len in 1..40usize, pick in any::<prop::sample::Index>()) {
        let mut g = gallery_of(len);
        let i = pick.index(len);
        prop_assert!(g.open(i));
        prop_assert_eq!(g.state(), GalleryState { is_open: true, current_index: i });
    }

    /// Opening out of range clamps to the last image
    #[test]
    fn open_out_of_range_clamps(len in 1..40usize, extra in 0..1000usize) {
        let mut g = gallery_of(len);
        g.open(len + extra);
        prop_assert_eq!(g.state().current_index, len - 1);
    }

    /// Closing never moves the cursor
    #[test]
    fn close_keeps_index(len in 1..40usize, ops in viewer_ops_strategy(30)) {
        let mut g = gallery_of(len);
        for op in &ops {
            apply(&mut g, op);
        }
        let before = g.state().current_index;
        g.close();
        prop_assert!(!g.is_open());
        prop_assert_eq!(g.state().current_index, before);
    }

    /// The cursor stays in range under any sequence of operations
    #[test]
    fn cursor_always_in_range(len in 0..20usize, ops in viewer_ops_strategy(60)) {
        let mut g = gallery_of(len);
        for op in &ops {
            apply(&mut g, op);
            if len == 0 {
                prop_assert_eq!(g.state(), GalleryState::default());
            } else {
                prop_assert!(g.state().current_index < len);
                prop_assert!(g.current().is_some());
            }
        }
    }
}

#[test]
fn empty_category_never_opens_through_catalog() {
    let galleries = vec![gallery_of(3), Gallery::new(Category::japan(), Vec::new())];
    let mut catalog = Catalog::new(galleries, Vec::new()).unwrap();

    let state = catalog.open("japan", 0).unwrap();
    assert!(!state.is_open);
    catalog.next("japan").unwrap();
    catalog.previous("japan").unwrap();
    assert_eq!(catalog.state("japan").unwrap(), GalleryState::default());
}
