//! Property tests for the placement engine's invariants.

use perch::{AnchorType, Direction, PlacementRequest, Rect, Size, place, resolve_anchor_type};
use proptest::prelude::*;

fn any_anchor_type() -> impl Strategy<Value = AnchorType> {
    prop_oneof![
        Just(AnchorType::Above),
        Just(AnchorType::Below),
        Just(AnchorType::Before),
        Just(AnchorType::After),
    ]
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Ltr), Just(Direction::Rtl)]
}

// Anchors may sit partly or wholly outside the available area; the engine
// accepts degenerate geometry as given.
fn any_anchor_rect() -> impl Strategy<Value = Rect> {
    (
        -200.0f32..1200.0,
        -200.0f32..1200.0,
        0.0f32..400.0,
        0.0f32..400.0,
    )
        .prop_map(|(left, top, width, height)| Rect::new(left, top, width, height))
}

fn any_request() -> impl Strategy<Value = PlacementRequest> {
    (
        any_anchor_rect(),
        (0.0f32..900.0, 0.0f32..900.0).prop_map(|(w, h)| Size::new(w, h)),
        any_anchor_type(),
        any::<bool>(),
        any_direction(),
        (100.0f32..1600.0, 100.0f32..1200.0).prop_map(|(w, h)| Rect::from_size(w, h)),
        0.0f32..100.0,
    )
        .prop_map(|(anchor, popup, ty, invert, direction, avail, inset)| {
            PlacementRequest::new(anchor, popup, avail, ty)
                .with_direction(direction)
                .with_invert_left_right(invert)
                .with_reserved_bottom_inset(inset)
        })
}

proptest! {
    #[test]
    fn placement_is_deterministic(request in any_request()) {
        prop_assert_eq!(place(&request), place(&request));
    }

    #[test]
    fn exactly_one_offset_is_set_per_axis(request in any_request()) {
        let offsets = place(&request);
        prop_assert_eq!(
            offsets.top.is_some() as u8 + offsets.bottom.is_some() as u8,
            1
        );
        prop_assert_eq!(
            offsets.left.is_some() as u8 + offsets.right.is_some() as u8,
            1
        );
    }

    #[test]
    fn below_never_flips(request in any_request()) {
        let request = PlacementRequest {
            requested_type: AnchorType::Below,
            ..request
        };
        prop_assert_eq!(resolve_anchor_type(&request), AnchorType::Below);
    }

    #[test]
    fn rtl_matches_a_single_explicit_inversion(request in any_request()) {
        let rtl = PlacementRequest {
            direction: Direction::Rtl,
            invert_left_right: false,
            ..request
        };
        let inverted = PlacementRequest {
            direction: Direction::Ltr,
            invert_left_right: true,
            ..request
        };
        prop_assert_eq!(resolve_anchor_type(&rtl), resolve_anchor_type(&inverted));
        prop_assert_eq!(place(&rtl), place(&inverted));
    }

    #[test]
    fn resolved_type_keeps_the_primary_axis_of_the_request(request in any_request()) {
        // Overflow flipping moves to the opposite side, never to the
        // perpendicular one; only inversion swaps Before/After, which stays
        // horizontal.
        let resolved = resolve_anchor_type(&request);
        prop_assert_eq!(resolved.is_vertical(), request.requested_type.is_vertical());
    }
}
