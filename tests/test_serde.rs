#![cfg(feature = "serde")]

use moselect::selection::{NeighborType, RandomSelection};
use moselect::sequence::{CyclicIntegerSequence, SequenceGenerator};

#[test]
fn random_selection_round_trips_through_json() {
    let selection = RandomSelection::new(4).without_replacement();

    let json = serde_json::to_string(&selection).unwrap();
    let restored: RandomSelection = serde_json::from_str(&json).unwrap();

    assert_eq!(
        restored.number_of_elements_to_select(),
        selection.number_of_elements_to_select()
    );
    assert_eq!(restored.is_with_replacement(), selection.is_with_replacement());
}

#[test]
fn neighbor_type_round_trips_through_json() {
    let json = serde_json::to_string(&NeighborType::Neighbor).unwrap();
    let restored: NeighborType = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, NeighborType::Neighbor);
}

#[test]
fn cyclic_sequence_round_trips_through_json() {
    let mut sequence = CyclicIntegerSequence::new(5).unwrap();
    sequence.advance();
    sequence.advance();

    let json = serde_json::to_string(&sequence).unwrap();
    let restored: CyclicIntegerSequence = serde_json::from_str(&json).unwrap();

    assert_eq!(restored.value(), 2);
    assert_eq!(restored.length(), 5);
}
