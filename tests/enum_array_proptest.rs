//! Property tests: keyed access behaves like a plain indexed array model, and
//! iteration always follows key declaration order.

use enum_array::{enum_key, EnumArray, Key};
use proptest::prelude::*;

enum_key! {
    #[derive(Debug, PartialEq, Eq)]
    enum Slot { A, B, C, D, E, F }
}

fn any_key() -> impl Strategy<Value = Slot> {
    (0..Slot::LEN).prop_map(|i| Slot::VALUES[i])
}

proptest! {
    #[test]
    fn keyed_writes_match_indexed_model(writes in proptest::collection::vec(
        (any_key(), any::<i32>()),
        1..100
    )) {
        let mut array: EnumArray<Slot, i32> = EnumArray::default();
        let mut model = [0i32; 6];

        for (key, value) in writes {
            array[key] = value;
            model[key.index()] = value;

            prop_assert_eq!(array[key], model[key.index()]);
        }

        for &key in Slot::VALUES {
            prop_assert_eq!(array[key], model[key.index()]);
        }
    }

    #[test]
    fn fill_overwrites_every_slot(seed in any::<i32>(), fill_value in any::<i32>()) {
        let mut array = EnumArray::<Slot, i32>::from_fn(|k: Slot| seed.wrapping_add(k.index() as i32));
        array.fill(fill_value);

        for &key in Slot::VALUES {
            prop_assert_eq!(array[key], fill_value);
        }
    }

    #[test]
    fn iteration_order_is_declaration_order(values in proptest::array::uniform6(any::<i32>())) {
        let array = EnumArray::<Slot, i32>::from_fn(|k: Slot| values[k.index()]);

        let collected: Vec<i32> = array.iter().copied().collect();
        prop_assert_eq!(&collected, &values);

        // Restartable: the second pass observes the identical sequence.
        let again: Vec<i32> = array.iter().copied().collect();
        prop_assert_eq!(collected, again);
    }
}
