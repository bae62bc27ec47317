use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sentinel_deque::{Deque, Error};
use std::collections::VecDeque;

proptest! {
    #[test]
    fn random_add_and_remove(
        adds in proptest::collection::vec(any::<bool>(), 0..64),
        removes in proptest::collection::vec(any::<bool>(), 0..64)
    ) {
        let mut l: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for (v, front) in adds.into_iter().enumerate() {
            if front {
                l.add_front(v);
                model.push_front(v);
                prop_assert_eq!(&v, l.front());
            } else {
                l.add_back(v);
                model.push_back(v);
                prop_assert_eq!(&v, l.back());
            }
        }

        for front in removes {
            if front {
                prop_assert_eq!(model.pop_front(), l.try_remove_front().ok());
            } else {
                prop_assert_eq!(model.pop_back(), l.try_remove_back().ok());
            }
            prop_assert_eq!(model.len(), l.len());
        }

        prop_assert_eq!(model.is_empty(), l.is_empty());
        prop_assert!(model.iter().eq(l.iter()));
    }
}

proptest! {
    #[test]
    fn random_interleaved_operations(
        action in proptest::collection::vec(any::<usize>(), 0..128)
    ){
        let mut l: Deque<usize> = Deque::new();
        let mut model: VecDeque<usize> = VecDeque::new();

        for a in action {
            match a % 5 {
                0 => {
                    l.add_front(a);
                    model.push_front(a);
                },
                1 => {
                    l.add_back(a);
                    model.push_back(a);
                },
                2 => {
                    prop_assert_eq!(model.pop_front(), l.try_remove_front().ok());
                },
                3 => {
                    prop_assert_eq!(model.pop_back(), l.try_remove_back().ok());
                },
                4 => {
                    l.reverse();
                    model = model.into_iter().rev().collect();
                },
                _ => unreachable!(),
            }

            prop_assert_eq!(model.len(), l.len());
            prop_assert_eq!(model.front(), l.try_front().ok());
            prop_assert_eq!(model.back(), l.try_back().ok());
        }

        prop_assert!(model.iter().eq(l.iter()));
        prop_assert!(model.iter().rev().eq(l.iter().rev()));
    }
}

proptest! {
    #[test]
    fn reverse_twice_is_identity(
        seed in any::<u64>(),
        values in proptest::collection::vec(any::<i32>(), 1..64),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut values = values;
        values.shuffle(&mut rng);

        let mut l: Deque<i32> = values.iter().cloned().collect();

        l.reverse();
        prop_assert!(values.iter().rev().eq(l.iter()));
        prop_assert_eq!(values.last(), Some(l.front()));
        prop_assert_eq!(values.first(), Some(l.back()));

        l.reverse();
        prop_assert!(values.iter().eq(l.iter()));
    }
}

proptest! {
    #[test]
    fn full_drain_leaves_empty_deque(
        seed in any::<u64>(),
        values in proptest::collection::vec(any::<u16>(), 0..64),
    ) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut l = Deque::new();

        for v in &values {
            if rng.gen_bool(0.5) {
                l.add_front(*v);
            } else {
                l.add_back(*v);
            }
        }

        let mut removed = 0;
        while !l.is_empty() {
            l.remove_front();
            removed += 1;
        }

        prop_assert_eq!(values.len(), removed);
        prop_assert_eq!(values.len(), l.len_freelist());
        prop_assert!(matches!(l.try_front(), Err(Error::Empty(_))));
    }
}
