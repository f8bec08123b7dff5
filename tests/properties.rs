use std::collections::HashSet;
use std::hash::{BuildHasher, RandomState};

use bitmask::{Bitmask, Flags, bitmask, flag_enum};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro128Plus;

const ROUNDS: usize = 1024;

flag_enum! {
    enum Desc: u8 {
        Small = 1,
        Round = 1 << 1,
        Funky = 1 << 2,
        Large = 1 << 3,
    }
}

flag_enum! {
    enum Colors: u8 {
        Teal = 1,
        Pink = 1 << 1,
        Blue = 1 << 2,
        Gold = 1 << 3,
    }
}

/// Pairs of masks with arbitrary raw values, undeclared bits included.
fn pairs(seed: u64) -> impl Iterator<Item = (Bitmask<Desc>, Bitmask<Desc>)> {
    let mut rng = Xoshiro128Plus::seed_from_u64(seed);
    (0..ROUNDS).map(move |_| {
        (
            Bitmask::<Desc>::from_bits_retain(rng.random()),
            Bitmask::<Desc>::from_bits_retain(rng.random()),
        )
    })
}

fn flag(rng: &mut Xoshiro128Plus) -> Desc {
    let flags = Desc::FLAGS;
    flags[rng.random_range(0..flags.len())].value()
}

#[test]
fn flag_membership_matches_its_bit() {
    for (mask, _) in pairs(1) {
        for entry in Desc::FLAGS {
            let flag = entry.value();
            let bit = u8::from(flag);
            assert_eq!(mask.contains(flag), mask.bits() & bit == bit);
            assert_eq!(mask.contains(Bitmask::from_flag(flag)), mask.contains(flag));
        }
    }
}

#[test]
fn union_is_a_superset_of_both_operands() {
    for (a, b) in pairs(2) {
        let union = a.union_with(b);
        assert!(union.contains(union));
        assert!(union.contains(a));
        assert!(union.contains(b));
        assert_eq!(union, b.union_with(a));
        assert_eq!(union, a | b);
    }
}

#[test]
fn intersection_is_a_subset_of_both_operands() {
    for (a, b) in pairs(3) {
        let intersection = a.intersect_with(b);
        assert!(a.contains(intersection));
        assert!(b.contains(intersection));
        assert_eq!(intersection, b.intersect_with(a));
        assert_eq!(intersection, a & b);
    }
}

#[test]
fn idempotence_and_identity() {
    for (a, _) in pairs(4) {
        assert_eq!(a | a, a);
        assert_eq!(a & a, a);
        assert_eq!(a | Bitmask::<Desc>::empty(), a);
        assert_eq!(a & Bitmask::<Desc>::from_bits_retain(u8::MAX), a);
        assert!((a ^ a).is_empty());
    }
}

#[test]
fn union_and_intersection_associate() {
    let mut rng = Xoshiro128Plus::seed_from_u64(5);
    for (a, b) in pairs(5) {
        let c = Bitmask::<Desc>::from_bits_retain(rng.random());
        assert_eq!((a | b) | c, a | (b | c));
        assert_eq!((a & b) & c, a & (b & c));
        assert_eq!((a ^ b) ^ c, a ^ (b ^ c));
    }
}

#[test]
fn add_then_discard_restores_the_empty_mask() {
    let mut rng = Xoshiro128Plus::seed_from_u64(6);
    for _ in 0..ROUNDS {
        let flag = flag(&mut rng);
        let mut mask = Bitmask::<Desc>::empty();
        mask.add(flag);
        assert!(mask.contains(flag));
        mask.discard(flag);
        assert_eq!(mask, Bitmask::<Desc>::empty());
    }
}

#[test]
fn augmented_operators_match_named_methods() {
    for (a, b) in pairs(7) {
        let mut plus = a;
        plus += b;
        assert_eq!(plus, a | b);

        let mut minus = a;
        minus -= b;
        let mut discarded = a;
        discarded.discard(b);
        assert_eq!(minus, discarded);
        assert_eq!(minus, a - b);
        assert_eq!(minus, a & !b);

        let mut and = a;
        and &= b;
        assert_eq!(and, a & b);

        let mut xor = a;
        xor ^= b;
        assert_eq!(xor, a ^ b);
    }
}

#[test]
fn complement_laws() {
    let all = Bitmask::<Desc>::all();
    for (a, b) in pairs(8) {
        assert_eq!(!!a, a);
        assert_eq!(!(a | b), !a & !b);
        assert_eq!(!(a & b), !a | !b);
        assert!((!a & a).is_empty());

        let within = a.complement_within(all);
        assert_eq!(within.unknown_bits(), 0);
        assert!((within & a).is_empty());
    }
}

#[test]
fn remove_leaves_the_mask_alone_on_error() {
    for (a, b) in pairs(9) {
        let mut removed = a;
        if let Ok(()) = removed.remove(b) {
            assert!(a.contains(b));
            assert_eq!(removed, a - b);
        } else {
            assert!(!a.contains(b));
            assert_eq!(removed, a);
        }
    }
}

#[test]
fn rendering_never_drops_bits() {
    for (a, _) in pairs(10) {
        let rendered = a.to_string();
        let parsed = rendered.split('|').fold(0u8, |acc, part| {
            let bits = match part.strip_prefix("0x") {
                Some(hex) => u8::from_str_radix(hex, 16).unwrap(),
                None if part == "0" => 0,
                None => Desc::FLAGS
                    .iter()
                    .find(|entry| entry.name() == part)
                    .map(|entry| u8::from(entry.value()))
                    .unwrap(),
            };
            acc | bits
        });
        assert_eq!(parsed, a.bits(), "{rendered}");
    }
}

#[test]
fn masks_over_different_enums_compare_by_raw_value() {
    for (a, b) in pairs(11) {
        let colors = Bitmask::<Colors>::from_bits_retain(a.bits());
        assert_eq!(a, colors);
        assert_eq!(a.cast::<Colors>(), colors);
        assert_eq!(a == b.cast::<Colors>(), a.bits() == b.bits());
        assert_eq!(a.union_with(colors), a);
    }
}

#[test]
fn hash_agrees_with_equality() {
    let state = RandomState::new();
    for (a, b) in pairs(12) {
        let colors = a.cast::<Colors>();
        if a == colors {
            assert_eq!(state.hash_one(a), state.hash_one(colors));
        }
        if a == b {
            assert_eq!(state.hash_one(a), state.hash_one(b));
        }
    }

    let mut seen = HashSet::new();
    assert!(seen.insert(bitmask![Desc::Small, Desc::Round]));
    assert!(!seen.insert(Desc::Small | Desc::Round));
    assert!(seen.insert(Bitmask::<Desc>::from_flag(Desc::Funky)));
    assert_eq!(seen.len(), 2);
}
