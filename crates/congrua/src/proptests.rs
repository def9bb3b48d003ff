//! Property-based tests for congruence-class arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{CongruenceClass, CongruenceError, CongruenceSet, Integer};

    fn class(residue: i64, modulus: i64) -> CongruenceClass {
        CongruenceClass::new(residue, modulus).unwrap()
    }

    fn gcd(a: i64, b: i64) -> i64 {
        Integer::new(a).gcd(&Integer::new(b)).to_i64().unwrap()
    }

    // Strategy for moduli small enough to exercise every residue class
    fn modulus() -> impl Strategy<Value = i64> {
        1i64..=64i64
    }

    fn residue() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    proptest! {
        // Normalization

        #[test]
        fn residue_is_canonical(r in residue(), n in modulus()) {
            let c = class(r, n);
            let canonical = c.residue().to_i64().unwrap();
            prop_assert!(0 <= canonical && canonical < n);
        }

        #[test]
        fn construction_is_periodic(r in residue(), n in modulus()) {
            prop_assert_eq!(class(r, n), class(r + n, n));
            prop_assert_eq!(class(r, n), class(r - n, n));
        }

        // Additive group laws

        #[test]
        fn add_commutative(a in residue(), b in residue(), n in modulus()) {
            prop_assert_eq!(class(a, n) + class(b, n), class(b, n) + class(a, n));
        }

        #[test]
        fn add_associative(a in residue(), b in residue(), c in residue(), n in modulus()) {
            prop_assert_eq!(
                (class(a, n) + class(b, n)) + class(c, n),
                class(a, n) + (class(b, n) + class(c, n))
            );
        }

        #[test]
        fn additive_inverse(a in residue(), n in modulus()) {
            prop_assert_eq!(class(a, n) + (-class(a, n)), class(0, n));
            prop_assert_eq!(class(a, n) - class(a, n), class(0, n));
        }

        // Multiplicative laws

        #[test]
        fn mul_associative(a in residue(), b in residue(), c in residue(), n in modulus()) {
            prop_assert_eq!(
                (class(a, n) * class(b, n)) * class(c, n),
                class(a, n) * (class(b, n) * class(c, n))
            );
        }

        #[test]
        fn mul_distributes_over_add(a in residue(), b in residue(), c in residue(), n in modulus()) {
            prop_assert_eq!(
                class(a, n) * (class(b, n) + class(c, n)),
                class(a, n) * class(b, n) + class(a, n) * class(c, n)
            );
        }

        // Inversion and division definedness

        #[test]
        fn inverse_defined_iff_coprime(a in residue(), n in modulus()) {
            let c = class(a, n);
            let coprime = gcd(c.residue().to_i64().unwrap(), n) == 1;
            match c.inverse() {
                Ok(inv) => {
                    prop_assert!(coprime);
                    prop_assert_eq!(c * inv, class(1, n));
                }
                Err(error) => {
                    prop_assert!(!coprime);
                    prop_assert_eq!(error, CongruenceError::NotInvertible);
                }
            }
        }

        #[test]
        fn division_round_trips(a in residue(), b in residue(), n in modulus()) {
            let lhs = class(a, n);
            let rhs = class(b, n);
            let coprime = gcd(rhs.residue().to_i64().unwrap(), n) == 1;
            match lhs.checked_div(&rhs) {
                Ok(quotient) => {
                    prop_assert!(coprime);
                    prop_assert_eq!(quotient * rhs, lhs);
                }
                Err(error) => {
                    prop_assert!(!coprime);
                    prop_assert_eq!(error, CongruenceError::NotInvertible);
                }
            }
        }

        // Exponentiation

        #[test]
        fn pow_zero_is_one(a in residue(), n in modulus()) {
            prop_assert_eq!(class(a, n).pow_i64(0).unwrap(), class(1, n));
        }

        #[test]
        fn pow_negative_one_is_inverse(a in residue(), n in modulus()) {
            let c = class(a, n);
            match (c.pow_i64(-1), c.inverse()) {
                (Ok(p), Ok(inv)) => prop_assert_eq!(p, inv),
                (Err(p), Err(inv)) => prop_assert_eq!(p, inv),
                _ => prop_assert!(false, "pow(-1) and inverse() disagree"),
            }
        }

        #[test]
        fn pow_matches_repeated_multiplication(a in residue(), n in modulus(), k in 0i64..8) {
            let c = class(a, n);
            let mut expected = class(1, n);
            for _ in 0..k {
                expected = expected * c.clone();
            }
            prop_assert_eq!(c.pow_i64(k).unwrap(), expected);
        }

        #[test]
        fn pow_adds_exponents(a in residue(), n in modulus(), j in 0i64..12, k in 0i64..12) {
            let c = class(a, n);
            prop_assert_eq!(
                c.pow_i64(j).unwrap() * c.pow_i64(k).unwrap(),
                c.pow_i64(j + k).unwrap()
            );
        }

        // Ordering and equality

        #[test]
        fn ordering_is_trichotomous(a in residue(), b in residue(), n in modulus()) {
            let lhs = class(a, n);
            let rhs = class(b, n);
            let relations = [lhs < rhs, lhs == rhs, lhs > rhs];
            prop_assert_eq!(relations.iter().filter(|held| **held).count(), 1);
        }

        #[test]
        fn equal_classes_hash_equal(a in residue(), n in modulus()) {
            use std::collections::hash_map::DefaultHasher;
            use std::hash::{Hash, Hasher};

            let hash = |c: &CongruenceClass| {
                let mut hasher = DefaultHasher::new();
                c.hash(&mut hasher);
                hasher.finish()
            };

            prop_assert_eq!(hash(&class(a, n)), hash(&class(a + n, n)));
        }

        // Chinese remainder intersection

        #[test]
        fn crt_round_trip(a in residue(), m in modulus(), b in residue(), n in modulus()) {
            let lhs = class(a, m);
            let rhs = class(b, n);
            let g = gcd(m, n);
            let compatible = (lhs.residue().to_i64().unwrap()
                - rhs.residue().to_i64().unwrap())
                .rem_euclid(g)
                == 0;

            match lhs.intersect(&rhs) {
                Some(c) => {
                    prop_assert!(compatible);
                    prop_assert_eq!(c.modulus(), &Integer::new(m).lcm(&Integer::new(n)));
                    prop_assert_eq!(&c.residue().floor_mod(lhs.modulus()), lhs.residue());
                    prop_assert_eq!(&c.residue().floor_mod(rhs.modulus()), rhs.residue());
                    prop_assert!(c.is_subset_of(&lhs));
                    prop_assert!(c.is_subset_of(&rhs));
                }
                None => prop_assert!(!compatible),
            }
        }

        #[test]
        fn crt_is_commutative(a in residue(), m in modulus(), b in residue(), n in modulus()) {
            prop_assert_eq!(
                class(a, m).intersect(&class(b, n)),
                class(b, n).intersect(&class(a, m))
            );
        }

        // Membership and iteration

        #[test]
        fn members_lie_in_class(a in residue(), n in modulus()) {
            let c = class(a, n);
            for member in c.members().take(16) {
                prop_assert!(c.contains(member));
            }
        }

        #[test]
        fn set_iteration_is_exhaustive(n in modulus()) {
            use std::collections::HashSet;

            let set = CongruenceSet::new(n).unwrap();
            let classes: Vec<_> = set.iter().collect();
            prop_assert_eq!(classes.len() as i64, n);
            prop_assert_eq!(set.order(), &Integer::new(n));

            let distinct: HashSet<_> = classes.iter().cloned().collect();
            prop_assert_eq!(distinct.len() as i64, n);

            for (expected, c) in classes.iter().enumerate() {
                prop_assert_eq!(c.residue().to_i64().unwrap(), expected as i64);
                prop_assert!(set.contains(c));
            }
        }
    }

    #[test]
    fn zero_divisors_exist_for_composite_moduli() {
        // Not a property, but the counterpart of the coprimality laws:
        // 2 * 3 = 0 (mod 6) even though neither factor is zero.
        assert_eq!(class(2, 6) * class(3, 6), class(0, 6));
        assert!(class(2, 6).inverse().is_err());
        assert!(!class(2, 6).residue().is_zero());
    }
}
