// Copyright 2024-2025 Irreducible Inc.

use rand::{rngs::StdRng, SeedableRng};

use crate::{
	BinaryField128b, BinaryField16b, BinaryField1b, BinaryField32b, BinaryField4b, BinaryField8b,
	Field, Goldilocks, Mersenne61, PackedField, PackedVector, Rational,
};

fn check_field_axioms<F: Field>() {
	let mut rng = StdRng::seed_from_u64(0);
	for _ in 0..32 {
		let a = <F as Field>::random(&mut rng);
		let b = <F as Field>::random(&mut rng);
		let c = <F as Field>::random(&mut rng);

		assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
		assert_eq!(a.clone() * b.clone(), b.clone() * a.clone());
		assert_eq!((a.clone() + b.clone()) + c.clone(), a.clone() + (b.clone() + c.clone()));
		assert_eq!((a.clone() * b.clone()) * c.clone(), a.clone() * (b.clone() * c.clone()));
		assert_eq!(
			a.clone() * (b.clone() + c.clone()),
			a.clone() * b.clone() + a.clone() * c.clone()
		);
		assert_eq!(a.clone() + F::zero(), a);
		assert_eq!(a.clone() * F::one(), a);
		assert_eq!(a.clone() - a.clone(), F::zero());
		assert_eq!(a.clone() + (-a.clone()), F::zero());
		assert_eq!(a.square(), a.clone() * a.clone());
		assert_eq!(a.pow(3), a.clone() * a.clone() * a.clone());
		if let Some(a_inv) = a.invert() {
			assert_eq!(a.clone() * a_inv, F::one());
		} else {
			assert!(a.is_zero());
		}
	}
	assert_eq!(F::default(), F::zero());
	assert_eq!(
		[F::one(), F::one(), F::one()].into_iter().sum::<F>(),
		F::one() + F::one() + F::one()
	);
}

#[test]
fn test_field_axioms() {
	check_field_axioms::<BinaryField1b>();
	check_field_axioms::<BinaryField4b>();
	check_field_axioms::<BinaryField8b>();
	check_field_axioms::<BinaryField16b>();
	check_field_axioms::<BinaryField32b>();
	check_field_axioms::<BinaryField128b>();
	check_field_axioms::<Goldilocks>();
	check_field_axioms::<Mersenne61>();
	check_field_axioms::<Rational>();
}

fn check_small_ints_are_distinct<F: Field>(n: u64) {
	let elems = (0..n)
		.map(|i| F::from_small_int(i).unwrap())
		.collect::<Vec<_>>();
	for i in 0..elems.len() {
		for j in 0..i {
			assert_ne!(elems[i], elems[j]);
		}
	}
	assert_eq!(elems[0], F::zero());
	assert_eq!(elems[1], F::one());
}

#[test]
fn test_small_ints_are_distinct() {
	check_small_ints_are_distinct::<BinaryField8b>(256);
	check_small_ints_are_distinct::<BinaryField32b>(512);
	check_small_ints_are_distinct::<Goldilocks>(512);
	check_small_ints_are_distinct::<Rational>(512);
}

#[test]
fn test_scalar_is_width_one_packed() {
	let x = Goldilocks::new(17);
	assert_eq!(<Goldilocks as PackedField>::WIDTH, 1);
	assert_eq!(x.get(0), x);
	assert_eq!(x.iter().collect::<Vec<_>>(), vec![x]);
	assert!(x.get_checked(1).is_err());
	assert_eq!(<Goldilocks as PackedField>::broadcast(x), x);
}

#[test]
fn test_packed_vector_matches_scalar_ops() {
	let mut rng = StdRng::seed_from_u64(1);
	let a = PackedVector::<BinaryField32b, 3>::from_fn(|_| <BinaryField32b as Field>::random(&mut rng));
	let b = PackedVector::<BinaryField32b, 3>::from_fn(|_| <BinaryField32b as Field>::random(&mut rng));
	let s = <BinaryField32b as Field>::random(&mut rng);
	for i in 0..3 {
		assert_eq!((a + b).get(i), a.get(i) + b.get(i));
		assert_eq!((a * s).get(i), a.get(i) * s);
	}
}
