//! Levenshtein distance in linear space.

/// Returns the minimum number of single-element insertions, deletions and
/// substitutions that turn `a` into `b`.
///
/// Runs in O(|a|·|b|) time and keeps a single row of `min(|a|, |b|) + 1`
/// counters, carrying the diagonal value in a scalar.
pub fn distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
	// Distance is symmetric; let the shorter input drive the row.
	let (short, long) = if b.len() < a.len() { (b, a) } else { (a, b) };

	let mut row: Vec<usize> = (0..=short.len()).collect();

	for long_elem in long {
		let mut diag = row[0];
		row[0] += 1;
		for (j, short_elem) in short.iter().enumerate() {
			let gap = row[j].min(row[j + 1]) + 1;
			let subst = diag + usize::from(long_elem != short_elem);
			diag = row[j + 1];
			row[j + 1] = gap.min(subst);
		}
	}

	row[short.len()]
}

#[cfg(test)]
mod tests {
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn chars(s: &str) -> Vec<char> {
		s.chars().collect()
	}

	#[rstest]
	#[case("kitten", "sitting", 3)]
	#[case("", "", 0)]
	#[case("abc", "", 3)]
	#[case("", "abc", 3)]
	#[case("flaw", "lawn", 2)]
	#[case("abc", "abd", 1)]
	#[case("intention", "execution", 5)]
	fn test_known_distances(#[case] a: &str, #[case] b: &str, #[case] expected: usize) {
		assert_eq!(distance(&chars(a), &chars(b)), expected);
	}

	#[test]
	fn test_works_on_any_element_type() {
		assert_eq!(distance(&[1u32, 2, 3], &[1u32, 3]), 1);
		assert_eq!(distance(b"sunday", b"saturday"), 3);
	}

	fn arb_string() -> impl Strategy<Value = Vec<char>> {
		prop::collection::vec(prop::char::range('a', 'e'), 0..24)
	}

	proptest! {
		#[test]
		fn prop_self_distance_is_zero(s in arb_string()) {
			prop_assert_eq!(distance(&s, &s), 0);
		}

		#[test]
		fn prop_distance_to_empty_is_length(s in arb_string()) {
			prop_assert_eq!(distance(&s, &[]), s.len());
			prop_assert_eq!(distance(&[], &s), s.len());
		}

		#[test]
		fn prop_symmetric(s1 in arb_string(), s2 in arb_string()) {
			prop_assert_eq!(distance(&s1, &s2), distance(&s2, &s1));
		}

		#[test]
		fn prop_triangle(s1 in arb_string(), s2 in arb_string(), s3 in arb_string()) {
			prop_assert!(distance(&s1, &s3) <= distance(&s1, &s2) + distance(&s2, &s3));
		}

		/// A string differs from its prefix by exactly the dropped suffix.
		#[test]
		fn prop_prefix(s in arb_string(), cut in any::<prop::sample::Index>()) {
			let prefix = cut.index(s.len() + 1);
			prop_assert_eq!(distance(&s, &s[..prefix]), s.len() - prefix);
		}

		#[test]
		fn prop_single_substitution(s in arb_string(), at in any::<prop::sample::Index>()) {
			prop_assume!(!s.is_empty());
			let pos = at.index(s.len());
			let mut t = s.clone();
			t[pos] = 'z';
			prop_assert_eq!(distance(&s, &t), 1);
		}

		#[test]
		fn prop_single_insertion(s in arb_string(), at in any::<prop::sample::Index>()) {
			let pos = at.index(s.len() + 1);
			let mut t = s.clone();
			t.insert(pos, 'z');
			prop_assert_eq!(distance(&s, &t), 1);
		}

		#[test]
		fn prop_single_deletion(s in arb_string(), at in any::<prop::sample::Index>()) {
			prop_assume!(!s.is_empty());
			let pos = at.index(s.len());
			let mut t = s.clone();
			t.remove(pos);
			prop_assert_eq!(distance(&s, &t), 1);
		}
	}
}
