use passgen::entropy::{chi_square, uniform_index};
use passgen::pass::{AMBIGUOUS, Alphabet, CharacterClass, ClassSet, GenerationRequest, generate_batch};
use passgen::{GenerationError, generate, generate_with};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn classes(list: &[CharacterClass]) -> ClassSet {
    list.iter().copied().collect()
}

/// Every non-empty class combination, with and without ambiguous exclusion.
fn all_requests(length: usize) -> Vec<GenerationRequest> {
    let mut requests = Vec::new();
    for mask in 1u8..16 {
        let set: ClassSet = CharacterClass::ALL
            .into_iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, c)| c)
            .collect();
        for exclude in [false, true] {
            requests.push(GenerationRequest::new(length, set, exclude));
        }
    }
    requests
}

#[test]
fn output_has_requested_length() {
    let mut rng = ChaCha20Rng::seed_from_u64(1);
    for length in [1, 4, 12, 64, 500] {
        for request in all_requests(length) {
            let password = generate_with(&request, &mut rng).unwrap();
            assert_eq!(password.chars().count(), length);
        }
    }
}

#[test]
fn output_stays_inside_enabled_classes() {
    let mut rng = ChaCha20Rng::seed_from_u64(2);
    for request in all_requests(64) {
        let password = generate_with(&request, &mut rng).unwrap();
        for c in password.chars() {
            let owner = CharacterClass::ALL
                .into_iter()
                .find(|class| class.chars().contains(c))
                .unwrap();
            assert!(request.classes.contains(owner), "{c} not in {}", request.classes);
            if request.exclude_ambiguous {
                assert!(!AMBIGUOUS.contains(&(c as u8)), "{c} is ambiguous");
            }
        }
    }
}

#[test]
fn alphanumeric_twelve() {
    let request = GenerationRequest::new(
        12,
        classes(&[CharacterClass::Upper, CharacterClass::Lower, CharacterClass::Digit]),
        false,
    );
    let password = generate(&request).unwrap();
    assert_eq!(password.len(), 12);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
}

#[test]
fn all_classes_without_ambiguous() {
    let request = GenerationRequest::new(16, ClassSet::all(), true);
    for _ in 0..200 {
        let password = generate(&request).unwrap();
        assert_eq!(password.len(), 16);
        assert!(!password.chars().any(|c| "Il1O0".contains(c)));
    }
}

#[test]
fn no_classes_fails() {
    for length in [0, 1, 8, 64] {
        let request = GenerationRequest::new(length, ClassSet::empty(), false);
        assert_eq!(
            generate(&request).unwrap_err(),
            GenerationError::NoClassSelected,
            "length {length}"
        );
        let mut rng = ChaCha20Rng::seed_from_u64(length as u64);
        assert_eq!(
            generate_batch(&request, 1, &mut rng).err(),
            Some(GenerationError::NoClassSelected)
        );
    }
}

#[test]
fn zero_length_fails() {
    let request = GenerationRequest::new(0, classes(&[CharacterClass::Digit]), false);
    assert_eq!(generate(&request).unwrap_err(), GenerationError::InvalidLength);
}

#[test]
fn digits_are_uniform() {
    // 9 degrees of freedom; 40 is far beyond the 0.001 critical value (27.9).
    let mut rng = ChaCha20Rng::seed_from_u64(0x5eed);
    let request = GenerationRequest::new(100, classes(&[CharacterClass::Digit]), false);
    let mut counts = [0u64; 10];
    for password in generate_batch(&request, 1_000, &mut rng).unwrap() {
        for c in password.chars() {
            counts[c.to_digit(10).unwrap() as usize] += 1;
        }
    }

    let expected = 10_000.0;
    for (digit, &count) in counts.iter().enumerate() {
        let sigma = (count as f64 - expected).abs() / (100_000.0f64 * 0.1 * 0.9).sqrt();
        assert!(sigma < 5.0, "digit {digit} drawn {count} times");
    }
    assert!(chi_square(&counts) < 40.0, "chi-square {}", chi_square(&counts));
}

#[test]
fn non_power_of_two_alphabet_is_uniform() {
    // Upper without I and O leaves 24 letters; 23 degrees of freedom.
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let alphabet = Alphabet::build(classes(&[CharacterClass::Upper]), true).unwrap();
    assert_eq!(alphabet.len(), 24);

    let mut counts = vec![0u64; alphabet.len()];
    for _ in 0..48_000 {
        counts[uniform_index(&mut rng, alphabet.len())] += 1;
    }
    assert!(chi_square(&counts) < 60.0, "chi-square {}", chi_square(&counts));
}
