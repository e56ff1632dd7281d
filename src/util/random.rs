use crate::student::Student;
use rand::{distributions::Alphanumeric, prelude::ThreadRng, Rng};

pub trait Random {
    fn gen(rng: &mut ThreadRng) -> Self;
}

const RANDOM_STRING_MIN: usize = 1;
const RANDOM_STRING_MAX: usize = 10;

impl Random for String {
    // get random string whose length is in [RANDOM_STRING_MIN, RANDOM_STRING_MAX)
    fn gen(rng: &mut ThreadRng) -> Self {
        let length: usize = rng.gen_range(RANDOM_STRING_MIN..RANDOM_STRING_MAX);

        rng.sample_iter(&Alphanumeric)
            .map(char::from)
            .take(length)
            .collect()
    }
}

impl Random for u64 {
    fn gen(rng: &mut ThreadRng) -> Self {
        rng.gen()
    }
}

impl Random for Student {
    fn gen(rng: &mut ThreadRng) -> Self {
        Student::new(
            rng.gen_range(0..1_000_000),
            &String::gen(rng),
            if rng.gen::<bool>() { 'M' } else { 'F' },
            rng.gen_range(0..=100),
            rng.gen_range(0..=100),
            rng.gen_range(0..=100),
        )
    }
}
