use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::{SystemTime, UNIX_EPOCH};

///////////////////
// Random
///////////////////

/// Генератор псевдослучайных чисел для заполнения массива.
/// Не криптостойкий, для бенчмарка этого достаточно.
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Заменить содержимое `arr` на `len` равномерных значений из `[from, to]` включительно.
    /// Значения пишутся сразу в выделенную память, без предварительного обнуления;
    /// если ёмкости хватает, перевыделения нет.
    pub fn fill_in_range(&mut self, arr: &mut Vec<i32>, len: usize, from: i32, to: i32) {
        let dist = Uniform::new_inclusive(from, to);
        arr.clear();
        arr.extend((0..len).map(|_| self.rng.sample(dist)));
    }

    #[allow(dead_code)]
    pub fn next_vec_in_range(&mut self, len: usize, from: i32, to: i32) -> Vec<i32> {
        let mut arr = Vec::with_capacity(len);
        self.fill_in_range(&mut arr, len, from, to);
        arr
    }
}

/// Зерно из текущего времени с точностью до секунды.
pub fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}

///////////////////
// Tests
///////////////////
