use crate::error::BenchError;
use crate::parallel_primitives::{par_map_blocks, with_workers};
use num::Num;
use std::num::NonZeroUsize;

/// Последовательная сумма слайса с одним аккумулятором.
/// Аккумулятор `S` шире элемента `T`, чтобы сумма не переполнялась.
pub fn sequential_sum<T: Copy, S: Num + Copy + From<T>>(arr: &[T]) -> S {
    arr.iter().fold(S::zero(), |acc, &x| acc + S::from(x))
}

/// Параллельная сумма на `workers` потоках с самописными примитивами.
///
/// Слайс делится на `workers` непрерывных блоков, каждый поток считает частичную
/// сумму своего блока, после join частичные суммы складываются последовательно.
/// Результат совпадает с [sequential_sum] для любого числа потоков.
pub fn parallel_sum<T, S>(arr: &[T], workers: NonZeroUsize) -> Result<S, BenchError>
where
    T: Copy + Sync,
    S: Num + Copy + From<T> + Send + Default,
{
    let partials: Vec<S> =
        with_workers(workers, || par_map_blocks(arr, workers, sequential_sum::<T, S>))?;
    Ok(sequential_sum(&partials))
}

///////////////////
// Tests
///////////////////
