use crate::error::BenchError;
use crate::sum::{parallel_sum, sequential_sum};
use crate::utils::Random;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

pub const ARRAY_SIZE: usize = 100_000_000;
pub const MAX_THREADS: usize = 8;

const MIN_VALUE: i32 = 1;
const MAX_VALUE: i32 = 100;

/// Число потоков: 1, 2, 4, ... пока не больше `max_threads`.
pub fn thread_sweep(max_threads: usize) -> impl Iterator<Item = NonZeroUsize> {
    std::iter::successors(Some(NonZeroUsize::MIN), |threads| {
        threads.get().checked_mul(2).and_then(NonZeroUsize::new)
    })
    .take_while(move |threads| threads.get() <= max_threads)
}

/// Зарезервировать память под массив из `len` элементов. Массив пустой,
/// заполняет его генератор. Ошибка выделения не паникует, а возвращается.
pub fn alloc_array(len: usize) -> Result<Vec<i32>, BenchError> {
    let mut arr = Vec::new();
    arr.try_reserve_exact(len)?;
    Ok(arr)
}

fn timed<R>(action: impl FnOnce() -> R) -> (R, Duration) {
    let start_time = Instant::now();
    let res = action();
    (res, start_time.elapsed())
}

pub fn serial_report(sum: i64, elapsed: Duration) -> String {
    format!(
        "Versão Serial: Soma = {}, Tempo = {:.6} segundos",
        sum,
        elapsed.as_secs_f64()
    )
}

pub fn parallel_report(threads: NonZeroUsize, sum: i64, elapsed: Duration) -> String {
    format!(
        "Versão Paralela ({} threads): Soma = {}, Tempo = {:.6} segundos",
        threads,
        sum,
        elapsed.as_secs_f64()
    )
}

/// Сгенерировать массив один раз, замерить последовательную сумму,
/// затем параллельную для каждого числа потоков из [thread_sweep].
/// Каждая строка отчёта передаётся в `report`.
pub fn run(
    array_size: usize,
    seed: u64,
    max_threads: usize,
    mut report: impl FnMut(&str),
) -> Result<(), BenchError> {
    let mut arr = alloc_array(array_size)?;
    log::info!("allocated {} elements", array_size);

    Random::new(seed).fill_in_range(&mut arr, array_size, MIN_VALUE, MAX_VALUE);
    log::info!("generated values in [{MIN_VALUE}, {MAX_VALUE}] with seed {seed}");

    let (serial_sum, elapsed) = timed(|| sequential_sum::<_, i64>(&arr));
    report(&serial_report(serial_sum, elapsed));

    for threads in thread_sweep(max_threads) {
        let (sum, elapsed) = timed(|| parallel_sum::<_, i64>(&arr, threads));
        let sum = sum?;
        if sum != serial_sum {
            log::error!(
                "parallel sum with {threads} threads is {sum}, serial sum is {serial_sum}"
            );
        }
        report(&parallel_report(threads, sum, elapsed));
    }

    log::debug!("releasing array");
    Ok(())
}

///////////////////
// Tests
///////////////////
