use rayon::ThreadPoolBuildError;
use std::num::NonZeroUsize;
use std::ops::Range;

///////////////////
// Blocks
///////////////////

/// Границы блока `block` при разбиении `[0, len)` на `blocks` непрерывных частей.
/// Размеры блоков отличаются не больше чем на единицу; если блоков больше,
/// чем элементов, лишние блоки пустые.
pub fn block_range(len: usize, blocks: NonZeroUsize, block: usize) -> Range<usize> {
    let base = len / blocks.get();
    let extra = len % blocks.get();
    let start = block * base + block.min(extra);
    let end = start + base + usize::from(block < extra);
    start..end
}

///////////////////
// Map blocks
///////////////////

/// Разбить слайс на `blocks` блоков и параллельно применить `mapper` к каждому.
/// Результат для блока `i` лежит по индексу `i`. O(log blocks) span.
///
/// Каждый вызов `mapper` пишет только в свою ячейку результата,
/// общего изменяемого состояния между блоками нет.
pub fn par_map_blocks<T: Sync, R: Send + Default + Clone>(
    arr: &[T],
    blocks: NonZeroUsize,
    mapper: impl Fn(&[T]) -> R + Copy + Sync,
) -> Vec<R> {
    let mut res: Vec<R> = vec![Default::default(); blocks.get()];
    par_map_blocks_helper(arr, blocks, 0, &mut res, mapper);
    res
}

fn par_map_blocks_helper<T: Sync, R: Send>(
    arr: &[T],
    blocks: NonZeroUsize,
    first_block: usize,
    result_arr: &mut [R],
    mapper: impl Fn(&[T]) -> R + Copy + Sync,
) {
    if result_arr.len() == 1 {
        result_arr[0] = mapper(&arr[block_range(arr.len(), blocks, first_block)]);
        return;
    }
    let m = result_arr.len() / 2;
    let (result_left, result_right) = result_arr.split_at_mut(m);
    rayon::join(
        || par_map_blocks_helper(arr, blocks, first_block, result_left, mapper),
        || par_map_blocks_helper(arr, blocks, first_block + m, result_right, mapper),
    );
}

///////////////////
// Workers
///////////////////

/// Выполнить `op` в отдельном пуле ровно из `workers` потоков.
/// Пул создаётся на время вызова и разрушается после него,
/// глобальная настройка rayon не трогается.
///
/// Создание и остановка потоков входят в замеряемое время вызова, поэтому замер
/// параллельной суммы включает накладные расходы на запуск пула,
/// которых нет у последовательной версии.
pub fn with_workers<R: Send>(
    workers: NonZeroUsize,
    op: impl FnOnce() -> R + Send,
) -> Result<R, ThreadPoolBuildError> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers.get())
        .thread_name(|i| format!("sum-worker-{i}"))
        .build()?;
    log::debug!("built thread pool with {} workers", pool.current_num_threads());
    Ok(pool.install(op))
}

///////////////////
// Tests
///////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn block_range_test() {
        let blocks = nz(3);
        assert_eq!(0..4, block_range(10, blocks, 0));
        assert_eq!(4..7, block_range(10, blocks, 1));
        assert_eq!(7..10, block_range(10, blocks, 2));
    }

    #[test]
    fn block_range_covers_everything_once_test() {
        for len in [0, 1, 5, 17, 1000] {
            for blocks in 1..=len + 3 {
                let blocks = nz(blocks);
                let mut next = 0;
                for block in 0..blocks.get() {
                    let range = block_range(len, blocks, block);
                    assert_eq!(next, range.start);
                    assert!(range.len() <= len / blocks.get() + 1);
                    next = range.end;
                }
                assert_eq!(len, next);
            }
        }
    }

    #[test]
    fn par_map_blocks_test() {
        let arr = vec![1, 2, 3, 4, 5];
        let lens = par_map_blocks(&arr, nz(2), |block| block.len());
        assert_eq!(vec![3, 2], lens);

        let firsts = par_map_blocks(&arr, nz(8), |block| block.first().copied());
        assert_eq!(
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, None, None],
            firsts
        );
    }

    #[test]
    fn par_map_blocks_empty_test() {
        let arr: Vec<i32> = vec![];
        let lens = par_map_blocks(&arr, nz(4), |block| block.len());
        assert_eq!(vec![0; 4], lens);
    }

    #[test]
    fn with_workers_test() {
        for workers in [1, 2, 4, 8] {
            let threads = with_workers(nz(workers), rayon::current_num_threads).unwrap();
            assert_eq!(workers, threads);
        }
    }

    #[test]
    fn with_workers_runs_on_own_pool_test() {
        let name = with_workers(nz(2), || {
            std::thread::current().name().map(str::to_owned)
        })
        .unwrap();
        assert!(name.unwrap().starts_with("sum-worker-"));
        assert_eq!(None, rayon::current_thread_index());
    }
}
