use rayon::ThreadPoolBuildError;
use std::collections::TryReserveError;
use std::error::Error;
use std::fmt;

/// Фатальные ошибки бенчмарка. Повторять не имеет смысла:
/// размер массива и число потоков фиксированы.
#[derive(Debug)]
pub enum BenchError {
    Allocation(TryReserveError),
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::Allocation(_) => write!(f, "Erro ao alocar memória!"),
            BenchError::ThreadPool(err) => write!(f, "Erro ao criar as threads: {err}"),
        }
    }
}

impl Error for BenchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BenchError::Allocation(err) => Some(err),
            BenchError::ThreadPool(err) => Some(err),
        }
    }
}

impl From<TryReserveError> for BenchError {
    fn from(err: TryReserveError) -> Self {
        BenchError::Allocation(err)
    }
}

impl From<ThreadPoolBuildError> for BenchError {
    fn from(err: ThreadPoolBuildError) -> Self {
        BenchError::ThreadPool(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocation_message_test() {
        let err = Vec::<i32>::new().try_reserve_exact(usize::MAX).unwrap_err();
        let err = BenchError::from(err);
        assert_eq!("Erro ao alocar memória!", err.to_string());
        assert!(err.source().is_some());
    }
}
