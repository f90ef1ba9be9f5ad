use std::future::Future;
use tokio::sync::OnceCell;

/// An async value computed at most once.
///
/// Concurrent callers wait on the same initialisation. If the initialiser
/// fails nothing is stored and the next caller runs it again.
#[derive(Debug)]
pub struct Memoized<T> {
    cell: OnceCell<T>,
}

impl<T> Memoized<T> {
    pub fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    pub async fn get_or_try_init<E, F, Fut>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        self.cell.get_or_try_init(init).await
    }

    #[cfg(test)]
    fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    #[cfg(test)]
    fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}

impl<T> Default for Memoized<T> {
    fn default() -> Self {
        Self::new()
    }
}
