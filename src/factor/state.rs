/// Shared factorization state for the parallel scan phase.
///
/// The mutex guards the (cofactor, factors) pair as a single unit: every
/// read that informs a mutation, and every mutation, happens under it.
/// At any instant the original input equals the product of `factors`
/// times `cofactor`, because each extraction appends the factor and
/// shrinks the cofactor inside the same critical section.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Outcome of an authoritative extraction attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    /// The cofactor has reached 1; the factorization is complete.
    Done,
    /// Updated cofactor for the caller's local cache.
    Remaining(i128),
}

pub struct FactorState {
    inner: Mutex<Inner>,
    /// Completion hint with relaxed ordering only. Lets workers stop
    /// scanning early; a late observation costs redundant scanning, never
    /// a wrong factor. Never the gate for a mutation.
    done: AtomicBool,
}

struct Inner {
    cofactor: i128,
    factors: Vec<i128>,
}

impl FactorState {
    /// Built once by the coordinator before any worker is spawned.
    pub fn new(cofactor: i128, factors: Vec<i128>) -> Self {
        FactorState {
            inner: Mutex::new(Inner { cofactor, factors }),
            done: AtomicBool::new(false),
        }
    }

    /// One-time locked read of the cofactor, cached by each worker so the
    /// hot scanning loop never touches the lock.
    pub fn snapshot(&self) -> i128 {
        self.lock().cofactor
    }

    /// Relaxed load of the completion hint; may lag the true state.
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Authoritatively extract `p` from the cofactor.
    ///
    /// The caller's divisibility hit was against an unlocked snapshot, so
    /// the cofactor is re-read under the lock: another worker may have
    /// shrunk it, invalidating the hit or changing the multiplicity. All
    /// powers of `p` are divided out in this one critical section, each
    /// occurrence appended to the factor list as the cofactor shrinks.
    pub fn extract(&self, p: i128) -> Extraction {
        let mut inner = self.lock();
        if inner.cofactor == 1 {
            self.done.store(true, Ordering::Relaxed);
            return Extraction::Done;
        }
        while inner.cofactor > 1 && inner.cofactor % p == 0 {
            inner.cofactor /= p;
            inner.factors.push(p);
        }
        if inner.cofactor == 1 {
            self.done.store(true, Ordering::Relaxed);
            return Extraction::Done;
        }
        Extraction::Remaining(inner.cofactor)
    }

    /// Tear down after every worker has joined, handing the factor list
    /// and the residual cofactor back to the coordinator.
    pub fn into_parts(self) -> (Vec<i128>, i128) {
        let inner = self
            .inner
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        (inner.factors, inner.cofactor)
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Workers never panic while holding the lock, so poisoning is
        // unreachable; recover the guard rather than propagate it.
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
