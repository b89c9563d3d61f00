use super::Classifier;
use super::error::ClassifierError;
use super::table::TableClassifier;
use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

struct DefaultSlot {
    instance: Option<Arc<TableClassifier>>,
    refcount: usize,
}

// The count and the build/drop transition share one lock, so the instance is
// built once per UNINITIALIZED -> ACTIVE edge and dropped once per reverse edge.
static DEFAULT_SLOT: Mutex<DefaultSlot> = Mutex::new(DefaultSlot {
    instance: None,
    refcount: 0,
});

fn lock_slot() -> MutexGuard<'static, DefaultSlot> {
    // The slot holds no invariant that a panicking holder could break halfway.
    DEFAULT_SLOT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A counted handle to the process-wide default (ProtOr) classifier.
///
/// Each live handle holds one reference. Dropping the last handle destroys the
/// shared instance; the next [`acquire_default`] builds a fresh one. Cloning a
/// handle acquires another reference.
#[derive(Debug)]
pub struct DefaultClassifier {
    inner: Arc<TableClassifier>,
}

impl DefaultClassifier {
    /// True if both handles refer to the same physical classifier.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.inner, &b.inner)
    }
}

impl Deref for DefaultClassifier {
    type Target = TableClassifier;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl AsRef<TableClassifier> for DefaultClassifier {
    fn as_ref(&self) -> &TableClassifier {
        &self.inner
    }
}

impl Classifier for DefaultClassifier {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn radius(&self, residue: &str, atom: &str) -> Result<Option<f64>, ClassifierError> {
        self.inner.radius(residue, atom)
    }

    fn classify(&self, residue: &str, atom: &str) -> Option<usize> {
        self.inner.classify(residue, atom)
    }

    fn class_name(&self, class: usize) -> Result<&str, ClassifierError> {
        self.inner.class_name(class)
    }

    fn class_count(&self) -> usize {
        self.inner.class_count()
    }
}

impl Clone for DefaultClassifier {
    fn clone(&self) -> Self {
        let mut slot = lock_slot();
        slot.refcount += 1;
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Drop for DefaultClassifier {
    fn drop(&mut self) {
        release_slot();
    }
}

/// Acquires a handle to the shared default classifier, building it if no
/// handle is currently alive.
///
/// # Errors
///
/// Returns [`ClassifierError::Build`] if the classifier cannot be built. The
/// shared state is left uninitialized in that case.
pub fn acquire_default() -> Result<DefaultClassifier, ClassifierError> {
    acquire_with(TableClassifier::protor)
}

/// Releases a handle. Equivalent to dropping it.
pub fn release_default(handle: DefaultClassifier) {
    drop(handle);
}

/// Number of live handles to the default classifier.
pub fn default_refcount() -> usize {
    lock_slot().refcount
}

fn acquire_with<F, E>(build: F) -> Result<DefaultClassifier, ClassifierError>
where
    F: FnOnce() -> Result<TableClassifier, E>,
    ClassifierError: From<E>,
{
    let mut slot = lock_slot();
    let instance = match &slot.instance {
        Some(instance) => Arc::clone(instance),
        None => {
            let built = Arc::new(build()?);
            info!(classifier = built.name(), "Default classifier initialized.");
            slot.instance = Some(Arc::clone(&built));
            built
        }
    };
    slot.refcount += 1;
    debug!(refcount = slot.refcount, "Default classifier acquired.");
    Ok(DefaultClassifier { inner: instance })
}

fn release_slot() {
    let mut slot = lock_slot();
    if slot.refcount == 0 {
        warn!("Default classifier released more often than acquired; ignoring.");
        return;
    }
    slot.refcount -= 1;
    debug!(refcount = slot.refcount, "Default classifier released.");
    if slot.refcount == 0 {
        slot.instance = None;
        info!("Default classifier destroyed.");
    }
}
