/// Lock around the register driver shared by all [`Device`][crate::Device] handles.
///
/// A 16-bit access is two bus transactions and [`Driver`][crate::Driver] does no locking itself.
/// [`Xra1201`][crate::Xra1201] therefore stores its driver behind one of these, and every handle
/// method keeps it locked from the low-byte transaction until the high-byte one is done.
///
/// Provided implementations:
///
/// | Mutex | Feature Name | Notes |
/// | --- | --- | --- |
/// | [`core::cell::RefCell`] | _always available_ | Single execution context, panics on re-entry. |
/// | [`std::sync::Mutex`][mutex-std] | `std` | Hosted targets. |
/// | [`critical_section::Mutex`][mutex-cs] | `critical-section` | Access from interrupt handlers. |
///
/// [mutex-std]: https://doc.rust-lang.org/std/sync/struct.Mutex.html
/// [mutex-cs]: https://docs.rs/critical-section/latest/critical_section/struct.Mutex.html
///
/// Any other lock works through a newtype (the orphan rule forbids a direct impl on a foreign
/// type), e.g. for `spin::Mutex` or an RTOS mutex:
///
/// ```
/// struct HostLock<T>(std::sync::Mutex<T>);
///
/// impl<T> xra1201::DriverMutex for HostLock<T> {
///     type Driver = T;
///
///     fn create(driver: Self::Driver) -> Self {
///         HostLock(std::sync::Mutex::new(driver))
///     }
///
///     fn lock<R, F: FnOnce(&mut Self::Driver) -> R>(&self, f: F) -> R {
///         f(&mut self.0.lock().unwrap())
///     }
/// }
/// ```
pub trait DriverMutex {
    /// What the lock guards, normally a [`Driver`][crate::Driver].
    type Driver;

    /// Move `v` behind a fresh lock.
    fn create(v: Self::Driver) -> Self;

    /// Call `f` while holding the lock and hand back its result.
    ///
    /// Implementations block (or panic, for `RefCell`) when the lock is already held.
    fn lock<R, F: FnOnce(&mut Self::Driver) -> R>(&self, f: F) -> R;
}

impl<T> DriverMutex for core::cell::RefCell<T> {
    type Driver = T;

    fn create(driver: Self::Driver) -> Self {
        core::cell::RefCell::new(driver)
    }

    fn lock<R, F: FnOnce(&mut Self::Driver) -> R>(&self, f: F) -> R {
        f(&mut self.borrow_mut())
    }
}

#[cfg(any(test, feature = "std"))]
impl<T> DriverMutex for std::sync::Mutex<T> {
    type Driver = T;

    fn create(driver: Self::Driver) -> Self {
        std::sync::Mutex::new(driver)
    }

    fn lock<R, F: FnOnce(&mut Self::Driver) -> R>(&self, f: F) -> R {
        // a poisoned lock only means another handle panicked mid-access
        let mut guard = self.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard)
    }
}

#[cfg(feature = "critical-section")]
impl<T> DriverMutex for critical_section::Mutex<core::cell::RefCell<T>> {
    type Driver = T;

    fn create(driver: Self::Driver) -> Self {
        critical_section::Mutex::new(core::cell::RefCell::new(driver))
    }

    fn lock<R, F: FnOnce(&mut Self::Driver) -> R>(&self, f: F) -> R {
        critical_section::with(|cs| f(&mut self.borrow_ref_mut(cs)))
    }
}
