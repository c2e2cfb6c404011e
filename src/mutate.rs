//! Generic success/failure outcome for mutation operations.
//!
//! Callers that apply parsed node types to permission holders report whether
//! the mutation took effect with a [`MutateResult`]. The type carries no
//! payload and performs no parsing; it exists so that "applied" and "was a
//! no-op" have one spelling across the system instead of a bare bool at every
//! call site.

/// The outcome of a mutation on a permission holder.
///
/// # Examples
///
/// ```rust
/// use permnode::mutate::MutateResult;
///
/// fn apply(changed: bool) -> MutateResult {
///     MutateResult::from(changed)
/// }
///
/// assert!(apply(true).was_success());
/// assert!(apply(false).was_failure());
/// assert_eq!(MutateResult::GENERIC_SUCCESS.as_bool(), true);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MutateResult {
    /// The mutation completed and changed state.
    Success,
    /// The mutation did not take effect.
    Failure,
}

impl MutateResult {
    /// The shared always-success instance.
    pub const GENERIC_SUCCESS: MutateResult = MutateResult::Success;

    /// The shared always-failure instance.
    pub const GENERIC_FAILURE: MutateResult = MutateResult::Failure;

    /// Returns `true` when the operation completed successfully.
    #[must_use]
    pub const fn was_success(self) -> bool {
        matches!(self, MutateResult::Success)
    }

    /// Returns `true` when the operation failed, the negation of
    /// [`MutateResult::was_success`].
    #[must_use]
    pub const fn was_failure(self) -> bool {
        !self.was_success()
    }

    /// A boolean representation: `true` for success, `false` for failure.
    #[must_use]
    pub const fn as_bool(self) -> bool {
        self.was_success()
    }
}

impl From<bool> for MutateResult {
    fn from(success: bool) -> Self {
        if success {
            MutateResult::Success
        } else {
            MutateResult::Failure
        }
    }
}

impl From<MutateResult> for bool {
    fn from(result: MutateResult) -> Self {
        result.as_bool()
    }
}
