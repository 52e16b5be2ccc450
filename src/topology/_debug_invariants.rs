/// Audits a structure after a mutation when one of the invariant-checking
/// features is on; compiles to nothing otherwise.
#[cfg(any(feature = "strict-invariants", feature = "check-invariants"))]
macro_rules! debug_invariants {
    ($s:expr) => {
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants(&*$s);
    };
}

#[cfg(not(any(feature = "strict-invariants", feature = "check-invariants")))]
macro_rules! debug_invariants {
    ($s:expr) => {
        ()
    };
}

pub(crate) use debug_invariants;
