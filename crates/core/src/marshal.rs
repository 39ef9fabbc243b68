//! Argument validation and copy-in/write-back helpers shared by every bridge
//! operation.

use crate::error::BindingError;
use crate::native::ManyLayout;

/// Null check for a required reference argument.
pub(crate) fn require<T>(
    value: Option<T>,
    parameter: &'static str,
    function: &'static str,
) -> Result<T, BindingError> {
    value.ok_or(BindingError::NullArgument {
        parameter,
        function,
    })
}

/// Null check for a single-element out array; an empty array is rejected too.
pub(crate) fn require_out<'a, T>(
    value: Option<&'a mut [T]>,
    parameter: &'static str,
    function: &'static str,
) -> Result<&'a mut [T], BindingError> {
    let out = require(value, parameter, function)?;
    if out.is_empty() {
        return Err(BindingError::EmptyOutParameter {
            parameter,
            function,
        });
    }
    Ok(out)
}

/// Stores a native `size_t` work size into a host `long[]`.
pub(crate) fn write_work_size(out: &mut [i64], work_size: usize) {
    out[0] = work_size as i64;
}

/// Natively addressable copies of the `n`, `inembed` and `onembed`
/// descriptor arrays.
///
/// Lives for exactly one native call; the storage is released when the value
/// goes out of scope.
pub(crate) struct Descriptors<T> {
    n: Box<[T]>,
    inembed: Option<Box<[T]>>,
    onembed: Option<Box<[T]>>,
}

impl<T: Copy> Descriptors<T> {
    pub(crate) fn copy_in(n: &[T], inembed: Option<&[T]>, onembed: Option<&[T]>) -> Self {
        Self {
            n: n.into(),
            inembed: inembed.map(Into::into),
            onembed: onembed.map(Into::into),
        }
    }

    pub(crate) fn layout(
        &mut self,
        rank: i32,
        istride: T,
        idist: T,
        ostride: T,
        odist: T,
        batch: T,
    ) -> ManyLayout<'_, T> {
        ManyLayout {
            rank,
            n: &mut self.n,
            inembed: self.inembed.as_deref_mut(),
            istride,
            idist,
            onembed: self.onembed.as_deref_mut(),
            ostride,
            odist,
            batch,
        }
    }
}
