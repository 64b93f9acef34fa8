//! Short-read handling shared by the decoder stages.

use std::io::{self, Read};

use crate::error::{BmfError, Section};

/// Map an I/O error from `section` to a decode error.
pub(crate) fn truncated(err: io::Error, section: Section, needed: usize) -> BmfError {
    if err.kind() == io::ErrorKind::UnexpectedEof {
        BmfError::TruncatedInput { section, needed }
    } else {
        BmfError::Io(err)
    }
}

/// Fill `buf` completely or fail with [`BmfError::TruncatedInput`].
pub(crate) fn read_section<R: Read>(
    reader: &mut R,
    buf: &mut [u8],
    section: Section,
) -> Result<(), BmfError> {
    reader
        .read_exact(buf)
        .map_err(|e| truncated(e, section, buf.len()))
}

/// Read exactly `len` bytes into a new vector.
pub(crate) fn read_vec<R: Read>(
    reader: &mut R,
    len: usize,
    section: Section,
) -> Result<Vec<u8>, BmfError> {
    let mut buf = vec![0u8; len];
    read_section(reader, &mut buf, section)?;
    Ok(buf)
}
