#[derive(Debug)]
pub struct MapInPlace<'a> {
    buf: &'a mut Vec<u8>,
    mapped_head: usize,
    unmapped_head: usize,
}

impl std::ops::Drop for MapInPlace<'_> {
    fn drop(&mut self) {
        self.buf.truncate(self.mapped_head);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoCapacityError;

impl std::fmt::Display for NoCapacityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("mapped portion would overtake the unmapped portion")
    }
}

impl std::error::Error for NoCapacityError {}

impl<'a> MapInPlace<'a> {
    /// Creates a new `MapInPlace`, used to rewrite a byte buffer front to back without allocating
    /// a second one.
    ///
    /// This can only be done if the conversion never produces more bytes than it has consumed so
    /// far. Once the `MapInPlace` is dropped, `buf` is truncated to the mapped portion.
    pub fn new(buf: &'a mut Vec<u8>) -> Self {
        MapInPlace {
            buf,
            mapped_head: 0,
            unmapped_head: 0,
        }
    }

    /// Reads the mapped portion of the buffer
    pub fn mapped(&self) -> &[u8] {
        &self.buf[..self.mapped_head]
    }

    /// Reads the unmapped portion of the buffer
    pub fn unmapped(&self) -> &[u8] {
        &self.buf[self.unmapped_head..]
    }

    /// Number of bytes written so far.
    pub fn mapped_len(&self) -> usize {
        self.mapped_head
    }

    /// Offset of the next unread byte, counted from the start of the original buffer.
    pub fn unmapped_offset(&self) -> usize {
        self.unmapped_head
    }

    /// Pushes a byte onto the end of the mapped portion. Will return [`Err(NoCapacityError)`]
    /// if there is no room.
    pub fn push(&mut self, byte: u8) -> Result<(), NoCapacityError> {
        if self.mapped_head >= self.unmapped_head {
            return Err(NoCapacityError);
        }

        *self.buf.get_mut(self.mapped_head).ok_or(NoCapacityError)? = byte;
        self.mapped_head += 1;

        Ok(())
    }

    /// Pops a byte from the start of the unmapped portion
    pub fn pop(&mut self) -> Option<u8> {
        let byte = *self.unmapped().first()?;

        self.unmapped_head += 1;

        Some(byte)
    }

    /// Pops exactly `n` bytes from the start of the unmapped portion
    ///
    /// If `n` is 0 then will always return [`None`]
    ///
    /// If this fails then `unmapped` will contain what can be popped, and no changes will have
    /// been made to `self`.
    pub fn pop_bytes(&mut self, n: usize) -> Option<&[u8]> {
        if n == 0 || self.unmapped().len() < n {
            return None;
        }

        let start = self.unmapped_head;
        self.unmapped_head += n;

        Some(&self.buf[start..start + n])
    }
}
