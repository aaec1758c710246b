use pinocchio::{program_error::ProgramError, pubkey::Pubkey};

/// Cursor over an instruction payload.
///
/// Integers are little-endian; strings are a `u8` length followed by UTF-8 bytes.
/// Every read past the end fails with `InvalidInstructionData`.
pub struct PayloadReader<'a> {
    data: &'a [u8],
    offset: usize,
}

impl<'a> PayloadReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, offset: 0 }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8], ProgramError> {
        let end = self
            .offset
            .checked_add(len)
            .ok_or(ProgramError::InvalidInstructionData)?;
        let bytes = self
            .data
            .get(self.offset..end)
            .ok_or(ProgramError::InvalidInstructionData)?;
        self.offset = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, ProgramError> {
        Ok(self.take(1)?[0])
    }

    pub fn read_u64(&mut self) -> Result<u64, ProgramError> {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(self.take(8)?);
        Ok(u64::from_le_bytes(buf))
    }

    pub fn read_pubkey(&mut self) -> Result<Pubkey, ProgramError> {
        Pubkey::try_from(self.take(32)?).map_err(|_| ProgramError::InvalidInstructionData)
    }

    pub fn read_str(&mut self) -> Result<&'a str, ProgramError> {
        let len = self.read_u8()? as usize;
        core::str::from_utf8(self.take(len)?).map_err(|_| ProgramError::InvalidInstructionData)
    }

    /// Trailing bytes are an error.
    pub fn finish(self) -> Result<(), ProgramError> {
        if self.offset != self.data.len() {
            return Err(ProgramError::InvalidInstructionData);
        }
        Ok(())
    }
}

/// Append-only writer over a fixed buffer (events are built without an allocator).
pub struct ByteWriter<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> ByteWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, len: 0 }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), ProgramError> {
        let end = self.len + bytes.len();
        self.buf
            .get_mut(self.len..end)
            .ok_or(ProgramError::InvalidArgument)?
            .copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), ProgramError> {
        self.write_bytes(&[value])
    }

    pub fn write_u64(&mut self, value: u64) -> Result<(), ProgramError> {
        self.write_bytes(&value.to_le_bytes())
    }

    pub fn write_pubkey(&mut self, key: &Pubkey) -> Result<(), ProgramError> {
        self.write_bytes(key.as_ref())
    }

    pub fn write_str(&mut self, value: &str) -> Result<(), ProgramError> {
        let len = u8::try_from(value.len()).map_err(|_| ProgramError::InvalidArgument)?;
        self.write_u8(len)?;
        self.write_bytes(value.as_bytes())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
