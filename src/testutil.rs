//! Deterministic random sources for unit tests

use rand::RngCore;

/// RNG replaying a fixed sequence of raw u64 draws, wrapping around
pub(crate) struct SequenceRng {
    values: Vec<u64>,
    index: usize,
}

impl SequenceRng {
    pub(crate) fn new(values: Vec<u64>) -> Self {
        Self { values, index: 0 }
    }
}

impl RngCore for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
