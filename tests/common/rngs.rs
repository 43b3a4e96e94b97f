//! Stub random generators for driving reply selection in tests.

use rand::RngCore;

/// Deterministic generator cycling through a scripted list of values.
///
/// Seeding it with values spread evenly across the `u64` range makes the
/// uniform-int sampler land on every index of a small reply list, which
/// is how tests prove no configured reply is unreachable.
pub struct ScriptedRng {
    values: Vec<u64>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u64>) -> Self {
        assert!(!values.is_empty(), "scripted RNG needs at least one value");
        Self { values, pos: 0 }
    }

    /// `count` values spread evenly across the full `u64` range.
    pub fn sweeping(count: usize) -> Self {
        let stride = u64::MAX / count as u64;
        Self::new((0..count as u64).map(|k| k * stride).collect())
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
