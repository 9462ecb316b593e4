//! Random selection over a parsed record set: uniform single picks and
//! distinct-batch draws, both driven by a seeded deterministic RNG so repeated
//! runs reproduce the same sequence of selections.

use rand::seq::{index, IndexedRandom};

use crate::record::FileRecord;

/// Small deterministic RNG (splitmix64) used for reproducible sampling.
#[derive(Debug, Clone)]
struct DeterministicRng {
    state: u64,
}

impl DeterministicRng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u64_internal(&mut self) -> u64 {
        let mut z = self.state.wrapping_add(0x9E3779B97F4A7C15);
        self.state = z;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }
}

impl rand::RngCore for DeterministicRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64_internal() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u64_internal()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut offset = 0;
        while offset < dest.len() {
            let value = self.next_u64_internal();
            let bytes = value.to_le_bytes();
            let remaining = dest.len() - offset;
            let copy_len = remaining.min(bytes.len());
            dest[offset..offset + copy_len].copy_from_slice(&bytes[..copy_len]);
            offset += copy_len;
        }
    }
}

/// Uniform sampler over record slices.
#[derive(Debug, Clone)]
pub struct BatchSampler {
    rng: DeterministicRng,
}

impl BatchSampler {
    /// Create a sampler with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: DeterministicRng::new(seed),
        }
    }

    /// Pick one record uniformly at random, with replacement relative to
    /// prior picks. Empty input is a silent no-op.
    pub fn pick_one<'r>(&mut self, records: &'r [FileRecord]) -> Option<&'r FileRecord> {
        records.choose(&mut self.rng)
    }

    /// Draw `min(count, records.len())` distinct records uniformly at random
    /// without replacement. Same distribution as the rejection loop the UI
    /// used, but index sampling always terminates.
    pub fn draw(&mut self, records: &[FileRecord], count: usize) -> Vec<FileRecord> {
        if records.is_empty() || count == 0 {
            return Vec::new();
        }
        let amount = count.min(records.len());
        index::sample(&mut self.rng, records.len(), amount)
            .iter()
            .map(|idx| records[idx].clone())
            .collect()
    }
}
