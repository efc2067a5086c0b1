//! Seeded derivation primitives.

/// Hash of `domain + seed` — reseeds the rolling hash per metric name so
/// metrics sharing one idea seed are not perfectly correlated.
pub fn domain_hash(seed: &str, domain: &str) -> u32 {
    let mut hash: i32 = 0;
    for ch in domain.chars().chain(seed.chars()) {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }
    hash.unsigned_abs()
}

/// Map the domain hash into `[min, max)` by modulo.
pub fn score_in_range(seed: &str, domain: &str, min: u32, max: u32) -> u32 {
    debug_assert!(max > min);
    min + domain_hash(seed, domain) % (max - min)
}

/// Deterministic category selection: `choices[hash % len]`.
pub fn pick<'a, T>(seed: &str, domain: &str, choices: &'a [T]) -> &'a T {
    &choices[domain_hash(seed, domain) as usize % choices.len()]
}

/// Explicit seeded PRNG for order-sensitive selections.
///
/// A plain LCG: cheap, portable, and — the property that matters here —
/// identical sequences for identical seeds on every platform. Not suitable
/// for anything security-adjacent.
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seed from an idea hash under a domain name.
    pub fn for_domain(seed: &str, domain: &str) -> Self {
        Self::new(domain_hash(seed, domain))
    }

    pub fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG constants
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    pub fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        self.next_u32() as usize % len
    }

    /// Pick up to `n` distinct items from `pool`, in draw order.
    pub fn sample<'a, T>(&mut self, pool: &'a [T], n: usize) -> Vec<&'a T> {
        let n = n.min(pool.len());
        let mut picked: Vec<usize> = Vec::with_capacity(n);
        // Bounded attempts: duplicates are skipped, never looped on forever.
        let mut attempts = 0;
        while picked.len() < n && attempts < pool.len() * 8 {
            let idx = self.next_index(pool.len());
            if !picked.contains(&idx) {
                picked.push(idx);
            }
            attempts += 1;
        }
        picked.into_iter().map(|i| &pool[i]).collect()
    }
}
