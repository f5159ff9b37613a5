//! Input patterns for exercising sorts. All values are `i32`.
//!
//! Random patterns draw from a generator seeded once per process. Set `OVERRIDE_SEED` to replay
//! a failing run, the seed in use is printed by the test harness.

use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let dist: Uniform<i32> = range.into();
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // :
    // :.
    // ::..  . .

    if len == 0 {
        return Vec::new();
    }

    let dist = ZipfDistribution::new(len, exponent).expect("valid zipf parameters");
    let mut rng = new_rng();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [sorted][random]

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len.min(len)].sort_unstable();
    v
}

pub fn random_narrow(len: usize) -> Vec<i32> {
    // . .:. :.
    // :::::.::
    // Values in `0..=log2(len) * 100`, at least `0..=100`.

    let log_len = (len.max(2) as f64).log2().round() as i32;
    random_uniform(len, 0..=log_len * 100)
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    saw(len, saw_count, |_| true)
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    saw(len, saw_count, |_| false)
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    let directions = random_uniform(saw_count.max(1) + 1, 0..=1);
    saw(len, saw_count, |i| directions.get(i).map_or(true, |&d| d == 0))
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|x, y| y.cmp(x));
    v
}

/// The seed every random pattern of this process derives from.
pub fn random_init_seed() -> u64 {
    static SEED: OnceCell<u64> = OnceCell::new();

    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED is not a u64: {seed}")),
        Err(_) => thread_rng().gen(),
    })
}

// --- Private ---

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Random values split into `saw_count` chunks, chunk `i` sorted ascending if `ascending(i)`.
fn saw(len: usize, saw_count: usize, ascending: impl Fn(usize) -> bool) -> Vec<i32> {
    let mut v = random(len);
    if len == 0 {
        return v;
    }

    let chunk_len = (len / saw_count.max(1)).max(1);
    for (i, chunk) in v.chunks_mut(chunk_len).enumerate() {
        if ascending(i) {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|x, y| y.cmp(x));
        }
    }

    v
}
