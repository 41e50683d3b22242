/// Duel selection: two distinct items drawn uniformly at random.
///
/// Stateless. Repeats across calls are allowed; there is no memory of which
/// pairs were already shown.
use rand::Rng;

/// Pick two distinct items using the thread-local RNG.
///
/// `items` must hold at least two distinct entries; `Catalog` guarantees that.
pub fn pick_pair(items: &[String]) -> (&str, &str) {
    let mut rng = rand::rng();
    pick_pair_with(items, &mut rng)
}

/// Pick two distinct items using the caller's RNG.
///
/// Draws the first item, then redraws the second until it differs.
pub fn pick_pair_with<'a>(items: &'a [String], rng: &mut impl Rng) -> (&'a str, &'a str) {
    debug_assert!(items.len() >= 2, "pick_pair needs at least two items");

    let a = &items[rng.random_range(0..items.len())];
    let mut b = a;
    while b == a {
        b = &items[rng.random_range(0..items.len())];
    }
    (a.as_str(), b.as_str())
}
