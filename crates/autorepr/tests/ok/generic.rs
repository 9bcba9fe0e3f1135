use autorepr::{Augmented, Repr, ReprCache, augment};

#[derive(Augmented)]
struct Pair<T> {
    left: T,
    right: T,
    repr: ReprCache,
}

#[augment]
impl<T: Repr> Pair<T> {
    pub fn new(left: T, right: T) -> Self {
        Pair {
            left,
            right,
            repr: ReprCache::new(),
        }
    }
}

fn main() {
    assert_eq!(Pair::new(1_i32, 2).render(), "Pair(1, 2)");
    assert_eq!(Pair::new("a", "b").render(), "Pair(\"a\", \"b\")");
}
