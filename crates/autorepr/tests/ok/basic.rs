use autorepr::{Augmented, ReprCache, augment};

#[derive(Augmented)]
struct Point {
    x: i64,
    y: i64,
    repr: ReprCache,
}

#[augment]
impl Point {
    pub fn new(x: i64, #[named] y: i64) -> Self {
        Point {
            x,
            y,
            repr: ReprCache::new(),
        }
    }
}

fn main() {
    let p = Point::new(3, 4);
    assert_eq!(p.render(), "Point(3, y = 4)");
    assert_eq!(p.to_string(), "Point(3, y = 4)");
}
