use autorepr::{Augmented, ReprCache, augment};

#[derive(Augmented)]
struct Counter {
    count: u32,
    repr: ReprCache,
}

#[augment]
impl Counter {
    pub fn new(count: u32) -> Self {
        Counter {
            count,
            repr: ReprCache::new(),
        }
    }

    // not constructors: left untouched by the attribute
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn bump(&mut self) {
        self.count += 1;
    }

    pub fn limit() -> u32 {
        u32::MAX
    }
}

fn main() {
    let mut c = Counter::new(1);
    c.bump();
    assert_eq!(c.count(), 2);
    assert_eq!(Counter::limit(), u32::MAX);
    assert_eq!(c.render(), "Counter(1)");
}
