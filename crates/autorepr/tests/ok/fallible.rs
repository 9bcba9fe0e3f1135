use autorepr::{Augmented, ReprCache, augment};

#[derive(Debug)]
struct Empty;

#[derive(Augmented)]
struct Name {
    value: String,
    repr: ReprCache,
}

#[augment]
impl Name {
    pub fn new(value: String) -> Result<Self, Empty> {
        if value.is_empty() {
            return Err(Empty);
        }
        Ok(Name {
            value,
            repr: ReprCache::new(),
        })
    }
}

fn main() {
    let n = Name::new("ada".to_string()).unwrap();
    assert_eq!(n.render(), "Name(\"ada\")");
    assert!(Name::new(String::new()).is_err());
}
