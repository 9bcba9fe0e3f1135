use autorepr::{Augmented, ReprCache, augment};

fn describe(token: &Token) -> String {
    format!("<token {}>", token.id)
}

#[derive(Augmented)]
#[augmented(render_with = "describe")]
struct Token {
    id: u32,
    repr: ReprCache,
}

#[augment]
impl Token {
    pub fn new(id: u32) -> Self {
        Token {
            id,
            repr: ReprCache::new(),
        }
    }
}

fn main() {
    let t = Token::new(7);
    assert_eq!(t.render(), "<token 7>");
    assert_eq!(t.repr_cache().rendered(), Some("Token(7)"));
}
