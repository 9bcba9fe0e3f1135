//! End-to-end behavior of captured constructor representations.

use autorepr::{Augmented, CaptureError, Repr, ReprCache, augment};
use expect_test::expect;

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Augmented, Clone, Debug, PartialEq)]
struct Point {
    x: i64,
    y: i64,
    repr: ReprCache,
}

#[augment]
impl Point {
    fn new(x: i64, #[named] y: i64) -> Self {
        Point {
            x,
            y,
            repr: ReprCache::new(),
        }
    }
}

#[derive(Augmented)]
struct Origin {
    repr: ReprCache,
}

#[augment]
impl Origin {
    fn new() -> Self {
        Origin {
            repr: ReprCache::new(),
        }
    }
}

#[derive(Augmented)]
struct Inner {
    tag: char,
    repr: ReprCache,
}

#[augment]
impl Inner {
    fn new(tag: char) -> Self {
        Inner {
            tag,
            repr: ReprCache::new(),
        }
    }
}

#[derive(Augmented)]
struct Outer {
    inner: Inner,
    repr: ReprCache,
}

#[augment]
impl Outer {
    fn new(inner: Inner) -> Self {
        Outer {
            inner,
            repr: ReprCache::new(),
        }
    }
}

#[derive(Augmented)]
struct Wide {
    inner: Point,
    repr: ReprCache,
}

#[augment]
impl Wide {
    fn new(inner: Point) -> Self {
        Wide {
            inner,
            repr: ReprCache::new(),
        }
    }
}

#[derive(Augmented)]
struct Tagged<T> {
    value: T,
    repr: ReprCache,
}

#[augment]
impl<T: Repr> Tagged<T> {
    fn new(value: T) -> Self {
        Tagged {
            value,
            repr: ReprCache::new(),
        }
    }
}

fn render_loud(_: &Loud) -> String {
    "LOUD".to_string()
}

#[derive(Augmented)]
#[augmented(render_with = "render_loud")]
struct Loud {
    level: i64,
    repr: ReprCache,
}

#[augment]
impl Loud {
    fn new(level: i64) -> Self {
        Loud {
            level,
            repr: ReprCache::new(),
        }
    }
}

#[derive(Debug, PartialEq)]
struct ZeroDenominator;

#[derive(Augmented, Debug)]
struct Ratio {
    numerator: i64,
    denominator: i64,
    repr: ReprCache,
}

#[augment]
impl Ratio {
    fn new(numerator: i64, denominator: i64) -> Result<Self, ZeroDenominator> {
        if denominator == 0 {
            return Err(ZeroDenominator);
        }
        Ok(Ratio {
            numerator,
            denominator,
            repr: ReprCache::new(),
        })
    }
}

#[derive(Augmented)]
struct Doubled {
    value: i64,
    repr: ReprCache,
}

#[augment]
#[augment]
impl Doubled {
    fn new(value: i64) -> Self {
        Doubled {
            value,
            repr: ReprCache::new(),
        }
    }
}

#[derive(Augmented)]
struct Sample {
    flag: bool,
    scale: f64,
    label: String,
    items: Vec<u32>,
    note: Option<&'static str>,
    repr: ReprCache,
}

#[augment]
impl Sample {
    fn new(
        flag: bool,
        scale: f64,
        label: String,
        items: Vec<u32>,
        #[named] note: Option<&'static str>,
    ) -> Self {
        Sample {
            flag,
            scale,
            label,
            items,
            note,
            repr: ReprCache::new(),
        }
    }
}

#[test]
fn simple_call_renders_positional_and_named() {
    init_logs();
    let p = Point::new(3, 4);
    expect![["Point(3, y = 4)"]].assert_eq(&p.render());
    assert_eq!(p.to_string(), "Point(3, y = 4)");
    assert_eq!(format!("{p}"), "Point(3, y = 4)");
}

#[test]
fn zero_arguments_render_as_bare_call() {
    assert_eq!(Origin::new().render(), "Origin()");
}

#[test]
fn nested_augmented_arguments_render_recursively() {
    let o = Outer::new(Inner::new('x'));
    expect![["Outer(Inner('x'))"]].assert_eq(&o.render());
}

#[test]
fn wrapper_renders_under_its_own_name() {
    let w = Wide::new(Point::new(3, 4));
    assert_eq!(w.render(), "Wide(Point(3, y = 4))");
}

#[test]
fn generic_type_renders_with_bare_name() {
    assert_eq!(Tagged::new(7_i64).render(), "Tagged(7)");
    assert_eq!(Tagged::new("s").render(), "Tagged(\"s\")");
}

#[test]
fn render_override_wins_over_the_cache() {
    let l = Loud::new(2);
    assert_eq!(l.render(), "LOUD");
    assert_eq!(l.to_string(), "LOUD");
    // the capture still happened; it is just never read
    assert_eq!(l.repr_cache().rendered(), Some("Loud(2)"));
    // nesting goes through the override as well
    assert_eq!(Tagged::new(Loud::new(2)).render(), "Tagged(LOUD)");
}

#[test]
fn render_is_idempotent_and_ignores_mutation() {
    let mut p = Point::new(3, 4);
    let first = p.render();
    p.x = 99;
    p.y = -1;
    assert_eq!(p.render(), first);
    assert_eq!(p.render(), first);
}

#[test]
fn rendered_expression_reinvokes_to_an_equal_value() {
    let p = Point::new(3, 4);
    let q = reinvoke_point(&p.render());
    assert_eq!(p, q);
    assert_eq!(p.render(), q.render());
}

fn reinvoke_point(rendered: &str) -> Point {
    let args = rendered
        .strip_prefix("Point(")
        .and_then(|rest| rest.strip_suffix(')'))
        .expect("a Point call expression");
    let (x, named) = args.split_once(", ").expect("two arguments");
    let y = named.strip_prefix("y = ").expect("a named y argument");
    Point::new(x.parse().unwrap(), y.parse().unwrap())
}

#[test]
fn fallible_constructor_primes_on_ok() {
    let r = Ratio::new(1, 2).unwrap();
    assert_eq!(r.render(), "Ratio(1, 2)");
}

#[test]
fn fallible_constructor_propagates_err() {
    assert_eq!(Ratio::new(1, 0).unwrap_err(), ZeroDenominator);
}

#[test]
fn double_augment_is_harmless() {
    init_logs();
    let d = Doubled::new(3);
    assert_eq!(d.render(), "Doubled(3)");
    assert!(d.repr_cache().is_primed());
}

#[test]
fn literal_construction_is_not_captured() {
    let p = Point {
        x: 1,
        y: 2,
        repr: ReprCache::new(),
    };
    assert_eq!(p.render(), "Point(..)");
}

#[test]
fn clones_carry_the_captured_expression() {
    let p = Point::new(3, 4);
    let mut c = p.clone();
    c.x = 0;
    assert_eq!(c.render(), "Point(3, y = 4)");
}

#[test]
fn priming_again_keeps_the_first_capture() {
    init_logs();
    let p = Point::new(3, 4);
    assert_eq!(
        p.repr_cache().prime("Point(9, y = 9)".to_string()),
        Err(CaptureError::AlreadyCaptured)
    );
    assert_eq!(p.render(), "Point(3, y = 4)");
}

#[test]
fn cache_does_not_take_part_in_equality() {
    let constructed = Point::new(3, 4);
    let literal = Point {
        x: 3,
        y: 4,
        repr: ReprCache::new(),
    };
    assert_eq!(constructed, literal);
}

#[test]
fn mixed_argument_types_render_in_call_order() {
    let s = Sample::new(true, 0.5, "tag".to_string(), vec![1, 2], Some("n"));
    expect![[r#"Sample(true, 0.5, "tag", [1, 2], note = Some("n"))"#]].assert_eq(&s.render());
}

#[test]
fn instances_cross_threads_with_their_capture() {
    let p = std::thread::spawn(|| Point::new(1, 2)).join().unwrap();
    assert_eq!(p.render(), "Point(1, y = 2)");
}
