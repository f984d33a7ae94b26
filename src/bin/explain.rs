// This binary explains allocator-aware construction on four representative targets: a plain
// aggregate whose arguments pass through, a leading-tag type, a trailing type and a pair of a
// plain integer and an arena string. For each scenario it prints the declared convention, the
// package shape the builder chooses and the value built from it against a shared Bump arena.
// The scenario is picked with --scenario; --verbose raises logging to trace so every
// construction reports its package shape, and RUST_LOG is honoured otherwise.

//! Allocator construction explainer.
//!
//! Prints the argument package chosen for a handful of representative target
//! types and builds each value from it against a `Bump` arena.

use bumpalo::collections::String as BumpString;
use bumpalo::Bump;
use clap::{Parser, ValueEnum};
use uses_alloc::{
    build_construction_args, convention_of, make_value, not_allocator_aware, package_shape,
    AllocatorArg, Construct, ConstructionTarget, Flat, LeadingTag, Pair, SelectConvention,
    Supports, UsesAllocator,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scenario {
    /// Plain aggregate, arguments pass through.
    A,
    /// Leading-tag allocator-aware type.
    B,
    /// Trailing allocator-aware type.
    C,
    /// Pair of a plain int and an arena string.
    D,
    All,
}

#[derive(Debug, Parser)]
#[command(name = "explain", about = "Show how an allocator is threaded into constructors")]
struct Cli {
    /// Scenario to explain.
    #[arg(short, long, value_enum, default_value = "all")]
    scenario: Scenario,

    /// Log every construction at trace level.
    #[arg(short, long)]
    verbose: bool,
}

struct Point {
    x: i32,
    y: i32,
}

not_allocator_aware!(Point);

impl Construct<(i32, i32)> for Point {
    fn construct((x, y): (i32, i32)) -> Self {
        Point { x, y }
    }
}

/// Accepts the arena in leading position only.
struct Widget<'b> {
    label: BumpString<'b>,
    id: i32,
}

impl UsesAllocator<Bump> for Widget<'_> {
    type Convention = LeadingTag;
}

impl ConstructionTarget<Bump> for Widget<'_> {
    type Dispatch = Flat;
}

impl<'b> Construct<(AllocatorArg, &'b Bump, i32)> for Widget<'b> {
    fn construct((_, bump, id): (AllocatorArg, &'b Bump, i32)) -> Self {
        Widget {
            label: BumpString::from_str_in("widget", bump),
            id,
        }
    }
}

/// Accepts the arena as its last argument only.
struct Gadget<'b> {
    readings: bumpalo::collections::Vec<'b, i32>,
}

impl UsesAllocator<Bump> for Gadget<'_> {
    type Convention = <Supports<false, true> as SelectConvention>::Selected;
}

impl ConstructionTarget<Bump> for Gadget<'_> {
    type Dispatch = Flat;
}

impl<'b> Construct<(i32, &'b Bump)> for Gadget<'b> {
    fn construct((first, bump): (i32, &'b Bump)) -> Self {
        let mut readings = bumpalo::collections::Vec::new_in(bump);
        readings.push(first);
        Gadget { readings }
    }
}

fn explain_a(arena: &Bump) {
    let package = build_construction_args::<Point, _, _>(arena, (3i32, 4i32));
    println!("A: Point {}", package_shape::<Point, Bump, (i32, i32)>());
    println!("   package {:?}", package);
    let point = Point::construct(package);
    println!("   built   Point {{ x: {}, y: {} }}", point.x, point.y);
}

fn explain_b(arena: &Bump) {
    let (tag, _, id) = build_construction_args::<Widget<'_>, _, _>(arena, (7i32,));
    println!(
        "B: Widget [{}] {}",
        convention_of::<Widget<'_>, Bump, (i32,)>(),
        package_shape::<Widget<'_>, Bump, (i32,)>()
    );
    println!("   package ({:?}, <arena>, {})", tag, id);
    let widget: Widget<'_> = make_value(arena, (7i32,));
    println!("   built   Widget {{ label: {:?}, id: {} }}", widget.label.as_str(), widget.id);
}

fn explain_c(arena: &Bump) {
    let (value, _) = build_construction_args::<Gadget<'_>, _, _>(arena, (7i32,));
    println!(
        "C: Gadget [{}] {}",
        convention_of::<Gadget<'_>, Bump, (i32,)>(),
        package_shape::<Gadget<'_>, Bump, (i32,)>()
    );
    println!("   package ({}, <arena>)", value);
    let gadget: Gadget<'_> = make_value(arena, (7i32,));
    println!("   built   Gadget {{ readings: {:?} }}", gadget.readings.as_slice());
}

fn explain_d(arena: &Bump) {
    let package = build_construction_args::<Pair<i32, BumpString<'_>>, _, _>(arena, (5i32, "x"));
    println!(
        "D: Pair<i32, String> {}",
        package_shape::<Pair<i32, BumpString<'_>>, Bump, (i32, &str)>()
    );
    println!(
        "   package piecewise[({},), ({:?}, <arena>)]",
        package.first.0, package.second.0
    );
    let pair: Pair<i32, BumpString<'_>> = make_value(arena, (5i32, "x"));
    println!("   built   Pair {{ first: {}, second: {:?} }}", pair.first, pair.second.as_str());
}

fn main() {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Trace);
    }
    logger.init();

    let arena = Bump::new();
    match cli.scenario {
        Scenario::A => explain_a(&arena),
        Scenario::B => explain_b(&arena),
        Scenario::C => explain_c(&arena),
        Scenario::D => explain_d(&arena),
        Scenario::All => {
            explain_a(&arena);
            explain_b(&arena);
            explain_c(&arena);
            explain_d(&arena);
        }
    }

    log::debug!("arena holds {} bytes", arena.allocated_bytes());
}
