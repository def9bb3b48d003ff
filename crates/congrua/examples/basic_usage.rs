//! Basic usage of congruence classes and residue rings.
//!
//! Run with: `cargo run --example basic_usage`

use congrua::{CongruenceClass, CongruenceError, CongruenceSet, Z};

fn main() -> Result<(), CongruenceError> {
    // Arithmetic in Z/7Z.
    let a = CongruenceClass::new(3, 7)?;
    let b = CongruenceClass::new(5, 7)?;
    println!("{a} + {b} = {}", &a + &b);
    println!("{a} * {b} = {}", &a * &b);
    println!("{a}^(-1) = {}", a.inverse()?);
    println!("{a} / {b} = {}", &a / &b);
    println!("{a}^1000 = {}", a.pow_i64(1000)?);

    // Membership and iteration.
    println!("members of {a}: {:?}", a.members().take(5).collect::<Vec<_>>());
    println!("4 in {a}? {}", a.contains(4));
    println!("10 in {a}? {}", a.contains(10));

    // The ring Z/4Z.
    let ring = CongruenceSet::new(4)?;
    println!("{ring} has {} classes:", ring.order());
    for class in &ring {
        println!("  {class}");
    }

    // Chinese remainder intersection, including a disjoint pair.
    let x = CongruenceClass::new(23, 100)?;
    let y = CongruenceClass::new(31, 49)?;
    match x.intersect(&y) {
        Some(combined) => println!("{x} & {y} = {combined}"),
        None => println!("{x} & {y} is empty"),
    }

    let p = CongruenceClass::new(2, 10)?;
    let q = CongruenceClass::new(4, 20)?;
    match p.intersect(&q) {
        Some(combined) => println!("{p} & {q} = {combined}"),
        None => println!("{p} & {q} is empty"),
    }

    // Notation sugar.
    println!("17 + 23*Z = {}", 17 + 23 * Z);
    println!("Z/(7*Z) = {}", Z / (7 * Z));

    Ok(())
}
