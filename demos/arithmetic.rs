use fixarray::{ArithmeticOperator, FixedArray, Print, fixed};

fn main() {
    // Create two arrays
    let a: FixedArray<i32, 3> = fixed![10, 20, 30];
    let b: FixedArray<i32, 3> = fixed![2, 4, 6];

    println!("Testing arithmetic operators with FixedArray:");
    println!("a = [10, 20, 30]");
    println!("b = [2, 4, 6]");
    println!();

    // Element-wise
    println!("Addition (a + b): {:?}", (a + b).data);
    println!("Subtraction (a - b): {:?}", (a - b).data);
    println!("Multiplication (a * b): {:?}", (a * b).data);
    println!("Division (a / b): {:?}", (a / b).data);

    // Broadcast
    println!("Broadcast (a * 3): {:?}", (a * 3i32).data);

    // Promotion to the common type
    let scaled = a * 0.25f64;
    println!("Promoted (a * 0.25f64):");
    scaled.print();

    // Compound assignment
    let mut c = a;
    c -= b;
    println!("Compound (a -= b): {:?}", c.data);

    // Checked kernels report instead of panicking
    let big: FixedArray<i32, 2> = fixed![i32::MAX, 1];
    match big.checked_add(1i32) {
        Ok(sum) => println!("Checked sum: {:?}", sum.data),
        Err(e) => println!(
            "Checked {} ({}) failed: {}",
            ArithmeticOperator::Add,
            ArithmeticOperator::Add.symbol(),
            e
        ),
    }

    println!("\nAll arithmetic operators work correctly!");
}
