//! List checks command implementation.

use lookmlint_rules::Check;

/// Runs the list-checks command.
pub fn run() {
    println!("Available checks:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for check in Check::ALL {
        println!(
            "{:<10} {:<25} {}",
            check.code(),
            check.name(),
            check.description()
        );
    }

    println!("\nUse --checks to run specific checks, e.g.:");
    println!("  lookmlint lint --checks unused-includes,primary-keys");
    println!("  lookmlint lint --checks LK004,LK003");
}
