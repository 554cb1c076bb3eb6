use binary_flag::{BinaryFlagError, MultipleBinaryFlag};

fn main() {
    simple_logger::init_with_level(log::Level::Debug).expect("A logger was already initialized");

    println!("=== Binary Flag Examples ===\n");

    // Example 1: Waiting for several sub-conditions
    if let Err(e) = example_checklist() {
        println!("  error: {e}");
    }

    // Example 2: Out-of-range input
    example_bounds();

    // Example 3: Release
    if let Err(e) = example_release() {
        println!("  error: {e}");
    }
}

fn example_checklist() -> Result<(), BinaryFlagError> {
    println!("Example 1: Startup checklist with 4 steps");

    const CONFIG: u64 = 0;
    const STORAGE: u64 = 1;
    const NETWORK: u64 = 2;
    const WORKERS: u64 = 3;

    let mut ready = MultipleBinaryFlag::with_default(4, false)?;

    for step in [CONFIG, STORAGE, NETWORK] {
        ready.set_flag(step)?;
        println!("  {} ready: {}", ready, ready.get_flag());
    }

    ready.set_flag(WORKERS)?;
    println!("  {} ready: {}", ready, ready.get_flag());

    // Network dropped again
    ready.reset_flag(NETWORK)?;
    println!("  {} ready: {}", ready, ready.get_flag());
    println!();

    Ok(())
}

fn example_bounds() {
    println!("Example 2: Bounds checks");

    match MultipleBinaryFlag::new(1) {
        Ok(_) => println!("  unexpected success"),
        Err(e) => println!("  new(1): {e}"),
    }

    let mut flag = MultipleBinaryFlag::new(7).unwrap();
    if let Err(e) = flag.set_flag(7) {
        println!("  set_flag(7): {e}");
    }
    println!("  still {}", flag.to_text());
    println!();
}

fn example_release() -> Result<(), BinaryFlagError> {
    println!("Example 3: Release");

    let mut flag = MultipleBinaryFlag::new(1_000)?;
    flag.reset_flag(999)?;
    flag.release();

    println!("  released: {}", flag.is_released());
    println!("  cells set: {} of {}", flag.count_set(), flag.len());
    println!("  {:?}", flag);

    Ok(())
}
