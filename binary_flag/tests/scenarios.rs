//! Behavioural contracts of `MultipleBinaryFlag`, exercised through the public API only.

use binary_flag::{BinaryFlagError, MAX_LENGTH, MultipleBinaryFlag};

/// Three flags of seven cells: implicit default, explicit `true`, explicit `false`.
fn flags() -> (MultipleBinaryFlag, MultipleBinaryFlag, MultipleBinaryFlag) {
    let _ = simple_logger::init_with_level(log::Level::Trace);
    (
        MultipleBinaryFlag::new(7).unwrap(),
        MultipleBinaryFlag::with_default(7, true).unwrap(),
        MultipleBinaryFlag::with_default(7, false).unwrap(),
    )
}

fn is_index_error(result: Result<(), BinaryFlagError>) -> bool {
    matches!(result, Err(BinaryFlagError::IndexOutOfRange { .. }))
}

#[test]
fn length_below_minimum_rejected() {
    for length in [0, 1] {
        assert!(matches!(
            MultipleBinaryFlag::new(length),
            Err(BinaryFlagError::LengthOutOfRange { .. })
        ));
    }
}

#[test]
fn length_above_maximum_rejected() {
    assert!(matches!(
        MultipleBinaryFlag::new(17_179_868_705),
        Err(BinaryFlagError::LengthOutOfRange {
            length: 17_179_868_705,
            ..
        })
    ));
}

#[test]
fn permissible_lengths() {
    for length in [2, 7, 64, 65, 2021] {
        let flag = MultipleBinaryFlag::new(length).unwrap();
        assert_eq!(flag.len(), length);
        assert_eq!(flag.to_text().len() as u64, length);
        assert!(flag.get_flag());
    }
}

#[test]
fn maximum_length_is_constructible() {
    assert_eq!(MAX_LENGTH, 17_179_868_704);
    let mut flag = MultipleBinaryFlag::new(MAX_LENGTH).unwrap();
    assert_eq!(flag.len(), MAX_LENGTH);

    flag.reset_flag(MAX_LENGTH - 1).unwrap();
    assert_eq!(flag.get(MAX_LENGTH - 1), Some(false));
    assert_eq!(flag.get(0), Some(true));
    assert!(is_index_error(flag.set_flag(MAX_LENGTH)));
}

#[test]
fn default_value_is_true() {
    let (flag_1, flag_2, _) = flags();
    assert!(flag_1.get_flag());
    assert!(flag_2.get_flag());
    assert_eq!(flag_1.to_text(), flag_2.to_text());
}

#[test]
fn get_flag_follows_default() {
    let (flag_1, flag_2, flag_3) = flags();
    assert!(flag_1.get_flag());
    assert!(flag_2.get_flag());
    assert!(!flag_3.get_flag());
}

#[test]
fn equality_is_identity() {
    let (flag_1, flag_2, flag_3) = flags();
    let flag_1_copy = MultipleBinaryFlag::new(7).unwrap();

    assert_ne!(flag_1, flag_2);
    assert_ne!(flag_2, flag_3);
    assert_ne!(flag_1, flag_3);
    assert_ne!(flag_1, flag_1_copy);

    assert_eq!(flag_1, flag_1);
    assert_eq!(flag_1.get_flag(), flag_1_copy.get_flag());
}

#[test]
fn set_flag_out_of_range() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();
    assert!(is_index_error(flag_1.set_flag(7)));
    assert!(is_index_error(flag_2.set_flag(20)));
    assert!(is_index_error(flag_3.set_flag(7)));

    assert!(flag_1.get_flag());
    assert_eq!(flag_3.to_text(), "FFFFFFF");
}

#[test]
fn reset_flag_out_of_range() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();
    assert!(is_index_error(flag_1.reset_flag(7)));
    assert!(is_index_error(flag_2.reset_flag(20)));
    assert!(is_index_error(flag_3.reset_flag(7)));

    assert!(flag_1.get_flag());
    assert_eq!(flag_2.to_text(), "TTTTTTT");
}

#[test]
fn set_flag_position() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();

    flag_1.set_flag(2).unwrap();
    assert!(flag_1.get_flag());
    flag_2.set_flag(0).unwrap();
    assert!(flag_2.get_flag());
    flag_3.set_flag(5).unwrap();
    assert!(!flag_3.get_flag());
}

#[test]
fn reset_flag_position() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();

    flag_1.reset_flag(2).unwrap();
    assert!(!flag_1.get_flag());
    flag_2.reset_flag(0).unwrap();
    assert!(!flag_2.get_flag());
    flag_3.reset_flag(5).unwrap();
    assert!(!flag_3.get_flag());
}

#[test]
fn set_every_cell() {
    let (mut flag_1, _, mut flag_3) = flags();

    for i in 0..7 {
        flag_3.set_flag(i).unwrap();
    }
    assert!(flag_3.get_flag());

    for i in 0..7 {
        flag_1.set_flag(i).unwrap();
    }
    assert!(flag_1.get_flag());
}

#[test]
fn reset_every_cell() {
    let (mut flag_1, _, mut flag_3) = flags();

    for i in 0..7 {
        flag_3.reset_flag(i).unwrap();
    }
    assert!(!flag_3.get_flag());

    for i in 0..7 {
        flag_1.reset_flag(i).unwrap();
    }
    assert!(!flag_1.get_flag());
    assert_eq!(flag_1.to_text(), "FFFFFFF");
}

#[test]
fn set_then_reset() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();

    flag_1.set_flag(5).unwrap();
    flag_3.set_flag(4).unwrap();
    assert!(flag_1.get_flag());
    assert!(!flag_3.get_flag());

    flag_1.reset_flag(5).unwrap();
    flag_2.reset_flag(4).unwrap();
    assert!(!flag_1.get_flag());
    assert!(!flag_2.get_flag());
}

#[test]
fn mutations_are_idempotent() {
    let (mut flag_1, _, mut flag_3) = flags();

    flag_3.set_flag(1).unwrap();
    let once = flag_3.to_text();
    flag_3.set_flag(1).unwrap();
    assert_eq!(flag_3.to_text(), once);

    flag_1.reset_flag(1).unwrap();
    let once = flag_1.to_text();
    flag_1.reset_flag(1).unwrap();
    assert_eq!(flag_1.to_text(), once);
}

#[test]
fn release_keeps_flag_usable() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();

    flag_1.release();
    flag_2.release();
    flag_3.release();

    assert!(flag_1.is_released());
    assert!(flag_1.get_flag());
    assert_eq!(flag_3.to_text(), "FFFFFFF");

    flag_2.reset_flag(0).unwrap();
    assert_eq!(flag_2.to_text(), "FTTTTTT");
}

#[test]
fn to_text() {
    let (mut flag_1, mut flag_2, mut flag_3) = flags();
    assert_eq!(flag_1.to_text(), "TTTTTTT");
    assert_eq!(flag_2.to_text(), "TTTTTTT");
    assert_eq!(flag_3.to_text(), "FFFFFFF");

    flag_1.reset_flag(0).unwrap();
    flag_2.reset_flag(3).unwrap();
    flag_3.set_flag(0).unwrap();

    assert_eq!(flag_1.to_text(), "FTTTTTT");
    assert_eq!(flag_2.to_text(), "TTTFTTT");
    assert_eq!(flag_3.to_text(), "TFFFFFF");
    assert!(!flag_3.get_flag());
    assert_eq!(flag_2.to_string(), flag_2.to_text());
}
