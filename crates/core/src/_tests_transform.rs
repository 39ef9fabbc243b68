#![cfg(test)]

use super::_tests_support::{capture_logs, errors};
use super::logging::LogLevel;
use super::status::CufftStatus;
use super::transform::{resolve_type, CufftType, TransformTypePolicy};

#[test]
fn every_known_tag_maps_to_itself() {
    for ty in CufftType::ALL {
        assert_eq!(CufftType::from_tag(ty.raw()), Some(ty));
    }
    assert_eq!(CufftType::from_tag(0x29), Some(CufftType::C2C));
    assert_eq!(CufftType::from_tag(0x6c), Some(CufftType::Z2D));
}

#[test]
fn unknown_tags_are_not_types() {
    for tag in [0, 1, 0x28, 0x2b, 0x2d, 0x68, 0x6b, 0x6d, -1, i32::MAX] {
        assert_eq!(CufftType::from_tag(tag), None, "tag {:#x}", tag);
    }
}

#[test]
fn fallback_policy_logs_and_substitutes_c2c() {
    let (ty, logs) = capture_logs(|| resolve_type(0x2b, TransformTypePolicy::Fallback));

    assert_eq!(ty, Some(CufftType::C2C));
    assert_eq!(errors(&logs), vec!["Invalid cufftType specified: 43"]);
}

#[test]
fn known_tags_do_not_log() {
    let (ty, logs) = capture_logs(|| resolve_type(0x6a, TransformTypePolicy::Reject));

    assert_eq!(ty, Some(CufftType::D2Z));
    assert!(errors(&logs).is_empty());
}

#[test]
fn reject_policy_returns_none() {
    let (ty, logs) = capture_logs(|| resolve_type(7, TransformTypePolicy::Reject));

    assert_eq!(ty, None);
    assert_eq!(errors(&logs).len(), 1);
}

#[test]
fn precision_of_types() {
    assert!(CufftType::Z2Z.is_double_precision());
    assert!(CufftType::D2Z.is_double_precision());
    assert!(!CufftType::R2C.is_double_precision());
    assert_eq!(CufftType::C2R.to_string(), "CUFFT_C2R");
}

#[test]
fn status_names() {
    assert!(CufftStatus::SUCCESS.is_success());
    assert!(!CufftStatus::INVALID_PLAN.is_success());
    assert_eq!(CufftStatus::INVALID_DEVICE.to_string(), "CUFFT_INVALID_DEVICE");
    assert_eq!(CufftStatus::NOT_SUPPORTED.name(), Some("CUFFT_NOT_SUPPORTED"));
    assert_eq!(CufftStatus::from(-7).to_string(), "CUFFT_UNKNOWN(-7)");
    assert_eq!(i32::from(CufftStatus::UNALIGNED_DATA), 9);
}

#[test]
fn host_log_levels() {
    assert_eq!(LogLevel::from_host(0).filter(), log::LevelFilter::Off);
    assert_eq!(LogLevel::from_host(1).filter(), log::LevelFilter::Error);
    assert_eq!(LogLevel::from_host(2).filter(), log::LevelFilter::Warn);
    assert_eq!(LogLevel::from_host(3).filter(), log::LevelFilter::Info);
    assert_eq!(LogLevel::from_host(4).filter(), log::LevelFilter::Debug);
    assert_eq!(LogLevel::from_host(5).filter(), log::LevelFilter::Trace);
    assert_eq!(LogLevel::from_host(6).filter(), log::LevelFilter::Trace);
    assert_eq!(LogLevel::from_host(-4), LogLevel::Quiet);
    assert_eq!(LogLevel::from_host(100), LogLevel::DebugTrace);
    assert_eq!("warn".parse::<LogLevel>(), Ok(LogLevel::Warning));
    assert!("loud".parse::<LogLevel>().is_err());
}
