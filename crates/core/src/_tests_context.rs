#![cfg(test)]

use std::cell::Cell;

use super::config::BridgeConfig;
use super::context::BindingContext;
use super::error::InitError;
use super::host::{CufftHandle, LocalHost, ManagedHost, PlanField, Pointer, StreamRef};
use super::logging::LogLevel;
use super::native::{DeviceAddress, StreamAddress};
use super::recording::RecordingCufft;
use super::transform::TransformTypePolicy;

/// Host whose initialization steps can be made to fail, counting how often
/// each step ran.
#[derive(Debug, Default)]
struct FlakyHost {
    fail_field: bool,
    fail_pointers: bool,
    field_lookups: Cell<usize>,
    pointer_inits: Cell<usize>,
    exception_inits: Cell<usize>,
}

/// Handle type with the plan stored under a different field.
struct LegacyHandle {
    raw: i32,
}

impl ManagedHost for FlakyHost {
    type Handle = LegacyHandle;
    type Pointer = Pointer;
    type Stream = StreamRef;

    fn plan_field(&self) -> Result<PlanField<LegacyHandle>, InitError> {
        self.field_lookups.set(self.field_lookups.get() + 1);
        if self.fail_field {
            return Err(InitError::PlanField {
                class: "LegacyHandle",
                field: "plan",
            });
        }
        Ok(PlanField::new(|h| h.raw, |h, plan| h.raw = plan))
    }

    fn init_pointer_marshalling(&self) -> Result<(), InitError> {
        self.pointer_inits.set(self.pointer_inits.get() + 1);
        if self.fail_pointers {
            return Err(InitError::PointerMarshalling("no pointer class".into()));
        }
        Ok(())
    }

    fn init_exception_signaling(&self) -> Result<(), InitError> {
        self.exception_inits.set(self.exception_inits.get() + 1);
        Ok(())
    }

    fn pointer_address(&self, pointer: &Pointer) -> DeviceAddress {
        pointer.address()
    }

    fn stream_address(&self, stream: &StreamRef) -> StreamAddress {
        stream.address()
    }
}

#[test]
fn initialization_resolves_everything_once() {
    let ctx = BindingContext::initialize(RecordingCufft::new().with_next_plan(3), FlakyHost::default())
        .unwrap();
    let mut handle = LegacyHandle { raw: 0 };

    ctx.plan_1d(Some(&mut handle), 8, 0x29, 1).unwrap();
    ctx.plan_1d(Some(&mut handle), 8, 0x29, 1).unwrap();

    assert_eq!(handle.raw, 4);
    assert_eq!(ctx.host().field_lookups.get(), 1);
    assert_eq!(ctx.host().pointer_inits.get(), 1);
    assert_eq!(ctx.host().exception_inits.get(), 1);
}

#[test]
fn field_resolution_failure_aborts_load() {
    let host = FlakyHost {
        fail_field: true,
        ..FlakyHost::default()
    };

    let err = BindingContext::initialize(RecordingCufft::new(), host).unwrap_err();

    assert!(matches!(err, InitError::PlanField { field: "plan", .. }));
    assert_eq!(
        err.to_string(),
        "failed to resolve field 'plan' on handle type 'LegacyHandle'"
    );
}

#[test]
fn pointer_marshalling_failure_aborts_load() {
    let host = FlakyHost {
        fail_pointers: true,
        ..FlakyHost::default()
    };

    let err = BindingContext::initialize(RecordingCufft::new(), host).unwrap_err();

    assert!(matches!(err, InitError::PointerMarshalling(_)));
}

#[test]
fn config_is_kept_and_log_level_applied() {
    let config = BridgeConfig {
        log_level: Some(LogLevel::Trace),
        transform_types: TransformTypePolicy::Reject,
    };

    let ctx = BindingContext::with_config(RecordingCufft::new(), LocalHost, config).unwrap();

    assert_eq!(ctx.config(), &config);
    assert_eq!(log::max_level(), log::LevelFilter::Trace);
}

#[test]
fn local_host_reads_and_writes_plan_field() {
    let field = LocalHost.plan_field().unwrap();
    let mut handle = CufftHandle::from_raw(1);

    assert_eq!(field.get(&handle), 1);
    field.set(&mut handle, 99);
    assert_eq!(handle.plan(), 99);
    assert_eq!(handle.to_string(), "cufftHandle[plan=99]");
}
