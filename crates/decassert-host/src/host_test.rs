use super::{Args, Host, HostError, Method, Plugin};
use crate::{Assertion, AssertionError, Value};
use std::cell::Cell;
use std::rc::Rc;

struct CountingPlugin {
    installs: Rc<Cell<u32>>,
}

impl Plugin for CountingPlugin {
    fn name(&self) -> &str {
        "counting"
    }

    fn install(&self, host: &mut Host) -> Result<(), HostError> {
        self.installs.set(self.installs.get() + 1);
        host.add_property(
            "marked",
            Rc::new(|assertion: &mut Assertion| -> Result<(), AssertionError> {
                assertion.set_flag("marked", true);
                Ok(())
            }),
        );
        Ok(())
    }
}

#[test]
fn use_plugin_installs_once_per_host() {
    let installs = Rc::new(Cell::new(0));
    let plugin = CountingPlugin {
        installs: installs.clone(),
    };
    let mut host = Host::new();
    host.use_plugin(&plugin).expect("first install");
    host.use_plugin(&plugin).expect("second install is a no-op");
    assert_eq!(installs.get(), 1);
    assert!(host.is_installed("counting"));

    let mut other = Host::new();
    other.use_plugin(&plugin).expect("install on another host");
    assert_eq!(installs.get(), 2);
}

#[test]
fn overwrite_method_hands_over_the_original() {
    let mut host = Host::new();
    host.overwrite_method("equal", |original: Method| -> Method {
        Rc::new(move |assertion: &mut Assertion, args: &Args| {
            if assertion.flag_enabled("loose") {
                return Ok(());
            }
            original(assertion, args)
        })
    })
    .expect("equal exists");

    assert!(host.expect(1).equal(2).is_err());

    let mut loose = host.expect(1);
    loose = loose.step("to", Args::default()).expect("chain");
    let mut assertion = loose.into_assertion();
    assertion.set_flag("loose", true);
    let method = host.method("equal").expect("registered");
    assert!(method(&mut assertion, &Args::new([Value::from(2)])).is_ok());
}

#[test]
fn overwrite_unknown_method_is_rejected() {
    let mut host = Host::bare();
    let error = host
        .overwrite_method("missing", |original| original)
        .expect_err("must fail");
    assert_eq!(error, HostError::UnknownMethod("missing".to_string()));
}

#[test]
fn unknown_assertions_are_reported() {
    let host = Host::new();
    let error = host.expect(1).property("shiny").expect_err("must fail");
    assert!(matches!(error, AssertionError::UnknownAssertion(name) if name == "shiny"));
}

#[test]
fn missing_arguments_are_reported() {
    let host = Host::new();
    let error = host
        .expect(1)
        .call("closeTo", Args::new([Value::from(1)]))
        .expect_err("must fail");
    assert!(matches!(
        error,
        AssertionError::MissingArgument { expected: 2, actual: 1, .. }
    ));
}

#[test]
fn custom_message_is_carried_by_args() {
    let host = Host::new();
    let error = host
        .expect(1)
        .call("equal", Args::new([Value::from(2)]).with_message("totals"))
        .expect_err("must fail");
    assert_eq!(error.to_string(), "totals: expected 1 to equal 2");
}

#[test]
fn step_prefers_properties_and_keeps_their_message() {
    let host = Host::new();
    let error = host
        .expect(0)
        .step("ok", Args::default().with_message("balance"))
        .expect_err("must fail");
    assert_eq!(error.to_string(), "balance: expected 0 to be truthy");

    host.expect(1)
        .step("equal", Args::new([Value::from(1)]))
        .expect("method step");
}
