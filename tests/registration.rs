//! Registration, replacement, binding, and the global surface.

mod common;

use common::{call_log, entries, returning_target};
use stagehand::testing::RecordingHandler;
use stagehand::{ActionRegistry, ActionValue, HandlerDescriptor, HandlerLocation, HandlerTarget};

#[test]
fn same_key_leaves_one_entry_with_the_new_policy() {
    let registry = ActionRegistry::new();
    registry.register_with_priority(
        "render",
        HandlerDescriptor::from_path("Demo.Hooks.Draw").unwrap(),
        5,
    );
    registry.register_with_priority(
        "render",
        HandlerDescriptor::from_path("Demo.Hooks.Draw")
            .unwrap()
            .throw_on_exception(),
        2,
    );

    let stored = registry.all_for("render");
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].priority(), 2);
    assert!(stored[0].throws_on_exception());
}

#[test]
fn module_autofill_lines_registration_up_with_binding() {
    // the descriptor and the binding both omit the module; both default to
    // the registry's module, so they resolve to each other
    let registry = ActionRegistry::with_default_module("storefront");
    let log = call_log();
    registry
        .bind_path("Demo.Hooks.Draw", returning_target(&log, "draw", "drawn"))
        .unwrap();
    registry.register("render", HandlerDescriptor::from_path("Demo.Hooks.Draw").unwrap());

    let out = registry.perform("render").unwrap();
    assert_eq!(out.unwrap().downcast_ref::<&str>(), Some(&"drawn"));
    assert_eq!(
        registry.all_for("render")[0].location().module(),
        Some("storefront")
    );
}

#[test]
fn mismatched_module_does_not_resolve() {
    let registry = ActionRegistry::new();
    let handler = RecordingHandler::void();
    registry.bind(
        HandlerLocation::parse("Demo.Hooks.Draw")
            .unwrap()
            .in_module("plugin"),
        HandlerTarget::singleton(handler.clone()),
    );
    // registered against the default module, bound under "plugin"
    registry.register("render", HandlerDescriptor::from_path("Demo.Hooks.Draw").unwrap());

    assert!(registry.perform("render").unwrap().is_none());
    assert_eq!(handler.calls(), 0);
}

#[test]
fn rebinding_a_location_replaces_its_target() {
    let registry = ActionRegistry::new();
    let log = call_log();
    registry
        .bind_path("Demo.Hooks.Draw", returning_target(&log, "first", "one"))
        .unwrap();
    registry
        .bind_path("Demo.Hooks.Draw", returning_target(&log, "second", "two"))
        .unwrap();
    registry.register("render", HandlerDescriptor::from_path("Demo.Hooks.Draw").unwrap());

    let out = registry.perform("render").unwrap();
    assert_eq!(out.unwrap().downcast_ref::<&str>(), Some(&"two"));
    assert_eq!(entries(&log), vec!["second"]);
}

#[test]
fn all_reflects_stored_order_across_actions() {
    let registry = ActionRegistry::new();
    registry.register("render", HandlerDescriptor::from_path("Demo.Hooks.Draw").unwrap());
    registry.register("save", HandlerDescriptor::from_path("Demo.Hooks.Persist").unwrap());
    registry.register("render", HandlerDescriptor::from_path("Demo.Hooks.Trace").unwrap());

    let all: Vec<String> = registry
        .all()
        .iter()
        .map(|descriptor| descriptor.location().method().to_owned())
        .collect();
    assert_eq!(all, vec!["Draw", "Persist", "Trace"]);
    assert_eq!(registry.len(), 3);
}

#[test]
fn global_surface_round_trips() {
    // unique action and path names keep this independent of other tests
    // sharing the process-wide registry
    let handler = RecordingHandler::returning(ActionValue::new("global result"));
    stagehand::bind_path(
        "GlobalSuite.Hooks.Answer",
        HandlerTarget::singleton(handler.clone()),
    )
    .unwrap();
    stagehand::register(
        "global-suite.answer",
        HandlerDescriptor::from_path("GlobalSuite.Hooks.Answer").unwrap(),
    );

    assert_eq!(stagehand::all_for("global-suite.answer").len(), 1);
    let out = stagehand::perform("global-suite.answer").unwrap();
    assert_eq!(out.unwrap().downcast_ref::<&str>(), Some(&"global result"));
    assert_eq!(handler.calls(), 1);

    let out = stagehand::perform_with(
        "global-suite.answer",
        &[ActionValue::new("ignored seed gets replaced")],
    )
    .unwrap();
    assert_eq!(out.unwrap().downcast_ref::<&str>(), Some(&"global result"));
}
