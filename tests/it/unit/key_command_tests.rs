//! Unit tests for the built-in key commands.

use crate::helpers::{RecordingSource, TestRigBuilder, count_warnings, default_rig, new_journal};
use interactor_style::{
    Channel, EventData, InteractorSettings, InteractorStyle, Renderer, Representation,
    SceneRenderer, Viewport,
};
use std::rc::Rc;

#[test]
fn test_reset_camera_with_renderer() {
    let rig = default_rig();

    let (_, warnings) = count_warnings(|| rig.source.press_key('r'));

    assert_eq!(rig.renderer.camera_resets(), 1);
    assert_eq!(rig.renderer.clipping_range_resets(), 1);
    assert_eq!(rig.source.render_count(), 1);
    assert_eq!(warnings, 0);
}

#[test]
fn test_reset_camera_without_renderer_warns() {
    let rig = TestRigBuilder::new().without_viewport().build();

    let (_, warnings) = count_warnings(|| rig.source.press_key('r'));

    assert_eq!(rig.renderer.camera_resets(), 0);
    assert_eq!(rig.source.render_count(), 0);
    assert_eq!(warnings, 1);
    assert!(rig.style.current_renderer().is_none());
}

#[test]
fn test_pointer_outside_viewport_warns() {
    let rig = TestRigBuilder::new()
        .with_actors(&["cone"])
        .with_viewport(Viewport::new(0.0, 0.0, 100.0, 100.0))
        .build();

    rig.source.mouse_move(500.0, 500.0);
    let (_, warnings) = count_warnings(|| rig.source.press_key('w'));

    assert_eq!(warnings, 1);
    assert_eq!(
        rig.renderer.scene_actors()[0].representation(),
        Representation::Surface
    );
}

#[test]
fn test_representation_commands_are_case_insensitive() {
    for (lower, upper, expected) in [
        ('w', 'W', Representation::Wireframe),
        ('v', 'V', Representation::Points),
    ] {
        let a = default_rig();
        let b = default_rig();

        a.source.press_key(lower);
        b.source.press_key(upper);

        for rig in [&a, &b] {
            assert!(
                rig.renderer
                    .scene_actors()
                    .iter()
                    .all(|actor| actor.representation() == expected)
            );
            assert_eq!(rig.source.render_count(), 1);
        }
    }
}

#[test]
fn test_surface_restores_representation() {
    let rig = default_rig();

    rig.source.press_key('w');
    rig.source.press_key('S');

    for actor in rig.renderer.scene_actors() {
        assert_eq!(actor.representation(), Representation::Surface);
    }
    assert_eq!(rig.source.render_count(), 2);
}

#[test]
fn test_unknown_key_is_ignored() {
    let rig = default_rig();

    let (_, warnings) = count_warnings(|| {
        rig.source.press_key('x');
        rig.source.press_key('1');
    });

    assert_eq!(warnings, 0);
    assert_eq!(rig.source.render_count(), 0);
    assert_eq!(rig.renderer.camera_resets(), 0);
}

#[test]
fn test_key_commands_can_be_disabled() {
    let settings = InteractorSettings {
        key_commands_enabled: false,
        ..InteractorSettings::default()
    };
    let rig = TestRigBuilder::new().with_settings(settings).build();

    rig.source.press_key('r');

    assert_eq!(rig.renderer.camera_resets(), 0);
    assert_eq!(rig.source.render_count(), 0);
}

#[test]
fn test_clipping_range_adjustment_can_be_disabled() {
    let settings = InteractorSettings {
        auto_adjust_camera_clipping_range: false,
        ..InteractorSettings::default()
    };
    let rig = TestRigBuilder::new().with_settings(settings).build();

    rig.source.press_key('R');

    assert_eq!(rig.renderer.camera_resets(), 1);
    assert_eq!(rig.renderer.clipping_range_resets(), 0);
}

#[test]
fn test_char_handler_can_be_replaced() {
    let rig = default_rig();
    rig.style.set_handler(Channel::Char, |style, _| style.start_zoom());

    rig.source.press_key('r');

    assert_eq!(rig.renderer.camera_resets(), 0);
    assert_eq!(rig.style.state(), interactor_style::InteractionState::Zoom);
}

#[test]
fn test_key_code_comes_from_source() {
    let journal = new_journal();
    let source = RecordingSource::new("a", journal);
    let renderer = SceneRenderer::new();
    source.set_renderer(Some(renderer.clone()));
    source.set_key_code('r');

    let style = InteractorStyle::new();
    style.bind(Some(source.clone()));
    source.deliver(Channel::Char, EventData::default());

    assert_eq!(renderer.camera_resets(), 1);
    assert_eq!(source.renders(), 1);
}

#[test]
fn test_locate_renderer_updates_current_renderer() {
    let rig = TestRigBuilder::new()
        .with_viewport(Viewport::new(0.0, 0.0, 100.0, 100.0))
        .build();
    let right = SceneRenderer::new();
    rig.source
        .add_renderer(Viewport::new(100.0, 0.0, 100.0, 100.0), right.clone());

    let found = rig.style.locate_renderer(150.0, 50.0).expect("right viewport");
    let expected: Rc<dyn Renderer> = right.clone();
    assert!(std::ptr::addr_eq(Rc::as_ptr(&found), Rc::as_ptr(&expected)));

    assert!(rig.style.locate_renderer(500.0, 50.0).is_none());
    assert!(rig.style.current_renderer().is_none());
}
