//! Scripted demo: drives a headless interactor through a rotate gesture,
//! key commands and a short animation, logging every notification.

use anyhow::{Context, Result};
use interactor_style::{
    Channel, EventSource, HeadlessInteractor, InteractorSettings, InteractorStyle, MouseButton,
    SceneRenderer, Viewport, logging,
};
use std::rc::Rc;
use tracing::info;

fn main() -> Result<()> {
    let settings = InteractorSettings::load_or_default();
    logging::init(&settings).context("failed to initialize logging")?;

    let source = HeadlessInteractor::new();
    let renderer = SceneRenderer::new();
    renderer.add_actor("cone");
    renderer.add_actor("sphere");
    source.add_renderer(Viewport::new(0.0, 0.0, 800.0, 600.0), renderer.clone());

    let style = InteractorStyle::with_settings(settings);
    style.set_handler(Channel::LeftButtonPress, |style, _| style.start_rotate());
    style.set_handler(Channel::LeftButtonRelease, |style, _| style.end_rotate());
    style.set_handler(Channel::Animation, |style, data| {
        info!(state = %style.state(), x = data.position.x, y = data.position.y, "animation frame");
    });
    style.on_start_interaction_event(|event| info!(?event, "start"));
    style.on_end_interaction_event(|event| info!(?event, "end"));

    let bound: Rc<dyn EventSource> = source.clone();
    style.bind(Some(bound));

    source.button_press(MouseButton::Left, 400.0, 300.0);
    source.mouse_move(420.0, 310.0);
    source.button_release(MouseButton::Left, 420.0, 310.0);

    source.press_key('w');
    source.press_key('R');
    source.mouse_move(900.0, 700.0);
    source.press_key('s');

    style.set_animation_on();
    style.start_rotate();
    for _ in 0..3 {
        source.tick();
    }
    style.end_rotate();
    style.set_animation_off();

    style.unbind();

    info!(
        renders = source.render_count(),
        frames = source.frame_count(),
        camera_resets = renderer.camera_resets(),
        "demo finished"
    );

    Ok(())
}
