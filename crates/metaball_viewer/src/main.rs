//! metaball_viewer - Bevy host for the metaball_mesh extractor
//!
//! Remeshes three drifting metaballs every frame with marching cubes.
//!
//! Controls:
//! - Right mouse drag: orbit
//! - Mouse wheel: zoom
//! - Space: pause / resume the animation
//! - [ / ]: halve / double the cell size
//! - P: toggle parallel extraction
//! - R: scatter the metaballs
//! - M: toggle stats collection
//! - Esc: quit

mod metaballs;

use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;
use metaballs::MetaballsPlugin;

fn main() {
  App::new()
    .add_plugins(DefaultPlugins.set(WindowPlugin {
      primary_window: Some(Window {
        title: "Metaballs - Marching Cubes".into(),
        resolution: (1600., 900.).into(),
        ..default()
      }),
      ..default()
    }))
    .add_plugins(FrameTimeDiagnosticsPlugin::default())
    .add_plugins(MetaballsPlugin)
    // Persistent camera (spawned once at startup)
    .add_systems(Startup, spawn_main_camera)
    .add_systems(Update, exit_on_escape)
    .run();
}

/// Marker for the main camera
#[derive(Component)]
pub struct MainCamera;

fn spawn_main_camera(mut commands: Commands) {
  commands.spawn((Camera3d::default(), MainCamera));
}

fn exit_on_escape(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
  if keyboard.just_pressed(KeyCode::Escape) {
    info!("Exiting");
    exit.write(AppExit::Success);
  }
}
