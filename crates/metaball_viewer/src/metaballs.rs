//! Metaballs scene
//!
//! Animated metaballs remeshed every frame by `metaball_mesh`. The generator
//! lives in a resource; each frame it advances the field, rebuilds its
//! buffers and the result is copied into a single Bevy mesh.

use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology, VertexAttributeValues};
use metaball_mesh::{
  ExtractConfig, FrontFace, MeshBuffers, MeshGenerator, MetaballField, COLLECT_METRICS,
};
use rand::Rng;
use std::sync::atomic::Ordering;

/// Plugin for the metaballs scene
pub struct MetaballsPlugin;

impl Plugin for MetaballsPlugin {
  fn build(&self, app: &mut App) {
    let generator = match MeshGenerator::new(MetaballField::default(), initial_config()) {
      Ok(generator) => generator,
      Err(err) => {
        error!("[Metaballs] Invalid extraction config: {err}");
        return;
      }
    };

    app
      .insert_resource(SurfaceGenerator(generator))
      .init_resource::<ViewerSettings>()
      .insert_resource(StatsTimer(Timer::from_seconds(1.0, TimerMode::Repeating)))
      // Runs after the main camera has been spawned in Startup.
      .add_systems(PostStartup, setup)
      .add_systems(
        Update,
        (
          orbit_camera,
          handle_keyboard,
          update_surface,
          log_stats,
        )
          .chain(),
      );
  }
}

/// Finest cell size reachable from the keyboard (128³ cells at scene size 8).
const MIN_CELL_SIZE: f32 = 0.0625;

/// Host-side config: counter-clockwise winding to match Bevy's front faces.
fn initial_config() -> ExtractConfig {
  ExtractConfig::default().with_front_face(FrontFace::CounterClockwise)
}

// =============================================================================
// Resources
// =============================================================================

/// The extractor and its animated field.
#[derive(Resource)]
struct SurfaceGenerator(MeshGenerator<MetaballField>);

/// Keyboard-controlled viewer state
#[derive(Resource)]
struct ViewerSettings {
  /// Pause animation
  paused: bool,
  /// Animation clock, frozen while paused
  animation_time: f32,
  /// Rebuild without advancing on the next frame
  force_remesh: bool,
}

impl Default for ViewerSettings {
  fn default() -> Self {
    Self {
      paused: false,
      animation_time: 0.0,
      force_remesh: true,
    }
  }
}

#[derive(Resource)]
struct StatsTimer(Timer);

/// Marker for the surface mesh entity
#[derive(Component)]
struct SurfaceMesh;

// =============================================================================
// Camera
// =============================================================================

/// Orbit controller attached to the main camera
#[derive(Component)]
struct OrbitCamera {
  focus: Vec3,
  radius: f32,
  pitch: f32,
  yaw: f32,
}

impl Default for OrbitCamera {
  fn default() -> Self {
    Self {
      focus: Vec3::new(0.0, 0.5, 0.0),
      radius: 9.0,
      pitch: -0.3,
      yaw: 0.5,
    }
  }
}

fn orbit_transform(orbit: &OrbitCamera) -> Transform {
  let rotation = Quat::from_euler(EulerRot::YXZ, orbit.yaw, orbit.pitch, 0.0);
  let position = orbit.focus + rotation * Vec3::new(0.0, 0.0, orbit.radius);
  Transform::from_translation(position).looking_at(orbit.focus, Vec3::Y)
}

fn orbit_camera(
  mouse_button: Res<ButtonInput<MouseButton>>,
  mouse_motion: Res<AccumulatedMouseMotion>,
  mouse_scroll: Res<AccumulatedMouseScroll>,
  mut query: Query<(&mut OrbitCamera, &mut Transform)>,
) {
  let Ok((mut orbit, mut transform)) = query.single_mut() else {
    return;
  };

  if mouse_button.pressed(MouseButton::Right) {
    let delta = mouse_motion.delta;
    orbit.yaw -= delta.x * 0.005;
    orbit.pitch -= delta.y * 0.005;
    orbit.pitch = orbit.pitch.clamp(-1.5, 1.5);
  }

  let scroll = mouse_scroll.delta.y;
  if scroll != 0.0 {
    orbit.radius -= scroll * orbit.radius * 0.1;
    orbit.radius = orbit.radius.clamp(2.0, 40.0);
  }

  *transform = orbit_transform(&orbit);
}

// =============================================================================
// Setup
// =============================================================================

fn setup(
  mut commands: Commands,
  mut meshes: ResMut<Assets<Mesh>>,
  mut materials: ResMut<Assets<StandardMaterial>>,
  camera_query: Query<Entity, With<crate::MainCamera>>,
) {
  // Configure existing main camera with OrbitCamera
  let orbit = OrbitCamera::default();
  let transform = orbit_transform(&orbit);
  if let Ok(camera_entity) = camera_query.single() {
    commands.entity(camera_entity).insert((transform, orbit));
  }

  commands.insert_resource(ClearColor(Color::srgb(0.1, 0.1, 0.15)));

  // Directional light
  commands.spawn((
    DirectionalLight {
      illuminance: 15000.0,
      shadows_enabled: true,
      ..default()
    },
    Transform::from_rotation(Quat::from_euler(EulerRot::XYZ, -0.8, 0.4, 0.0)),
  ));

  // Ambient light
  commands.insert_resource(AmbientLight {
    color: Color::WHITE,
    brightness: 200.0,
    ..default()
  });

  let surface_material = materials.add(StandardMaterial {
    base_color: Color::srgb(0.3, 0.5, 0.8),
    perceptual_roughness: 0.5,
    metallic: 0.1,
    ..default()
  });

  commands.spawn((
    Mesh3d(meshes.add(Mesh::new(PrimitiveTopology::TriangleList, default()))),
    MeshMaterial3d(surface_material),
    Transform::IDENTITY,
    SurfaceMesh,
  ));

  // Ground plane below the sampled region
  commands.spawn((
    Mesh3d(meshes.add(Plane3d::new(Vec3::Y, Vec2::splat(20.0)))),
    MeshMaterial3d(materials.add(StandardMaterial {
      base_color: Color::srgb(0.15, 0.15, 0.15),
      perceptual_roughness: 0.9,
      metallic: 0.0,
      ..default()
    })),
    Transform::from_translation(Vec3::new(0.0, -4.0, 0.0)),
  ));

  info!("[Metaballs] Scene loaded");
}

// =============================================================================
// Input
// =============================================================================

fn handle_keyboard(
  keyboard: Res<ButtonInput<KeyCode>>,
  mut settings: ResMut<ViewerSettings>,
  mut generator: ResMut<SurfaceGenerator>,
) {
  let generator = &mut generator.0;

  if keyboard.just_pressed(KeyCode::Space) {
    settings.paused = !settings.paused;
    info!(
      "[Metaballs] Animation {}",
      if settings.paused { "paused" } else { "resumed" }
    );
  }

  let cell_scale = if keyboard.just_pressed(KeyCode::BracketLeft) {
    Some(0.5)
  } else if keyboard.just_pressed(KeyCode::BracketRight) {
    Some(2.0)
  } else {
    None
  };
  if let Some(scale) = cell_scale {
    let cell_size = generator.config().cell_size * scale;
    let config = generator.config().clone().with_cell_size(cell_size);
    if cell_size < MIN_CELL_SIZE {
      warn!("[Metaballs] Cell size {cell_size} is below the interactive limit {MIN_CELL_SIZE}");
    } else {
      match generator.set_config(config) {
        Ok(()) => {
          info!(
            "[Metaballs] Cell size {} ({}³ cells)",
            cell_size,
            generator.grid().cells_per_axis()
          );
          generator.stats_mut().reset();
          settings.force_remesh = true;
        }
        Err(err) => warn!("[Metaballs] Cell size rejected: {err}"),
      }
    }
  }

  if keyboard.just_pressed(KeyCode::KeyP) {
    let parallel = !generator.config().parallel;
    let config = generator.config().clone().with_parallel(parallel);
    match generator.set_config(config) {
      Ok(()) => {
        info!(
          "[Metaballs] Parallel extraction {} ({} threads)",
          if parallel { "on" } else { "off" },
          rayon::current_num_threads()
        );
        generator.stats_mut().reset();
      }
      Err(err) => warn!("[Metaballs] Config rejected: {err}"),
    }
  }

  if keyboard.just_pressed(KeyCode::KeyR) {
    let mut rng = rand::rng();
    let field = generator.field_mut();
    for index in 0..field.balls.len() {
      let center = metaball_mesh::Vec3::new(
        rng.random_range(-2.0..2.0),
        rng.random_range(-1.5..2.0),
        rng.random_range(-1.0..1.0),
      );
      field.set_center(index, center);
    }
    info!("[Metaballs] Scattered {} balls", field.balls.len());
    settings.force_remesh = true;
  }

  if keyboard.just_pressed(KeyCode::KeyM) {
    let enabled = !COLLECT_METRICS.load(Ordering::Relaxed);
    COLLECT_METRICS.store(enabled, Ordering::Relaxed);
    info!(
      "[Metaballs] Stats collection {}",
      if enabled { "on" } else { "off" }
    );
  }
}

// =============================================================================
// Mesh Generation
// =============================================================================

/// Advance the field (unless paused), remesh and upload.
fn update_surface(
  time: Res<Time>,
  mut settings: ResMut<ViewerSettings>,
  mut generator: ResMut<SurfaceGenerator>,
  mut meshes: ResMut<Assets<Mesh>>,
  surface_query: Query<&Mesh3d, With<SurfaceMesh>>,
) {
  let generator = &mut generator.0;

  let buffers = if !settings.paused {
    settings.animation_time = time.elapsed_secs();
    generator.update(settings.animation_time)
  } else if settings.force_remesh {
    generator.rebuild()
  } else {
    return;
  };
  settings.force_remesh = false;

  let Ok(mesh_handle) = surface_query.single() else {
    return;
  };
  if let Some(mesh) = meshes.get_mut(&mesh_handle.0) {
    upload(mesh, buffers);
  }
}

/// Copy extractor buffers into a Bevy mesh.
fn upload(mesh: &mut Mesh, buffers: &MeshBuffers) {
  mesh.insert_attribute(
    Mesh::ATTRIBUTE_POSITION,
    VertexAttributeValues::Float32x3(buffers.positions.clone()),
  );
  mesh.insert_attribute(
    Mesh::ATTRIBUTE_NORMAL,
    VertexAttributeValues::Float32x3(buffers.normals.clone()),
  );
  mesh.insert_indices(Indices::U32(buffers.indices.clone()));
}

// =============================================================================
// Statistics
// =============================================================================

fn log_stats(time: Res<Time>, mut timer: ResMut<StatsTimer>, generator: Res<SurfaceGenerator>) {
  if !timer.0.tick(time.delta()).just_finished() {
    return;
  }

  let generator = &generator.0;
  let stats = generator.stats();
  let Some((min, max)) = stats.min_max_extract_us() else {
    return;
  };

  info!(
    "[Metaballs] extract avg {:.0}us min {}us max {}us med {}us | {} verts {} tris {:.1} KiB | cell {} {}",
    stats.avg_extract_us(),
    min,
    max,
    stats.median_extract_us().unwrap_or(0),
    stats.last_vertices,
    stats.last_triangles,
    stats.mesh_memory_bytes() as f64 / 1024.0,
    generator.config().cell_size,
    if generator.config().parallel {
      "parallel"
    } else {
      "serial"
    },
  );
}
