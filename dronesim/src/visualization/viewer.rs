use bevy::prelude::*;
use bevy::math::primitives::{Sphere, Cuboid};

use crate::simulation::history::History;
use crate::simulation::states::NVec;

/// Tags the sphere that follows the recorded path
#[derive(Component)]
struct DroneMarker;

/// Recorded path, already mapped into screen space
#[derive(Resource)]
struct Replay {
    path: Vec<Vec3>,
    target: Vec3,
    frame: usize,
}

/// Half-width of the scene the path is scaled into
const SCENE_EXTENT: f32 = 300.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 900.0;

const MARKER_RADIUS: f32 = 6.0;

/// Replay a finished run in a Bevy 3D window, one history record per frame
///
/// Runs with fewer than three axes are padded with zeros; extra axes are not shown
pub fn run_viewer(history: &History) {
    log::info!("run_viewer: replaying {} steps in {} dimensions", history.len(), history.dimension());

    let raw: Vec<Vec3> = history.iter().map(|r| to_vec3(&r.position)).collect();
    let raw_target = to_vec3(history.desired_position());

    // Fit the path and the target into the scene
    let extent = raw
        .iter()
        .chain(std::iter::once(&raw_target))
        .map(|p| p.abs().max_element())
        .fold(0.0_f32, f32::max)
        .max(1e-6);
    let scale = SCENE_EXTENT / extent;

    let replay = Replay {
        path: raw.iter().map(|p| *p * scale).collect(),
        target: raw_target * scale,
        frame: 0,
    };

    App::new()
        .insert_resource(replay)
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_replay)
        .add_systems(Update, (advance_replay, draw_path))
        .run();
}

/// First three components of `v`, zero-padded
fn to_vec3(v: &NVec) -> Vec3 {
    let c = |k: usize| v.get(k).copied().unwrap_or(0.0) as f32;
    Vec3::new(c(0), c(1), c(2))
}

fn unlit(materials: &mut Assets<StandardMaterial>, color: Color) -> Handle<StandardMaterial> {
    materials.add(StandardMaterial {
        base_color: color,
        unlit: true,
        ..Default::default()
    })
}

/// Startup system: camera, light, axes, start/target markers and the drone
fn setup_replay(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    replay: Res<Replay>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(400.0, 300.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 2000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    let start = replay.path.first().copied().unwrap_or(Vec3::ZERO);

    // Start (green) and target (red)
    commands.spawn(PbrBundle {
        mesh: meshes.add(Sphere::new(MARKER_RADIUS).mesh()),
        material: unlit(&mut materials, Color::srgb(0.0, 1.0, 0.0)),
        transform: Transform::from_translation(start),
        ..Default::default()
    });
    commands.spawn(PbrBundle {
        mesh: meshes.add(Cuboid::new(MARKER_RADIUS * 2.0, MARKER_RADIUS * 2.0, MARKER_RADIUS * 2.0).mesh()),
        material: unlit(&mut materials, Color::srgb(1.0, 0.0, 0.0)),
        transform: Transform::from_translation(replay.target),
        ..Default::default()
    });

    commands.spawn((
        PbrBundle {
            mesh: meshes.add(Sphere::new(MARKER_RADIUS).mesh()),
            material: unlit(&mut materials, Color::srgb(1.0, 1.0, 1.0)),
            transform: Transform::from_translation(start),
            ..Default::default()
        },
        DroneMarker,
    ));
}

/// Move the drone one record further along the path, holding at the end
fn advance_replay(mut replay: ResMut<Replay>, mut query: Query<&mut Transform, With<DroneMarker>>) {
    let Some(&pos) = replay.path.get(replay.frame) else {
        return;
    };
    for mut transform in &mut query {
        transform.translation = pos;
    }
    if replay.frame + 1 < replay.path.len() {
        replay.frame += 1;
    }
}

/// Trail of the path travelled so far
fn draw_path(replay: Res<Replay>, mut gizmos: Gizmos) {
    let end = (replay.frame + 1).min(replay.path.len());
    gizmos.linestrip(replay.path[..end].iter().copied(), Color::srgb(0.2, 0.4, 1.0));
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let axis_len = 2.0 * SCENE_EXTENT;
    let axis_thickness = 0.5;

    // X red, Y green, Z blue; cuboids are centered so each crosses the origin
    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (size, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: unlit(materials, color),
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
